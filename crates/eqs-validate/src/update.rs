//! Single status-update validation.
//!
//! Rules run in a fixed order and the first failure is returned, since the
//! form shows one message at a time.

use eqs_model::{Column, EquipmentRecord, MAX_NOTE_LENGTH, Status};
use thiserror::Error;

/// Why a status update was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    /// No tag given, or the tag does not resolve to a known unit.
    #[error("Por favor, selecione um equipamento.")]
    NoEquipmentSelected,

    /// A column required for the chosen status is empty.
    #[error("{}", required_message(*column))]
    FieldRequired { column: Column },

    /// A coded column holds a value outside its enumeration.
    #[error("Valor inválido para {column}: {value}")]
    InvalidEnum { column: Column, value: String },

    /// The reason is not in the whitelist of the chosen status.
    #[error("Motivo inválido para o status selecionado.")]
    InvalidReasonForStatus { status: Status, reason: String },

    /// The note exceeds the store column width.
    #[error("Observações não podem exceder {max} caracteres.")]
    NoteTooLong { max: usize, actual: usize },
}

fn required_message(column: Column) -> String {
    match column {
        Column::Status => "Por favor, selecione um status.".to_string(),
        Column::Reason => "Por favor, selecione um motivo.".to_string(),
        other => format!("Por favor, preencha o campo {other}."),
    }
}

/// Validates one status-update submission.
///
/// `prior_record_exists` tells whether the submitted tag was resolved to a
/// record of the current dataset. The check order is:
///
/// 1. a tag is given and resolved
/// 2. the status is a known code
/// 3. every column required by that status is filled (reason for ST-BY/MNT)
/// 4. a given reason belongs to the status whitelist (empty for OPE)
/// 5. the note is at most [`MAX_NOTE_LENGTH`] characters
pub fn validate_update(
    record: &EquipmentRecord,
    prior_record_exists: bool,
) -> Result<(), UpdateError> {
    if record.tag.is_empty() || !prior_record_exists {
        return Err(UpdateError::NoEquipmentSelected);
    }

    if record.status.is_empty() {
        return Err(UpdateError::FieldRequired {
            column: Column::Status,
        });
    }
    let Some(status) = record.status() else {
        return Err(UpdateError::InvalidEnum {
            column: Column::Status,
            value: record.status.clone(),
        });
    };

    for column in status.required_fields() {
        if record.get(*column).is_empty() {
            return Err(UpdateError::FieldRequired { column: *column });
        }
    }

    // OPE has an empty whitelist, so any reason given with it is refused.
    if !record.reason.is_empty() && !status.allows_reason(&record.reason) {
        return Err(UpdateError::InvalidReasonForStatus {
            status,
            reason: record.reason.clone(),
        });
    }

    let note_len = record.note_len();
    if note_len > MAX_NOTE_LENGTH {
        return Err(UpdateError::NoteTooLong {
            max: MAX_NOTE_LENGTH,
            actual: note_len,
        });
    }

    Ok(())
}

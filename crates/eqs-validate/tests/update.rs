use eqs_model::{Column, EquipmentRecord, MAINTENANCE_REASONS, STANDBY_REASONS, Status};
use eqs_validate::{UpdateError, validate_update};

fn submission(status: &str, reason: &str) -> EquipmentRecord {
    EquipmentRecord::new("BB-101", status).with(Column::Reason, reason)
}

#[test]
fn operating_without_reason_is_valid() {
    assert_eq!(validate_update(&submission("OPE", ""), true), Ok(()));
}

#[test]
fn operating_with_reason_is_refused() {
    for reason in ["Conveniência operacional", "Manutenção corretiva", "qualquer coisa"] {
        assert_eq!(
            validate_update(&submission("OPE", reason), true),
            Err(UpdateError::InvalidReasonForStatus {
                status: Status::Operating,
                reason: reason.to_string(),
            })
        );
    }
}

#[test]
fn standby_requires_reason() {
    let err = validate_update(&submission("ST-BY", ""), true).unwrap_err();
    assert_eq!(
        err,
        UpdateError::FieldRequired {
            column: Column::Reason
        }
    );
    assert_eq!(err.to_string(), "Por favor, selecione um motivo.");
}

#[test]
fn maintenance_rejects_standby_reason() {
    let err = validate_update(&submission("MNT", "Conveniência operacional"), true).unwrap_err();
    assert_eq!(
        err,
        UpdateError::InvalidReasonForStatus {
            status: Status::Maintenance,
            reason: "Conveniência operacional".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Motivo inválido para o status selecionado.");
}

#[test]
fn whitelisted_reasons_are_accepted() {
    for reason in STANDBY_REASONS {
        assert_eq!(validate_update(&submission("ST-BY", reason), true), Ok(()));
    }
    for reason in MAINTENANCE_REASONS {
        assert_eq!(validate_update(&submission("MNT", reason), true), Ok(()));
    }
}

#[test]
fn reason_match_is_case_sensitive() {
    assert!(matches!(
        validate_update(&submission("ST-BY", "conveniência operacional"), true),
        Err(UpdateError::InvalidReasonForStatus { .. })
    ));
}

#[test]
fn note_over_limit_is_rejected() {
    let record = submission("OPE", "").with(Column::Note, "a".repeat(101));
    assert_eq!(
        validate_update(&record, true),
        Err(UpdateError::NoteTooLong {
            max: 100,
            actual: 101
        })
    );
}

#[test]
fn note_length_counts_emoji_twice() {
    let record = submission("OPE", "").with(Column::Note, "😀".repeat(60));
    assert_eq!(
        validate_update(&record, true),
        Err(UpdateError::NoteTooLong {
            max: 100,
            actual: 120
        })
    );
}

#[test]
fn empty_tag_means_no_selection() {
    let record = EquipmentRecord::new("", "OPE");
    assert_eq!(
        validate_update(&record, true),
        Err(UpdateError::NoEquipmentSelected)
    );
}

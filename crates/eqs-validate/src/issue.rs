//! Row-level validation issues.
//!
//! Each kind carries only the data its message needs.

use std::fmt;

use eqs_model::{Column, Status};
use serde::{Deserialize, Serialize};

/// Problem found in one dataset row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowIssueKind {
    /// TAG is blank.
    TagRequired,
    /// STATUS is not one of the three codes.
    InvalidStatus { value: String },
    /// MOTIVO is filled but not in the whitelist of the row status.
    InvalidReasonForStatus { status: Status, reason: String },
    /// A timestamp cell does not have the required shape.
    InvalidTimestamp {
        column: Column,
        value: String,
        pattern: String,
    },
}

impl RowIssueKind {
    /// Column the issue points at.
    pub fn column(&self) -> Column {
        match self {
            RowIssueKind::TagRequired => Column::Tag,
            RowIssueKind::InvalidStatus { .. } => Column::Status,
            RowIssueKind::InvalidReasonForStatus { .. } => Column::Reason,
            RowIssueKind::InvalidTimestamp { column, .. } => *column,
        }
    }

    /// Message shown to the user, without the line prefix.
    pub fn message(&self) -> String {
        match self {
            RowIssueKind::TagRequired => "TAG é obrigatória".to_string(),
            RowIssueKind::InvalidStatus { .. } => {
                let codes: Vec<&str> = Status::ALL.iter().map(Status::code).collect();
                format!(
                    "STATUS deve ser {} ou {}",
                    codes[..codes.len() - 1].join(", "),
                    codes[codes.len() - 1]
                )
            }
            RowIssueKind::InvalidReasonForStatus { status, .. } => {
                let separator = match status {
                    Status::Standby => " ou ",
                    _ => ", ",
                };
                format!(
                    "MOTIVO para {} deve ser: {}",
                    status.code(),
                    status.allowed_reasons().join(separator)
                )
            }
            RowIssueKind::InvalidTimestamp {
                column, pattern, ..
            } => {
                format!("{column} deve estar no formato {pattern}")
            }
        }
    }
}

/// A row issue tagged with its line in the uploaded file.
///
/// The header is line 1, so the first data row is line 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowIssue {
    pub line: usize,
    pub kind: RowIssueKind,
}

impl RowIssue {
    pub fn new(line: usize, kind: RowIssueKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Linha {}: {}", self.line, self.kind.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_lists_codes() {
        let issue = RowIssue::new(
            3,
            RowIssueKind::InvalidStatus {
                value: "RUN".to_string(),
            },
        );
        assert_eq!(issue.to_string(), "Linha 3: STATUS deve ser OPE, ST-BY ou MNT");
    }

    #[test]
    fn test_reason_messages_per_status() {
        let standby = RowIssueKind::InvalidReasonForStatus {
            status: Status::Standby,
            reason: "x".to_string(),
        };
        assert_eq!(
            standby.message(),
            "MOTIVO para ST-BY deve ser: Conveniência operacional ou Conveniência do sistema"
        );
        let maintenance = RowIssueKind::InvalidReasonForStatus {
            status: Status::Maintenance,
            reason: "x".to_string(),
        };
        assert_eq!(
            maintenance.message(),
            "MOTIVO para MNT deve ser: Manutenção preventiva, Manutenção corretiva, Manutenção preditiva"
        );
    }

    #[test]
    fn test_issue_serializes() {
        let issue = RowIssue::new(2, RowIssueKind::TagRequired);
        let json = serde_json::to_string(&issue).unwrap();
        let round: RowIssue = serde_json::from_str(&json).unwrap();
        assert_eq!(round, issue);
    }
}

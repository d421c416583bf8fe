//! Error types for dataset checks.

use eqs_ingest::IngestError;
use thiserror::Error;

use crate::issue::RowIssue;

/// Result type for dataset checks.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Why an uploaded dataset was refused.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The text could not be turned into rows.
    #[error(transparent)]
    Parse(#[from] IngestError),

    /// One or more rows broke a field rule. Never empty.
    #[error("Erros de validação encontrados:\n{}", join_issues(.0))]
    RowValidationFailure(Vec<RowIssue>),
}

impl DatasetError {
    /// Row issues, if the failure came from field rules.
    pub fn issues(&self) -> &[RowIssue] {
        match self {
            DatasetError::RowValidationFailure(issues) => issues,
            DatasetError::Parse(_) => &[],
        }
    }
}

fn join_issues(issues: &[RowIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

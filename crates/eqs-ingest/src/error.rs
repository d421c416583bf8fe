//! Error types for dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an uploaded dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Dataset Shape Errors ===
    /// Fewer than two non-blank lines: no header, or a header with no rows.
    #[error("O arquivo CSV deve conter pelo menos um cabeçalho e uma linha de dados.")]
    EmptyDataset,

    /// The header row differs from the expected schema.
    #[error(
        "Cabeçalhos incorretos. Esperado: {}. Encontrado: {}",
        expected.join(","),
        found.join(",")
    )]
    HeaderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    // === File System Errors ===
    /// Upload does not carry a `.csv` extension.
    #[error("not a .csv file: {path}")]
    NotCsvFile { path: PathBuf },

    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the upload size limit.
    #[error("file too large: {path} ({size} bytes, limit {max_size})")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File starts with a byte order mark for an encoding we do not read.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File is not valid UTF-8 text.
    #[error("file is not valid UTF-8: {path}")]
    InvalidUtf8 { path: PathBuf },

    // === CSV Errors ===
    /// Quote-aware reader rejected the input.
    #[error("failed to parse CSV: {message}")]
    CsvParse { message: String },

    /// Writer failed to produce CSV text.
    #[error("failed to write CSV: {message}")]
    CsvWrite { message: String },
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::CsvParse {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
    }

    #[test]
    fn test_header_mismatch_lists_both_headers() {
        let err = IngestError::HeaderMismatch {
            expected: vec!["TAG".to_string(), "STATUS".to_string()],
            found: vec!["TAG".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Cabeçalhos incorretos. Esperado: TAG,STATUS. Encontrado: TAG"
        );
    }
}

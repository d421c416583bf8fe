//! Equipment dataset ingestion.
//!
//! Turns an uploaded spreadsheet export into ordered [`EquipmentRecord`]s.
//!
//! # Features
//!
//! - **Header check**: the first non-blank line must be exactly
//!   `TAG,STATUS,MOTIVO,PTS,OS,RETORNO,CADEADO,OBSERVACOES,MODIFICADO_POR,DATA`
//! - **Plain or quoted splitting**: plain comma splitting by default,
//!   quote-aware splitting on request
//! - **File guards**: extension, size and encoding checks before parsing
//! - **Export**: write records back as CSV
//!
//! Field rules (status codes, reasons, timestamps) live in `eqs-validate`.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use eqs_ingest::{ParseOptions, read_dataset_file};
//!
//! let records = read_dataset_file(Path::new("equipamentos.csv"), &ParseOptions::default())?;
//! ```
//!
//! [`EquipmentRecord`]: eqs_model::EquipmentRecord

mod dataset;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading / Writing ===
pub use dataset::{
    DELIMITER, MAX_CSV_FILE_SIZE, ParseOptions, check_file_size, check_file_size_with_limit,
    check_header, has_csv_extension, parse_dataset, parse_dataset_with_options, read_dataset_file,
    read_dataset_text, split_line, write_dataset, write_dataset_quoted,
};

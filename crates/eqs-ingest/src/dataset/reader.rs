//! Dataset parsing from CSV text and files.

use std::path::Path;

use eqs_model::{EXPECTED_HEADER, EquipmentRecord};

use crate::error::{IngestError, Result};

use super::header::{check_header, normalize_cell, split_line};

/// Maximum file size accepted for an upload (10 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// How data lines are split into cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Honour double-quoted fields (`"a, b"`) instead of splitting on every comma.
    ///
    /// A quoted cell may span several physical lines. Its record still
    /// counts as one line, so row numbers count records in this mode.
    pub quoted_fields: bool,
}

impl ParseOptions {
    /// Plain comma splitting, the format the spreadsheet export produces.
    pub fn naive() -> Self {
        Self {
            quoted_fields: false,
        }
    }

    /// Quote-aware splitting.
    pub fn quoted() -> Self {
        Self {
            quoted_fields: true,
        }
    }
}

/// Parses dataset text with plain comma splitting.
pub fn parse_dataset(text: &str) -> Result<Vec<EquipmentRecord>> {
    parse_dataset_with_options(text, &ParseOptions::default())
}

/// Parses dataset text into records in source order.
///
/// Blank lines are dropped. The first remaining line must be the expected
/// header; at least one data line must follow it. Data lines shorter than
/// the header are padded with empty cells; cells past the tenth are ignored.
/// No field rules are applied here.
pub fn parse_dataset_with_options(
    text: &str,
    options: &ParseOptions,
) -> Result<Vec<EquipmentRecord>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let rows = if options.quoted_fields {
        quoted_rows(text)?
    } else {
        naive_rows(text)
    };

    if rows.len() < 2 {
        return Err(IngestError::EmptyDataset);
    }

    check_header(&rows[0])?;

    let records: Vec<EquipmentRecord> = rows[1..].iter().map(|cells| build_record(cells)).collect();
    tracing::debug!(
        rows = records.len(),
        quoted = options.quoted_fields,
        "parsed dataset"
    );
    Ok(records)
}

fn naive_rows(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(split_line)
        .collect()
}

fn quoted_rows(text: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

fn build_record(cells: &[String]) -> EquipmentRecord {
    let mut record = EquipmentRecord::default();
    for (idx, column) in EXPECTED_HEADER.into_iter().enumerate() {
        if let Some(value) = cells.get(idx) {
            record.set(column, value.as_str());
        }
    }
    record
}

/// Check file size against the upload limit.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| file_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Returns true if the path ends in `.csv` (any case).
pub fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Reads a dataset file as text without parsing it.
///
/// Rejects non-`.csv` names, oversized files, UTF-16 byte order marks and
/// non-UTF-8 content.
pub fn read_dataset_text(path: &Path) -> Result<String> {
    if !has_csv_extension(path) {
        return Err(IngestError::NotCsvFile {
            path: path.to_path_buf(),
        });
    }
    check_file_size(path)?;

    let bytes = std::fs::read(path).map_err(|e| file_error(path, e))?;
    if let Some(encoding) = utf16_bom(&bytes) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding,
        });
    }
    let text = String::from_utf8(bytes).map_err(|_| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "read dataset file");
    Ok(text)
}

/// Reads and parses a dataset file.
///
/// The file passes the same guards as [`read_dataset_text`] before any
/// parsing happens.
pub fn read_dataset_file(path: &Path, options: &ParseOptions) -> Result<Vec<EquipmentRecord>> {
    let text = read_dataset_text(path)?;
    parse_dataset_with_options(&text, options)
}

fn utf16_bom(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xFE, ..] => Some("UTF-16 LE"),
        [0xFE, 0xFF, ..] => Some("UTF-16 BE"),
        _ => None,
    }
}

fn file_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "TAG,STATUS,MOTIVO,PTS,OS,RETORNO,CADEADO,OBSERVACOES,MODIFICADO_POR,DATA";

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_parse_pads_short_rows() {
        let text = format!("{HEADER}\nBB-101,OPE\n");
        let records = parse_dataset(&text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tag, "BB-101");
        assert_eq!(records[0].status, "OPE");
        assert_eq!(records[0].modified_at, "");
    }

    #[test]
    fn test_parse_ignores_extra_cells() {
        let text = format!("{HEADER}\nA,OPE,,,,,,,,2024-01-15T10:30:45,spill\n");
        let records = parse_dataset(&text).unwrap();
        assert_eq!(records[0].modified_at, "2024-01-15T10:30:45");
    }

    #[test]
    fn test_parse_crlf_and_blank_lines() {
        let text = format!("{HEADER}\r\n\r\n   \r\nA,OPE\r\nB,MNT\r\n");
        let records = parse_dataset(&text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].status, "MNT");
    }

    #[test]
    fn test_parse_strips_bom() {
        let text = format!("\u{feff}{HEADER}\nA,OPE\n");
        assert!(parse_dataset(&text).is_ok());
    }

    #[test]
    fn test_header_only_is_empty() {
        let result = parse_dataset(&format!("{HEADER}\n\n"));
        assert!(matches!(result, Err(IngestError::EmptyDataset)));
        assert!(matches!(parse_dataset(""), Err(IngestError::EmptyDataset)));
    }

    #[test]
    fn test_naive_split_shifts_columns() {
        let text = format!("{HEADER}\nA,OPE,,,,,,nota, com virgula,admin,2024-01-15T10:30:45\n");
        let records = parse_dataset(&text).unwrap();
        assert_eq!(records[0].note, "nota");
        assert_eq!(records[0].modified_by, "com virgula");
        assert_eq!(records[0].modified_at, "admin");
    }

    #[test]
    fn test_quoted_mode_keeps_commas() {
        let text = format!(
            "{HEADER}\nA,OPE,,,,,,\"nota, com virgula\",admin,2024-01-15T10:30:45\n"
        );
        let records = parse_dataset_with_options(&text, &ParseOptions::quoted()).unwrap();
        assert_eq!(records[0].note, "nota, com virgula");
        assert_eq!(records[0].modified_by, "admin");
        assert_eq!(records[0].modified_at, "2024-01-15T10:30:45");
    }

    #[test]
    fn test_read_file_rejects_extension() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(HEADER.as_bytes()).unwrap();
        let result = read_dataset_file(file.path(), &ParseOptions::default());
        assert!(matches!(result, Err(IngestError::NotCsvFile { .. })));
    }

    #[test]
    fn test_read_file_rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'T', 0]);
        let result = read_dataset_file(file.path(), &ParseOptions::default());
        assert!(matches!(result, Err(IngestError::UnsupportedEncoding { .. })));
    }

    #[test]
    fn test_read_file_rejects_invalid_utf8() {
        let file = create_temp_csv(&[b'T', 0xC3, 0x28]);
        let result = read_dataset_file(file.path(), &ParseOptions::default());
        assert!(matches!(result, Err(IngestError::InvalidUtf8 { .. })));
    }

    #[test]
    fn test_read_text_applies_file_guards() {
        let file = create_temp_csv(&[0xFE, 0xFF, 0, b'T']);
        assert!(matches!(
            read_dataset_text(file.path()),
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 BE",
                ..
            })
        ));

        let file = create_temp_csv(&[b'A', 0xFF, b'B']);
        assert!(matches!(
            read_dataset_text(file.path()),
            Err(IngestError::InvalidUtf8 { .. })
        ));

        let file = create_temp_csv(format!("{HEADER}\nA,OPE\n").as_bytes());
        let text = read_dataset_text(file.path()).unwrap();
        assert!(text.starts_with("TAG,STATUS"));
    }

    #[test]
    fn test_quoted_multiline_cell_is_one_record() {
        let text = format!(
            "{HEADER}\nA,OPE,,,,,,\"linha um\nlinha dois\",admin,2024-01-15T10:30:45\nB,MNT\n"
        );
        let records = parse_dataset_with_options(&text, &ParseOptions::quoted()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].note, "linha um\nlinha dois");
        assert_eq!(records[1].tag, "B");
    }

    #[test]
    fn test_file_size_limit() {
        let file = create_temp_csv(HEADER.as_bytes());
        let result = check_file_size_with_limit(file.path(), 4);
        assert!(matches!(result, Err(IngestError::FileTooLarge { .. })));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(has_csv_extension(Path::new("dados.CSV")));
        assert!(!has_csv_extension(Path::new("dados.csv.bak")));
        assert!(!has_csv_extension(Path::new("dados")));
    }
}

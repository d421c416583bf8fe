//! Header row checks and line splitting.

use eqs_model::{EXPECTED_HEADER, expected_header_names};

use crate::error::{IngestError, Result};

/// Field delimiter of uploaded datasets.
pub const DELIMITER: char = ',';

/// Normalizes a cell by trimming surrounding whitespace.
pub fn normalize_cell(value: &str) -> String {
    value.trim().to_string()
}

/// Splits a line on every comma, with no quoting support.
///
/// A comma inside free text shifts every later column. Callers that need
/// quoted fields use [`ParseOptions::quoted`](super::ParseOptions::quoted).
pub fn split_line(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(normalize_cell).collect()
}

/// Verifies that `found` equals the expected header element for element.
///
/// Length, order and spelling must all match; nothing is normalized beyond
/// the trimming already applied by the splitter.
pub fn check_header(found: &[String]) -> Result<()> {
    let matches = found.len() == EXPECTED_HEADER.len()
        && found
            .iter()
            .zip(EXPECTED_HEADER.iter())
            .all(|(cell, column)| cell == column.name());
    if matches {
        Ok(())
    } else {
        Err(IngestError::HeaderMismatch {
            expected: expected_header_names(),
            found: found.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_line_trims_cells() {
        assert_eq!(split_line("  a , b,c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_line_ignores_quotes() {
        assert_eq!(split_line("\"a, b\",c"), vec!["\"a", "b\"", "c"]);
    }

    #[test]
    fn test_split_line_keeps_empty_cells() {
        assert_eq!(split_line("a,,"), vec!["a", "", ""]);
    }

    #[test]
    fn test_check_header_exact() {
        let header = split_line(
            "TAG,STATUS,MOTIVO,PTS,OS,RETORNO,CADEADO,OBSERVACOES,MODIFICADO_POR,DATA",
        );
        assert!(check_header(&header).is_ok());
    }

    #[test]
    fn test_check_header_rejects_order_and_case() {
        let swapped = split_line(
            "STATUS,TAG,MOTIVO,PTS,OS,RETORNO,CADEADO,OBSERVACOES,MODIFICADO_POR,DATA",
        );
        assert!(check_header(&swapped).is_err());

        let lower = split_line(
            "tag,STATUS,MOTIVO,PTS,OS,RETORNO,CADEADO,OBSERVACOES,MODIFICADO_POR,DATA",
        );
        assert!(check_header(&lower).is_err());
    }

    #[test]
    fn test_check_header_rejects_extra_column() {
        let extra = split_line(
            "TAG,STATUS,MOTIVO,PTS,OS,RETORNO,CADEADO,OBSERVACOES,MODIFICADO_POR,DATA,NOME",
        );
        match check_header(&extra) {
            Err(IngestError::HeaderMismatch { expected, found }) => {
                assert_eq!(expected.len(), 10);
                assert_eq!(found.len(), 11);
            }
            other => panic!("expected header mismatch, got {other:?}"),
        }
    }
}

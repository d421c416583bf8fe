//! Bulk dataset validation.

use std::path::Path;

use eqs_ingest::{ParseOptions, parse_dataset_with_options, read_dataset_file};
use eqs_model::EquipmentRecord;

use crate::checks;
use crate::error::{DatasetError, Result};
use crate::issue::RowIssue;

/// Line number of the first data row; the header is line 1.
const FIRST_DATA_LINE: usize = 2;

/// Checks every row and collects all issues, in row order.
///
/// Line numbers count data rows after the header, so blank lines dropped
/// during parsing do not shift them. With quoted fields a record spanning
/// several physical lines still takes one number.
pub fn validate_rows(records: &[EquipmentRecord]) -> Vec<RowIssue> {
    let issues: Vec<RowIssue> = records
        .iter()
        .enumerate()
        .flat_map(|(idx, record)| {
            checks::run_all(record)
                .into_iter()
                .map(move |kind| RowIssue::new(idx + FIRST_DATA_LINE, kind))
        })
        .collect();

    tracing::debug!(rows = records.len(), issues = issues.len(), "validated dataset rows");
    issues
}

/// Parses and validates dataset text; the whole dataset passes or fails.
pub fn check_dataset(text: &str, options: &ParseOptions) -> Result<Vec<EquipmentRecord>> {
    let records = parse_dataset_with_options(text, options)?;
    accept(records)
}

/// Reads, parses and validates a dataset file.
pub fn check_dataset_file(path: &Path, options: &ParseOptions) -> Result<Vec<EquipmentRecord>> {
    let records = read_dataset_file(path, options)?;
    accept(records)
}

fn accept(records: Vec<EquipmentRecord>) -> Result<Vec<EquipmentRecord>> {
    let issues = validate_rows(&records);
    if issues.is_empty() {
        Ok(records)
    } else {
        tracing::warn!(issues = issues.len(), "dataset rejected");
        Err(DatasetError::RowValidationFailure(issues))
    }
}

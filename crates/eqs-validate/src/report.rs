//! Dataset check summary.

use eqs_model::{EquipmentRecord, Status, StatusCounts};
use serde::Serialize;

use crate::issue::RowIssue;
use crate::rows::validate_rows;

/// Outcome of checking a dataset without rejecting it.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub row_count: usize,
    pub counts: StatusCounts,
    pub issues: Vec<RowIssue>,
}

impl DatasetReport {
    pub fn from_records(records: &[EquipmentRecord]) -> Self {
        Self {
            row_count: records.len(),
            counts: StatusCounts::from_records(records),
            issues: validate_rows(records),
        }
    }

    /// True when the dataset would be accepted for full replacement.
    pub fn is_acceptable(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn count(&self, status: Status) -> usize {
        self.counts.get(status)
    }

    /// Number of distinct lines with at least one issue.
    pub fn rows_with_issues(&self) -> usize {
        let mut lines: Vec<usize> = self.issues.iter().map(|issue| issue.line).collect();
        lines.dedup();
        lines.len()
    }
}

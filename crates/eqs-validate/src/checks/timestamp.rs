//! DATA and RETORNO format checks.

use eqs_model::timestamp::{
    MODIFIED_AT_PATTERN, RETURN_TIME_PATTERN, is_minute_precision, is_second_precision,
};
use eqs_model::{Column, EquipmentRecord};

use crate::issue::RowIssueKind;

/// Columns holding timestamps, with their shape test and display pattern.
const TIMESTAMP_COLUMNS: &[(Column, fn(&str) -> bool, &str)] = &[
    (Column::ModifiedAt, is_second_precision, MODIFIED_AT_PATTERN),
    (Column::ReturnTime, is_minute_precision, RETURN_TIME_PATTERN),
];

pub fn check(record: &EquipmentRecord) -> Vec<RowIssueKind> {
    let mut issues = Vec::new();
    for (column, matches, pattern) in TIMESTAMP_COLUMNS {
        let value = record.get(*column);
        if value.trim().is_empty() || matches(value) {
            continue;
        }
        issues.push(RowIssueKind::InvalidTimestamp {
            column: *column,
            value: value.to_string(),
            pattern: (*pattern).to_string(),
        });
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_both_columns() {
        let record = EquipmentRecord::new("A", "OPE")
            .with(Column::ModifiedAt, "2024-01-15T10:30")
            .with(Column::ReturnTime, "2024-01-15T10:30:00");
        let issues = check(&record);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].column(), Column::ModifiedAt);
        assert_eq!(issues[1].column(), Column::ReturnTime);
    }

    #[test]
    fn blank_values_pass() {
        let record = EquipmentRecord::new("A", "OPE");
        assert!(check(&record).is_empty());
    }
}

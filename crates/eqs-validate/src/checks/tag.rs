//! TAG presence check.

use eqs_model::EquipmentRecord;

use crate::issue::RowIssueKind;

pub fn check(record: &EquipmentRecord) -> Option<RowIssueKind> {
    record
        .tag
        .trim()
        .is_empty()
        .then_some(RowIssueKind::TagRequired)
}

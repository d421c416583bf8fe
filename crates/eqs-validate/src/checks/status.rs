//! STATUS code check.

use eqs_model::EquipmentRecord;

use crate::issue::RowIssueKind;

pub fn check(record: &EquipmentRecord) -> Option<RowIssueKind> {
    if record.status().is_some() {
        return None;
    }
    Some(RowIssueKind::InvalidStatus {
        value: record.status.clone(),
    })
}

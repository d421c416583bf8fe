//! MOTIVO whitelist check.
//!
//! Unlike the single-update path, a blank MOTIVO is accepted here even for
//! ST-BY and MNT rows. Only a filled value is compared with the whitelist.

use eqs_model::EquipmentRecord;

use crate::issue::RowIssueKind;

pub fn check(record: &EquipmentRecord) -> Option<RowIssueKind> {
    let status = record.status()?;
    if !status.requires_reason() || record.reason.is_empty() {
        return None;
    }
    if status.allows_reason(&record.reason) {
        return None;
    }
    Some(RowIssueKind::InvalidReasonForStatus {
        status,
        reason: record.reason.clone(),
    })
}

//! Row-level check modules.
//!
//! Each module inspects one concern of a dataset row. Checks never stop
//! early: every problem in a row is reported.

mod reason;
mod status;
mod tag;
mod timestamp;

use eqs_model::EquipmentRecord;

use crate::issue::RowIssueKind;

/// Run all row checks on one record, in column order.
pub fn run_all(record: &EquipmentRecord) -> Vec<RowIssueKind> {
    let mut issues = Vec::new();

    // 1. TAG must be filled
    issues.extend(tag::check(record));

    // 2. STATUS must be a known code
    issues.extend(status::check(record));

    // 3. MOTIVO, when given, must match the status whitelist
    issues.extend(reason::check(record));

    // 4. DATA and RETORNO shapes
    issues.extend(timestamp::check(record));

    issues
}

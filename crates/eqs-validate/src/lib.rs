//! Equipment status validation.
//!
//! Two separate rule sets live here:
//!
//! - [`validate_update`]: the interactive single-unit form. Fail-fast, one
//!   message at a time.
//! - [`validate_rows`] / [`check_dataset`]: bulk upload. Every row is
//!   checked and every issue is reported with its line number.
//!
//! The bulk path is deliberately looser than the form: it does not require
//! MOTIVO for stopped units and does not limit note length.

mod checks;
mod error;
mod issue;
mod report;
mod rows;
mod update;

pub use error::{DatasetError, Result};
pub use issue::{RowIssue, RowIssueKind};
pub use report::DatasetReport;
pub use rows::{check_dataset, check_dataset_file, validate_rows};
pub use update::{UpdateError, validate_update};

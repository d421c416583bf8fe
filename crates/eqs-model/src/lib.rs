//! Data model for equipment status tracking.
//!
//! - [`Status`]: the three operational states and their wire codes
//! - Reason whitelists keyed by status
//! - [`Column`] and [`EXPECTED_HEADER`]: the dataset schema
//! - [`EquipmentRecord`]: one dataset row
//! - [`timestamp`]: the two timestamp text contracts
//! - [`dataset`]: search, filters and counts over a fetched dataset

pub mod column;
pub mod dataset;
pub mod error;
pub mod record;
pub mod status;
pub mod timestamp;

pub use column::{Column, EXPECTED_HEADER, expected_header_names};
pub use dataset::{DatasetFilter, RECENT_LIMIT, StatusCounts, filter_records, find_by_tag, recent};
pub use error::{ModelError, Result};
pub use record::{EquipmentRecord, MAX_NOTE_LENGTH};
pub use status::{MAINTENANCE_REASONS, STANDBY_REASONS, Status};

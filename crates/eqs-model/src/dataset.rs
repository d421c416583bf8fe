//! Read-only views over a fetched dataset: search, status filter and counts.

use serde::{Deserialize, Serialize};

use crate::record::EquipmentRecord;
use crate::status::Status;

/// Number of rows shown in the recent-changes listing.
pub const RECENT_LIMIT: usize = 10;

/// Search and status filter for listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetFilter {
    /// Case-insensitive substring matched against TAG and NOME.
    pub search: Option<String>,
    /// Exact status to keep.
    pub status: Option<Status>,
}

impl DatasetFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.trim().is_empty() {
            None
        } else {
            Some(search)
        };
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns true if `record` passes both the search and the status filter.
    pub fn matches(&self, record: &EquipmentRecord) -> bool {
        let search_ok = match &self.search {
            None => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                record.tag.to_lowercase().contains(&needle)
                    || record
                        .name
                        .as_deref()
                        .is_some_and(|name| name.to_lowercase().contains(&needle))
            }
        };
        let status_ok = match self.status {
            None => true,
            Some(status) => record.status == status.code(),
        };
        search_ok && status_ok
    }
}

/// Records passing `filter`, in dataset order.
pub fn filter_records<'a>(
    records: &'a [EquipmentRecord],
    filter: &DatasetFilter,
) -> Vec<&'a EquipmentRecord> {
    records.iter().filter(|record| filter.matches(record)).collect()
}

/// Finds the record whose TAG equals `tag` exactly.
pub fn find_by_tag<'a>(records: &'a [EquipmentRecord], tag: &str) -> Option<&'a EquipmentRecord> {
    if tag.is_empty() {
        return None;
    }
    records.iter().find(|record| record.tag == tag)
}

/// First `limit` records, as the store returns them newest first.
pub fn recent(records: &[EquipmentRecord], limit: usize) -> &[EquipmentRecord] {
    &records[..records.len().min(limit)]
}

/// Per-status totals for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub operating: usize,
    pub standby: usize,
    pub maintenance: usize,
}

impl StatusCounts {
    /// Counts records by status code. Rows with an unknown code only add to `total`.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a EquipmentRecord>,
    {
        let mut counts = Self::default();
        for record in records {
            counts.total += 1;
            match record.status() {
                Some(Status::Operating) => counts.operating += 1,
                Some(Status::Standby) => counts.standby += 1,
                Some(Status::Maintenance) => counts.maintenance += 1,
                None => {}
            }
        }
        counts
    }

    /// Count for one status.
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Operating => self.operating,
            Status::Standby => self.standby,
            Status::Maintenance => self.maintenance,
        }
    }
}

//! Validate-then-send orchestration.
//!
//! Every write is validated locally first. When validation fails nothing
//! reaches the transport, and when the transport fails the caller may
//! simply retry: no state is kept between calls.

use chrono::NaiveDateTime;
use eqs_ingest::ParseOptions;
use eqs_model::{EquipmentRecord, find_by_tag, timestamp};
use eqs_validate::{check_dataset, validate_update};

use crate::access::{AccessRole, Action};
use crate::command::StoreCommand;
use crate::error::{Result, StoreError};
use crate::transport::{StoreTransport, ensure_success};

/// Editor name written when neither the form nor the stored row has one.
pub const DEFAULT_EDITOR: &str = "admin";

/// Store operations on behalf of one signed-in role.
pub struct StatusService<T> {
    transport: T,
    role: AccessRole,
}

impl<T: StoreTransport> StatusService<T> {
    pub fn new(transport: T, role: AccessRole) -> Self {
        Self { transport, role }
    }

    pub fn role(&self) -> AccessRole {
        self.role
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn authorize(&self, action: Action) -> Result<()> {
        if self.role.permits(action) {
            Ok(())
        } else {
            tracing::warn!(role = %self.role, %action, "action refused");
            Err(StoreError::Forbidden {
                role: self.role,
                action,
            })
        }
    }

    /// Fetches the current dataset.
    pub fn load(&self) -> Result<Vec<EquipmentRecord>> {
        self.authorize(Action::ListRecords)?;
        let records = self.transport.fetch_all()?;
        tracing::info!(rows = records.len(), "dataset loaded");
        Ok(records)
    }

    /// Validates and sends one status update.
    ///
    /// `known_records` is the dataset the tag was picked from. `now` becomes
    /// the DATA stamp. Returns the row as sent.
    pub fn submit_update(
        &self,
        record: EquipmentRecord,
        known_records: &[EquipmentRecord],
        now: NaiveDateTime,
    ) -> Result<EquipmentRecord> {
        let _span = tracing::info_span!("update", tag = %record.tag).entered();
        self.authorize(Action::UpdateStatus)?;

        let prior = find_by_tag(known_records, &record.tag);
        if let Err(err) = validate_update(&record, prior.is_some()) {
            tracing::warn!(error = %err, "update refused");
            return Err(err.into());
        }

        let mut row = record;
        if row.modified_by.trim().is_empty() {
            row.modified_by = prior
                .map(|p| p.modified_by.trim())
                .filter(|editor| !editor.is_empty())
                .unwrap_or(DEFAULT_EDITOR)
                .to_string();
        }
        row.modified_at = timestamp::stamp(now);
        tracing::trace!(?row, "update row");

        let command = StoreCommand::UpdateRow(row.clone());
        ensure_success(self.transport.send(&command)?)?;

        tracing::info!(status = %row.status, "status updated");
        Ok(row)
    }

    /// Checks uploaded CSV text and replaces the whole dataset with it.
    ///
    /// Returns the number of rows written.
    pub fn replace_dataset(&self, text: &str, options: &ParseOptions) -> Result<usize> {
        let _span = tracing::info_span!("replace", quoted = options.quoted_fields).entered();
        self.authorize(Action::ReplaceDataset)?;

        let records = match check_dataset(text, options) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(issues = err.issues().len(), "dataset refused");
                return Err(err.into());
            }
        };

        let command = StoreCommand::FullReplace { data: records };
        ensure_success(self.transport.send(&command)?)?;

        let rows = command.row_count();
        tracing::info!(rows, "dataset replaced");
        Ok(rows)
    }
}

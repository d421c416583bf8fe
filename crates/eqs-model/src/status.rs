//! Type-safe operational status and its reason whitelists.
//!
//! The remote store keeps statuses as short wire codes (`OPE`, `ST-BY`,
//! `MNT`). These codes are a stable contract with the stored data and must
//! not be renamed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::column::Column;
use crate::error::ModelError;

/// Reasons accepted for a unit placed in standby.
pub const STANDBY_REASONS: &[&str] = &["Conveniência operacional", "Conveniência do sistema"];

/// Reasons accepted for a unit placed in maintenance.
pub const MAINTENANCE_REASONS: &[&str] = &[
    "Manutenção preventiva",
    "Manutenção corretiva",
    "Manutenção preditiva",
];

const OPERATING_REQUIRED: &[Column] = &[Column::Tag, Column::Status];
const STOPPED_REQUIRED: &[Column] = &[Column::Tag, Column::Status, Column::Reason];

/// Operational state of one piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Status {
    /// Running normally (`OPE`).
    #[serde(rename = "OPE")]
    Operating,

    /// Available but intentionally idle (`ST-BY`).
    #[serde(rename = "ST-BY")]
    Standby,

    /// Out of service for maintenance work (`MNT`).
    #[serde(rename = "MNT")]
    Maintenance,
}

impl Status {
    /// Every status, in display order.
    pub const ALL: [Status; 3] = [Status::Operating, Status::Standby, Status::Maintenance];

    /// Returns the wire code stored in the spreadsheet.
    pub const fn code(&self) -> &'static str {
        match self {
            Status::Operating => "OPE",
            Status::Standby => "ST-BY",
            Status::Maintenance => "MNT",
        }
    }

    /// Returns the label shown to operators.
    pub const fn label(&self) -> &'static str {
        match self {
            Status::Operating => "Em Operação",
            Status::Standby => "Stand-by",
            Status::Maintenance => "Em Manutenção",
        }
    }

    /// Returns the badge glyph used in listings.
    pub const fn icon(&self) -> &'static str {
        match self {
            Status::Operating => "🟢",
            Status::Standby => "🟡",
            Status::Maintenance => "🔴",
        }
    }

    /// Looks up a status by its exact wire code.
    ///
    /// Matching is case-sensitive: `ope` is not a status.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// Returns the ordered reason whitelist for this status.
    ///
    /// Operating units carry no reason, so their list is empty.
    pub const fn allowed_reasons(&self) -> &'static [&'static str] {
        match self {
            Status::Operating => &[],
            Status::Standby => STANDBY_REASONS,
            Status::Maintenance => MAINTENANCE_REASONS,
        }
    }

    /// Exact-string membership test against [`Status::allowed_reasons`].
    pub fn allows_reason(&self, reason: &str) -> bool {
        self.allowed_reasons().contains(&reason)
    }

    /// Returns true when a reason must accompany this status.
    pub const fn requires_reason(&self) -> bool {
        matches!(self, Status::Standby | Status::Maintenance)
    }

    /// Columns a submission must fill for this status.
    pub const fn required_fields(&self) -> &'static [Column] {
        if self.requires_reason() {
            STOPPED_REQUIRED
        } else {
            OPERATING_REQUIRED
        }
    }

    /// Returns true when PTS, OS, RETORNO and CADEADO are meaningful.
    pub const fn uses_maintenance_fields(&self) -> bool {
        matches!(self, Status::Maintenance)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Status {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

//! Dataset column schema.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// One column of the equipment dataset.
///
/// Column names are Portuguese because they are the header cells of the
/// spreadsheet that backs the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    /// `TAG`: equipment identifier.
    #[serde(rename = "TAG")]
    Tag,
    /// `STATUS`: wire code of the operational state.
    #[serde(rename = "STATUS")]
    Status,
    /// `MOTIVO`: reason for a non-operating status.
    #[serde(rename = "MOTIVO")]
    Reason,
    /// `PTS`: planned task reference.
    #[serde(rename = "PTS")]
    PlannedTask,
    /// `OS`: work order reference.
    #[serde(rename = "OS")]
    WorkOrder,
    /// `RETORNO`: scheduled return, minute precision.
    #[serde(rename = "RETORNO")]
    ReturnTime,
    /// `CADEADO`: lockout reference.
    #[serde(rename = "CADEADO")]
    Lockout,
    /// `OBSERVACOES`: free-text note.
    #[serde(rename = "OBSERVACOES")]
    Note,
    /// `MODIFICADO_POR`: last editor.
    #[serde(rename = "MODIFICADO_POR")]
    ModifiedBy,
    /// `DATA`: modification stamp, second precision.
    #[serde(rename = "DATA")]
    ModifiedAt,
}

/// The exact header row an uploaded dataset must carry, in order.
pub const EXPECTED_HEADER: [Column; 10] = [
    Column::Tag,
    Column::Status,
    Column::Reason,
    Column::PlannedTask,
    Column::WorkOrder,
    Column::ReturnTime,
    Column::Lockout,
    Column::Note,
    Column::ModifiedBy,
    Column::ModifiedAt,
];

impl Column {
    /// Returns the header cell text.
    pub const fn name(&self) -> &'static str {
        match self {
            Column::Tag => "TAG",
            Column::Status => "STATUS",
            Column::Reason => "MOTIVO",
            Column::PlannedTask => "PTS",
            Column::WorkOrder => "OS",
            Column::ReturnTime => "RETORNO",
            Column::Lockout => "CADEADO",
            Column::Note => "OBSERVACOES",
            Column::ModifiedBy => "MODIFICADO_POR",
            Column::ModifiedAt => "DATA",
        }
    }

    /// Looks up a column by its exact header text.
    pub fn from_name(name: &str) -> Option<Self> {
        EXPECTED_HEADER
            .into_iter()
            .find(|column| column.name() == name)
    }
}

/// Header names in schema order.
pub fn expected_header_names() -> Vec<String> {
    EXPECTED_HEADER
        .iter()
        .map(|column| column.name().to_string())
        .collect()
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ModelError::UnknownColumn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_order_is_stable() {
        assert_eq!(
            expected_header_names().join(","),
            "TAG,STATUS,MOTIVO,PTS,OS,RETORNO,CADEADO,OBSERVACOES,MODIFICADO_POR,DATA"
        );
    }

    #[test]
    fn column_names_parse_back() {
        for column in EXPECTED_HEADER {
            assert_eq!(column.name().parse::<Column>().unwrap(), column);
        }
        assert!("tag".parse::<Column>().is_err());
    }
}

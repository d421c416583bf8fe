//! Wire types of the store endpoint.

use eqs_model::EquipmentRecord;
use serde::{Deserialize, Serialize};

/// Body of a `POST` to the store.
///
/// The `type` field selects the command. An update carries the record
/// columns at the top level next to `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreCommand {
    /// Upsert one row, keyed by TAG.
    UpdateRow(EquipmentRecord),
    /// Replace the whole dataset.
    FullReplace { data: Vec<EquipmentRecord> },
}

impl StoreCommand {
    /// Wire name of the command.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreCommand::UpdateRow(_) => "update_row",
            StoreCommand::FullReplace { .. } => "full_replace",
        }
    }

    /// Rows the command writes.
    pub fn row_count(&self) -> usize {
        match self {
            StoreCommand::UpdateRow(_) => 1,
            StoreCommand::FullReplace { data } => data.len(),
        }
    }
}

/// Answer to a `POST`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StoreResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use eqs_model::Column;
    use serde_json::json;

    use super::*;

    #[test]
    fn update_row_flattens_record() {
        let record = EquipmentRecord::new("BB-101", "MNT")
            .with(Column::Reason, "Manutenção corretiva")
            .with(Column::ModifiedAt, "2024-01-15T10:30:00");
        let value = serde_json::to_value(StoreCommand::UpdateRow(record)).unwrap();
        assert_eq!(value["type"], "update_row");
        assert_eq!(value["TAG"], "BB-101");
        assert_eq!(value["MOTIVO"], "Manutenção corretiva");
        assert_eq!(value["DATA"], "2024-01-15T10:30:00");
    }

    #[test]
    fn full_replace_nests_rows() {
        let command = StoreCommand::FullReplace {
            data: vec![EquipmentRecord::new("A", "OPE")],
        };
        let value = serde_json::to_value(&command).unwrap();
        assert_eq!(value["type"], "full_replace");
        assert_eq!(value["data"][0]["TAG"], "A");
        assert_eq!(command.row_count(), 1);
    }

    #[test]
    fn response_error_is_optional() {
        let response: StoreResponse = serde_json::from_value(json!({"success": true})).unwrap();
        assert_eq!(response, StoreResponse::ok());
    }
}

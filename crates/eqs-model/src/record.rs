//! One row of the equipment dataset.

use std::fmt;

use chrono::NaiveDateTime;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::status::Status;
use crate::timestamp;

/// Maximum length of the `OBSERVACOES` note, in characters.
///
/// Matches the column width of the remote store.
pub const MAX_NOTE_LENGTH: usize = 100;

/// One equipment row, as fetched from the store or parsed from a CSV line.
///
/// Every field is kept as text exactly as received; an empty string means
/// the value is absent. Typed views are available through [`status`],
/// [`return_time`] and [`modified_at`].
///
/// [`status`]: EquipmentRecord::status
/// [`return_time`]: EquipmentRecord::return_time
/// [`modified_at`]: EquipmentRecord::modified_at
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    #[serde(rename = "TAG", default, deserialize_with = "lenient_text")]
    pub tag: String,
    #[serde(rename = "STATUS", default, deserialize_with = "lenient_text")]
    pub status: String,
    #[serde(rename = "MOTIVO", default, deserialize_with = "lenient_text")]
    pub reason: String,
    #[serde(rename = "PTS", default, deserialize_with = "lenient_text")]
    pub planned_task_ref: String,
    #[serde(rename = "OS", default, deserialize_with = "lenient_text")]
    pub work_order_ref: String,
    #[serde(rename = "RETORNO", default, deserialize_with = "lenient_text")]
    pub return_time: String,
    #[serde(rename = "CADEADO", default, deserialize_with = "lenient_text")]
    pub lockout_ref: String,
    #[serde(rename = "OBSERVACOES", default, deserialize_with = "lenient_text")]
    pub note: String,
    #[serde(rename = "MODIFICADO_POR", default, deserialize_with = "lenient_text")]
    pub modified_by: String,
    #[serde(rename = "DATA", default, deserialize_with = "lenient_text")]
    pub modified_at: String,
    /// Display name some store rows carry. Only used by search.
    #[serde(
        rename = "NOME",
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
}

impl EquipmentRecord {
    /// Creates a record for `tag` with the given status code and no other data.
    pub fn new(tag: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            status: status.into(),
            ..Self::default()
        }
    }

    /// Returns the text stored under `column`.
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Tag => &self.tag,
            Column::Status => &self.status,
            Column::Reason => &self.reason,
            Column::PlannedTask => &self.planned_task_ref,
            Column::WorkOrder => &self.work_order_ref,
            Column::ReturnTime => &self.return_time,
            Column::Lockout => &self.lockout_ref,
            Column::Note => &self.note,
            Column::ModifiedBy => &self.modified_by,
            Column::ModifiedAt => &self.modified_at,
        }
    }

    /// Replaces the text stored under `column`.
    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        let value = value.into();
        match column {
            Column::Tag => self.tag = value,
            Column::Status => self.status = value,
            Column::Reason => self.reason = value,
            Column::PlannedTask => self.planned_task_ref = value,
            Column::WorkOrder => self.work_order_ref = value,
            Column::ReturnTime => self.return_time = value,
            Column::Lockout => self.lockout_ref = value,
            Column::Note => self.note = value,
            Column::ModifiedBy => self.modified_by = value,
            Column::ModifiedAt => self.modified_at = value,
        }
    }

    /// Builder-style [`set`](EquipmentRecord::set).
    #[must_use]
    pub fn with(mut self, column: Column, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    /// Parsed status, or `None` when the code is not one of the three known.
    pub fn status(&self) -> Option<Status> {
        Status::from_code(&self.status)
    }

    /// Note length in UTF-16 code units, the unit the sheet limits on.
    pub fn note_len(&self) -> usize {
        self.note.encode_utf16().count()
    }

    /// Scheduled return, when present and well formed.
    pub fn return_time(&self) -> Option<NaiveDateTime> {
        timestamp::parse_return_time(&self.return_time)
    }

    /// Last modification stamp, when present and well formed.
    pub fn modified_at(&self) -> Option<NaiveDateTime> {
        timestamp::parse_modified_at(&self.modified_at)
    }
}

/// Accepts strings, numbers, booleans and null as cell text.
///
/// Spreadsheet cells come back typed (a work order may be a number), so the
/// record keeps whatever was there as text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(CellVisitor)
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = deserializer.deserialize_any(CellVisitor)?;
    Ok(if text.is_empty() { None } else { Some(text) })
}

struct CellVisitor;

impl<'de> Visitor<'de> for CellVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

//! Dataset export to CSV text.

use eqs_model::{EXPECTED_HEADER, EquipmentRecord, expected_header_names};

use crate::error::{IngestError, Result};

use super::header::DELIMITER;

/// Writes records as plain comma-joined lines under the expected header.
///
/// No quoting is applied, so this is the inverse of the plain parser only for
/// values without commas or line breaks.
pub fn write_dataset(records: &[EquipmentRecord]) -> String {
    let delimiter = DELIMITER.to_string();
    let mut out = expected_header_names().join(&delimiter);
    out.push('\n');
    for record in records {
        let cells: Vec<&str> = EXPECTED_HEADER
            .iter()
            .map(|column| record.get(*column))
            .collect();
        out.push_str(&cells.join(&delimiter));
        out.push('\n');
    }
    out
}

/// Writes records with RFC 4180 quoting where a value needs it.
pub fn write_dataset_quoted(records: &[EquipmentRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(EXPECTED_HEADER.iter().map(|column| column.name()))?;
    for record in records {
        writer.write_record(EXPECTED_HEADER.iter().map(|column| record.get(*column)))?;
    }
    let bytes = writer.into_inner().map_err(|e| IngestError::CsvWrite {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| IngestError::CsvWrite {
        message: e.to_string(),
    })
}

//! Field parsing utilities for position records
//!
//! Rows arrive as raw bytes and each field is decoded on its own, so a bad
//! byte in one cell never affects the others. Text fields are returned
//! verbatim. Only coordinates are converted here; the environmental readings
//! stay raw until the time-series builder.

use super::column_mapping::ColumnMapping;
use crate::{Error, Result};
use csv::ByteRecord;

/// Get a required field value, verbatim
///
/// Fails when the header lacks the column, the row is too short to reach it
/// or the cell is not valid UTF-8. An empty cell is still a value.
pub fn get_required_field<'a>(
    record: &'a ByteRecord,
    mapping: &ColumnMapping,
    field_name: &str,
    row: usize,
) -> Result<&'a str> {
    let index = mapping
        .get_index(field_name)
        .ok_or_else(|| Error::row_parse(row, format!("Required column '{}' not found", field_name)))?;

    let bytes = record.get(index).ok_or_else(|| {
        Error::row_parse(row, format!("No value for required column '{}'", field_name))
    })?;

    std::str::from_utf8(bytes).map_err(|e| {
        Error::row_parse(row, format!("Invalid UTF-8 in required column '{}': {}", field_name, e))
    })
}

/// Parse a required coordinate as a finite f64
///
/// `NaN` and infinities are rejected on purpose: JSON has no encoding for them.
pub fn parse_required_coordinate(
    record: &ByteRecord,
    mapping: &ColumnMapping,
    field_name: &str,
    row: usize,
) -> Result<f64> {
    let value_str = get_required_field(record, mapping, field_name, row)?;
    let trimmed = value_str.trim();

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(Error::row_parse(
            row,
            format!("Non-finite value for {}: '{}'", field_name, value_str),
        )),
        Err(e) => Err(Error::row_parse(
            row,
            format!("Invalid number for {}: '{}' ({})", field_name, value_str, e),
        )),
    }
}

/// Get an optional field value, verbatim
///
/// `None` when the column or the cell is absent or the cell is not valid
/// UTF-8; an empty cell is kept as `Some("")` so that sentinel handling stays
/// in one place.
pub fn get_optional_field(
    record: &ByteRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<String> {
    mapping
        .get_index(field_name)
        .and_then(|index| record.get(index))
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
        .map(str::to_string)
}

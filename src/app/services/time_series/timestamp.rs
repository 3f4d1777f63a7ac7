//! Observation time parsing and formatting
//!
//! Source timestamps carry no offset and are treated as naive local times;
//! no timezone is assumed or attached on output.

use chrono::NaiveDateTime;

use crate::constants::{ISO_TIMESTAMP_FORMAT, OBSERVATION_TIME_FORMAT};
use crate::{Error, Result};

/// Parse an `ObservationTime` value in `DD-MM-YYYY HH:MM:SS` layout
///
/// Surrounding whitespace is ignored.
pub fn parse_observation_time(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), OBSERVATION_TIME_FORMAT)
        .map_err(|e| Error::timestamp_parse(value, e))
}

/// Render an instant as naive ISO-8601 (`YYYY-MM-DDTHH:MM:SS`)
pub fn format_iso(instant: &NaiveDateTime) -> String {
    instant.format(ISO_TIMESTAMP_FORMAT).to_string()
}

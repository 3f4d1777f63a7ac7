//! Sentinel-aware numeric coercion of raw readings

use tracing::debug;

use crate::constants::NAN_SENTINEL;

/// Coerce a raw reading to a number
///
/// Absent values, empty strings and the `NaN` token all mean "not measured"
/// and yield `None`, as do unparseable and non-finite values. A genuine zero
/// is a value.
pub fn coerce_reading(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();

    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NAN_SENTINEL) {
        return None;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        Ok(_) => None,
        Err(_) => {
            debug!("Unparseable reading '{}' treated as missing", trimmed);
            None
        }
    }
}

//! Tests for the time-series builder

use crate::app::models::PositionRecord;


/// Helper to create a record carrying only the series-relevant fields
pub fn reading(
    obs_time: &str,
    pressure: Option<&str>,
    temperature: Option<&str>,
    submergence: Option<&str>,
) -> PositionRecord {
    PositionRecord::new("fix", obs_time, 0.0, 0.0).with_readings(
        pressure.map(str::to_string),
        temperature.map(str::to_string),
        submergence.map(str::to_string),
    )
}

//! Test utilities for position CSV parser testing
//!
//! Common fixtures and helpers shared by the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;


/// Header row with every known column
pub const FULL_HEADER: &str = "PositionFixTime,ObservationTime,Latitude,Longitude,BarometricPressure,SeaSurfaceTemperature,Submergence";

/// Helper to create a complete test export with three good rows
pub fn create_test_positions_csv() -> String {
    format!(
        "{}\n{}\n{}\n{}",
        FULL_HEADER,
        "15-03-2020 08:00:00,15-03-2020 10:00:00,12.5,45.0,1010.0,28.1,0",
        "15-03-2020 14:00:00,15-03-2020 16:00:00,12.6,45.2,1009.5,,1",
        "16-03-2020 08:00:00,16-03-2020 09:00:00,12.8,45.4,NaN,27.9,"
    )
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

//! Application constants for the buoy tracker
//!
//! This module contains column names, timestamp layouts, sentinel tokens and
//! default values used throughout the buoy tracker application.

// =============================================================================
// Source Columns
// =============================================================================

/// Column names as they appear in the header row of a position export
pub mod columns {
    /// Position fix timestamp (free text, date-like by convention)
    pub const POSITION_FIX_TIME: &str = "PositionFixTime";

    /// Observation timestamp in `DD-MM-YYYY HH:MM:SS` layout
    pub const OBSERVATION_TIME: &str = "ObservationTime";

    /// Latitude in decimal degrees
    pub const LATITUDE: &str = "Latitude";

    /// Longitude in decimal degrees
    pub const LONGITUDE: &str = "Longitude";

    /// Barometric pressure (optional)
    pub const BAROMETRIC_PRESSURE: &str = "BarometricPressure";

    /// Sea surface temperature (optional)
    pub const SEA_SURFACE_TEMPERATURE: &str = "SeaSurfaceTemperature";

    /// Submergence (optional)
    pub const SUBMERGENCE: &str = "Submergence";

    /// Columns a row must carry to become a position record
    pub const REQUIRED: &[&str] = &[POSITION_FIX_TIME, OBSERVATION_TIME, LATITUDE, LONGITUDE];

    /// Columns captured verbatim when present
    pub const OPTIONAL: &[&str] = &[BAROMETRIC_PRESSURE, SEA_SURFACE_TEMPERATURE, SUBMERGENCE];
}

// =============================================================================
// Timestamp Formats
// =============================================================================

/// Layout of the `ObservationTime` column (day-month-year, 24-hour clock)
pub const OBSERVATION_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Naive ISO-8601 layout used for emitted series timestamps
pub const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// =============================================================================
// Filtering
// =============================================================================

/// Character offset within `PositionFixTime` where the month token starts
pub const MONTH_TOKEN_OFFSET: usize = 6;

/// Width in characters of the month token window
pub const MONTH_TOKEN_WIDTH: usize = 3;

/// Separator between the day and time parts of `PositionFixTime`
pub const FIX_DAY_SEPARATOR: char = ' ';

// =============================================================================
// Sentinels
// =============================================================================

/// Token used by the exporter for "no measurement" (compared case-insensitively)
pub const NAN_SENTINEL: &str = "NaN";

/// UTF-8 byte order mark occasionally left at the start of exported headers
pub const UTF8_BOM: char = '\u{feff}';

// =============================================================================
// Defaults
// =============================================================================

/// Default position source, relative to the working directory
pub const DEFAULT_SOURCE_PATH: &str = "positions.csv";

/// Default HTTP bind address
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Maximum number of row errors printed by the inspect command
pub const MAX_REPORTED_ERRORS: usize = 10;

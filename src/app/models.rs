//! Core data models for position ingestion and derived views
//!
//! [`PositionRecord`] is the canonical form of one source row; it keeps the
//! optional environmental columns as raw strings so that numeric coercion can
//! happen where the sentinel rules apply. [`TimeSeriesPoint`] is the derived,
//! numeric view of one record.

use serde::{Deserialize, Serialize};

use crate::constants::MONTH_TOKEN_WIDTH;

/// Canonical position record built from one source row
///
/// Only constructed when both coordinates parsed; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    /// Verbatim `PositionFixTime`
    pub fix_time: String,

    /// Verbatim `ObservationTime`
    pub obs_time: String,

    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lon: f64,

    /// Raw `BarometricPressure`, if the column was present
    pub barometric_pressure: Option<String>,

    /// Raw `SeaSurfaceTemperature`, if the column was present
    pub sea_surface_temperature: Option<String>,

    /// Raw `Submergence`, if the column was present
    pub submergence: Option<String>,
}

impl PositionRecord {
    /// Create a record with only the required fields set
    pub fn new(
        fix_time: impl Into<String>,
        obs_time: impl Into<String>,
        lat: f64,
        lon: f64,
    ) -> Self {
        Self {
            fix_time: fix_time.into(),
            obs_time: obs_time.into(),
            lat,
            lon,
            barometric_pressure: None,
            sea_surface_temperature: None,
            submergence: None,
        }
    }

    /// Attach raw environmental readings
    pub fn with_readings(
        mut self,
        barometric_pressure: Option<String>,
        sea_surface_temperature: Option<String>,
        submergence: Option<String>,
    ) -> Self {
        self.barometric_pressure = barometric_pressure;
        self.sea_surface_temperature = sea_surface_temperature;
        self.submergence = submergence;
        self
    }

    /// Day part of the fix time (text before the first space)
    pub fn fix_day(&self) -> &str {
        self.fix_time
            .split(crate::constants::FIX_DAY_SEPARATOR)
            .next()
            .unwrap_or(&self.fix_time)
    }
}

/// One sample of the environmental time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    /// Observation instant as naive ISO-8601 (`YYYY-MM-DDTHH:MM:SS`)
    pub time: String,

    /// Barometric pressure; points without one are never emitted
    pub pressure: f64,

    /// Sea surface temperature, `null` when not measured
    pub sea_surface_temperature: Option<f64>,

    /// Submergence, `null` when not measured
    pub submergence: Option<f64>,
}

/// Selection applied to the parsed position collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PositionFilter {
    /// Return every record
    #[default]
    None,
    /// Keep records whose fix time starts with the prefix
    DatePrefix(String),
    /// Keep records whose fix time carries the token at the month offset
    MonthToken(String),
}

impl PositionFilter {
    /// Build a filter from optional `date` / `month` query values
    ///
    /// Supplying both is rejected rather than silently preferring one.
    pub fn from_query(date: Option<String>, month: Option<String>) -> crate::Result<Self> {
        match (date, month) {
            (Some(_), Some(_)) => Err(crate::Error::invalid_input(
                "specify at most one of 'date' and 'month'",
            )),
            (Some(prefix), None) => Ok(Self::DatePrefix(prefix)),
            (None, Some(token)) => Ok(Self::MonthToken(token)),
            (None, None) => Ok(Self::None),
        }
    }

    /// Reject arguments no record could sensibly match
    ///
    /// A month token must be exactly as wide as the month window.
    pub fn validate(&self) -> crate::Result<()> {
        match self {
            Self::MonthToken(token) if token.chars().count() != MONTH_TOKEN_WIDTH => {
                Err(crate::Error::invalid_input(format!(
                    "month token '{}' must be {} characters",
                    token, MONTH_TOKEN_WIDTH
                )))
            }
            _ => Ok(()),
        }
    }
}

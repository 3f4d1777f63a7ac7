//! Environmental time-series derivation
//!
//! Builds the pressure/temperature/submergence series from parsed position
//! records:
//!
//! 1. parse every observation time (`DD-MM-YYYY HH:MM:SS`), excluding records
//!    that do not match
//! 2. stable-sort by the parsed instant
//! 3. drop records without a usable pressure reading
//! 4. emit naive ISO-8601 timestamps with nullable temperature and submergence
//!
//! - [`timestamp`] - Observation time parsing and ISO formatting
//! - [`coercion`] - Sentinel-aware numeric coercion of raw readings
//! - [`builder`] - The derivation itself and its statistics

pub mod builder;
pub mod coercion;
pub mod timestamp;

#[cfg(test)]
mod tests;

pub use builder::{SeriesResult, SeriesStats, build_series};
pub use coercion::coerce_reading;
pub use timestamp::{format_iso, parse_observation_time};

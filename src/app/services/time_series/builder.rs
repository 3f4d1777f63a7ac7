//! Time-series builder
//!
//! Derivation is deterministic: the sort is stable and formatting is fixed,
//! so the same records always produce the same series.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use super::coercion::coerce_reading;
use super::timestamp::{format_iso, parse_observation_time};
use crate::app::models::{PositionRecord, TimeSeriesPoint};

/// Series statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeriesStats {
    /// Records offered to the builder
    pub records_considered: usize,

    /// Points in the emitted series
    pub points_emitted: usize,

    /// Records excluded because the observation time did not parse
    pub timestamp_failures: usize,

    /// Records dropped because pressure was not measured
    pub missing_pressure: usize,
}

/// Series with its statistics
#[derive(Debug, Clone, Default)]
pub struct SeriesResult {
    /// Points in ascending observation order
    pub points: Vec<TimeSeriesPoint>,

    pub stats: SeriesStats,
}

/// Build the environmental series from parsed records
///
/// Records with unparseable observation times are excluded and logged.
/// Equal instants keep their relative input order. Pressure is mandatory:
/// records without it are dropped, while missing temperature or submergence
/// become nulls.
pub fn build_series(records: &[PositionRecord]) -> SeriesResult {
    let mut stats = SeriesStats {
        records_considered: records.len(),
        ..SeriesStats::default()
    };

    let mut timed: Vec<(NaiveDateTime, &PositionRecord)> = Vec::with_capacity(records.len());
    for record in records {
        match parse_observation_time(&record.obs_time) {
            Ok(instant) => timed.push((instant, record)),
            Err(e) => {
                stats.timestamp_failures += 1;
                debug!("Excluded from series: {}", e);
            }
        }
    }

    // sort_by_key is stable
    timed.sort_by_key(|(instant, _)| *instant);

    let mut points = Vec::with_capacity(timed.len());
    for (instant, record) in timed {
        let Some(pressure) = coerce_reading(record.barometric_pressure.as_deref()) else {
            stats.missing_pressure += 1;
            continue;
        };

        points.push(TimeSeriesPoint {
            time: format_iso(&instant),
            pressure,
            sea_surface_temperature: coerce_reading(record.sea_surface_temperature.as_deref()),
            submergence: coerce_reading(record.submergence.as_deref()),
        });
    }

    stats.points_emitted = points.len();
    info!(
        "Built series of {} points from {} records ({} bad timestamps, {} without pressure)",
        stats.points_emitted,
        stats.records_considered,
        stats.timestamp_failures,
        stats.missing_pressure
    );

    SeriesResult { points, stats }
}

//! Query entry points over the position source
//!
//! Every call performs its own parse of the configured source on tokio's
//! blocking pool and derives its view from that parse. Nothing is cached and
//! nothing is shared between calls, so concurrent requests never observe each
//! other's state.

use serde::Serialize;
use tracing::debug;

use crate::Result;
use crate::app::models::{PositionFilter, PositionRecord, TimeSeriesPoint};
use crate::app::services::position_csv_parser::{ParseResult, ParseStats, PositionCsvParser};
use crate::app::services::query_filter::{apply_filter, distinct_fix_days};
use crate::app::services::time_series::{SeriesStats, build_series};
use crate::config::{Config, SourceLocator};

/// Summary of one pass over the source, used by the inspect command
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub source: String,
    pub parse: ParseStats,
    pub series: SeriesStats,
    pub fix_days: Vec<String>,
}

/// Service answering position and time-series queries
#[derive(Debug, Clone)]
pub struct PositionService {
    parser: PositionCsvParser,
}

impl PositionService {
    /// Create a service reading the given source
    pub fn new(source: SourceLocator) -> Self {
        Self {
            parser: PositionCsvParser::new(source),
        }
    }

    /// Create a service from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.source.clone())
    }

    /// The source this service reads
    pub fn source(&self) -> &SourceLocator {
        self.parser.source()
    }

    /// Positions matching `filter`, in source order
    pub async fn get_positions(&self, filter: PositionFilter) -> Result<Vec<PositionRecord>> {
        filter.validate()?;
        let parsed = self.load().await?;
        apply_filter(&parsed.records, &filter)
    }

    /// Environmental series ordered by observation time
    pub async fn get_time_series(&self) -> Result<Vec<TimeSeriesPoint>> {
        let parsed = self.load().await?;
        Ok(build_series(&parsed.records).points)
    }

    /// Distinct fix days, in order of first appearance
    pub async fn get_fix_days(&self) -> Result<Vec<String>> {
        let parsed = self.load().await?;
        Ok(distinct_fix_days(&parsed.records))
    }

    /// Parse once and report statistics for every derived view
    pub async fn inspect(&self) -> Result<SourceReport> {
        let parsed = self.load().await?;
        let series = build_series(&parsed.records);

        Ok(SourceReport {
            source: self.source().to_string(),
            fix_days: distinct_fix_days(&parsed.records),
            parse: parsed.stats,
            series: series.stats,
        })
    }

    async fn load(&self) -> Result<ParseResult> {
        let parser = self.parser.clone();
        let parsed = tokio::task::spawn_blocking(move || parser.parse()).await??;

        debug!(
            "Loaded {} records from {}",
            parsed.records.len(),
            self.source()
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn scenario_source() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "PositionFixTime,ObservationTime,Latitude,Longitude,BarometricPressure\n\
             15-03-2020,15-03-2020 10:00:00,12.5,45.0,1010.0\n\
             16-03-2020,16-03-2020 09:00:00,abc,45.1,1005.0\n"
        )
        .unwrap();
        file
    }

    #[tokio::test]
    async fn test_scenario_positions_and_series() {
        let file = scenario_source();
        let service = PositionService::new(SourceLocator::new(file.path()));

        let positions = service.get_positions(PositionFilter::None).await.unwrap();
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].lat, 12.5);

        let series = service.get_time_series().await.unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].time, "2020-03-15T10:00:00");
        assert_eq!(series[0].pressure, 1010.0);
    }

    #[tokio::test]
    async fn test_no_filter_matches_full_parse() {
        let file = scenario_source();
        let service = PositionService::new(SourceLocator::new(file.path()));

        let positions = service.get_positions(PositionFilter::None).await.unwrap();
        let parsed = PositionCsvParser::new(SourceLocator::new(file.path()))
            .parse()
            .unwrap();
        assert_eq!(positions, parsed.records);
    }

    #[tokio::test]
    async fn test_filtered_positions() {
        let file = scenario_source();
        let service = PositionService::new(SourceLocator::new(file.path()));

        let hits = service
            .get_positions(PositionFilter::DatePrefix("15-03".to_string()))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);

        let misses = service
            .get_positions(PositionFilter::DatePrefix("16-03".to_string()))
            .await
            .unwrap();
        assert!(misses.is_empty());
    }

    #[tokio::test]
    async fn test_missing_source_is_unavailable() {
        let service = PositionService::new(SourceLocator::new("/no/such/positions.csv"));

        let err = service.get_time_series().await.unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn test_invalid_filter_reported_before_reading_source() {
        let service = PositionService::new(SourceLocator::new("/no/such/positions.csv"));

        let err = service
            .get_positions(PositionFilter::MonthToken(String::new()))
            .await
            .unwrap_err();
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_inspect_report() {
        let file = scenario_source();
        let service = PositionService::new(SourceLocator::new(file.path()));

        let report = service.inspect().await.unwrap();
        assert_eq!(report.parse.total_records, 2);
        assert_eq!(report.parse.records_skipped, 1);
        assert_eq!(report.series.points_emitted, 1);
        assert_eq!(report.fix_days, vec!["15-03-2020".to_string()]);
    }
}

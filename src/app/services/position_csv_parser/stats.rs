//! Parsing statistics and result structures for position exports

use crate::app::models::PositionRecord;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Successfully parsed records, in source order
    pub records: Vec<PositionRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data rows encountered
    pub total_records: usize,

    /// Number of rows turned into records
    pub records_parsed: usize,

    /// Number of rows skipped due to errors
    pub records_skipped: usize,

    /// One message per skipped row, for diagnostics
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            records_parsed: 0,
            records_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Record a skipped row together with the reason
    pub fn record_skip(&mut self, message: impl Into<String>) {
        self.records_skipped += 1;
        self.errors.push(message.into());
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}

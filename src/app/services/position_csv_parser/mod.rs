//! CSV parser for buoy position exports
//!
//! This module turns a position export into [`PositionRecord`]s. Every data row
//! is parsed in isolation: a row with a missing or non-numeric coordinate is
//! skipped and reported in [`ParseStats`], and never stops the rows after it.
//!
//! ## Architecture
//!
//! - [`parser`] - Source opening, CSV reading and per-row accumulation
//! - [`column_mapping`] - Header analysis (column name to index)
//! - [`record_parser`] - Conversion of one CSV row into a record
//! - [`field_parsers`] - Required/optional field and coordinate helpers
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use buoy_tracker::app::services::position_csv_parser::PositionCsvParser;
//! use buoy_tracker::SourceLocator;
//!
//! # fn example() -> buoy_tracker::Result<()> {
//! let parser = PositionCsvParser::new(SourceLocator::new("positions.csv"));
//! let result = parser.parse()?;
//!
//! println!("Parsed {} records from {} rows",
//!          result.stats.records_parsed,
//!          result.stats.total_records);
//! # Ok(())
//! # }
//! ```
//!
//! [`PositionRecord`]: crate::app::models::PositionRecord

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use parser::PositionCsvParser;
pub use stats::{ParseResult, ParseStats};

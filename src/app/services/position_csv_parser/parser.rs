//! Core position CSV parser implementation
//!
//! Handles opening the source, reading the header and accumulating per-row
//! results. Rows are read as raw bytes so that each field is decoded on its
//! own. Row failures are collected into [`ParseStats`]; only a source
//! that cannot be read at all is an error.

use std::fs::File;
use std::io::{self, Read};
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::record_parser::parse_position_record;
use super::stats::{ParseResult, ParseStats};
use crate::config::SourceLocator;
use crate::{Error, Result};

/// Parser for buoy position CSV exports
#[derive(Debug, Clone)]
pub struct PositionCsvParser {
    source: SourceLocator,
}

impl PositionCsvParser {
    /// Create a new parser bound to a source
    pub fn new(source: SourceLocator) -> Self {
        Self { source }
    }

    /// The source this parser reads
    pub fn source(&self) -> &SourceLocator {
        &self.source
    }

    /// Open and parse the configured source
    pub fn parse(&self) -> Result<ParseResult> {
        info!("Parsing position source: {}", self.source);

        let file = File::open(self.source.path())
            .map_err(|e| Error::source_unavailable(self.source.to_string(), e))?;

        Self::parse_reader(file, &self.source.to_string())
    }

    /// Parse CSV content from any reader
    ///
    /// `label` names the source in logs and errors.
    pub fn parse_reader<R: Read>(reader: R, label: &str) -> Result<ParseResult> {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::source_unavailable(label, csv_error_to_io(e)))?;

        let mapping = ColumnMapping::analyze(headers);
        if !mapping.is_complete() && !headers.is_empty() {
            warn!(
                "Source {} is missing required columns {:?}; every row will be skipped",
                label, mapping.missing_required
            );
        }
        let (total_cols, optional_cols) = mapping.stats();
        debug!(
            "Column mapping: {} total, {} optional reading columns",
            total_cols, optional_cols
        );

        let mut raw = csv::ByteRecord::new();
        loop {
            // Read failures are fatal; decoding happens per field below
            let more = csv_reader
                .read_byte_record(&mut raw)
                .map_err(|e| Error::source_unavailable(label, csv_error_to_io(e)))?;
            if !more {
                break;
            }

            stats.total_records += 1;
            let row = stats.total_records;

            match parse_position_record(&raw, &mapping, row) {
                Ok(position) => {
                    records.push(position);
                    stats.records_parsed += 1;
                }
                Err(e) => {
                    debug!("Skipped row {}: {}", row, e);
                    stats.record_skip(e.to_string());
                }
            }
        }

        info!(
            "Parsed {} records from {} rows ({} skipped)",
            stats.records_parsed, stats.total_records, stats.records_skipped
        );

        Ok(ParseResult { records, stats })
    }
}

fn csv_error_to_io(error: csv::Error) -> io::Error {
    match error.into_kind() {
        csv::ErrorKind::Io(e) => e,
        other => io::Error::new(io::ErrorKind::InvalidData, format!("{:?}", other)),
    }
}

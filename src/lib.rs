//! Buoy Tracker Library
//!
//! A Rust library for ingesting drifting-buoy position exports in CSV format
//! and serving them as filtered position lists and environmental time series.
//!
//! This library provides tools for:
//! - Parsing position CSV files with per-row failure isolation
//! - Selecting positions by fix-date prefix or month token
//! - Deriving a time-ordered pressure/temperature/submergence series
//! - Serving the views above as JSON over HTTP, with CORS and static hosting

pub mod config;
pub mod constants;
pub mod server;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod position_csv_parser;
        pub mod position_service;
        pub mod query_filter;
        pub mod time_series;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{PositionFilter, PositionRecord, TimeSeriesPoint};
pub use app::services::position_service::PositionService;
pub use config::{Config, SourceLocator};

/// Result type alias for the buoy tracker
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ingestion, derivation and serving
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A single data row is missing a required field or carries a malformed one
    #[error("Row {row} rejected: {message}")]
    RowParse { row: usize, message: String },

    /// Observation time does not match the expected `DD-MM-YYYY HH:MM:SS` layout
    #[error("Invalid observation time '{value}'")]
    TimestampParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The tabular source cannot be opened or read at all
    #[error("Position source unavailable: {path}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A query entry point received a malformed argument
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Background task failed before producing a result
    #[error("Task failed: {message}")]
    Task { message: String },
}

impl Error {
    /// Create a row parse error
    pub fn row_parse(row: usize, message: impl Into<String>) -> Self {
        Self::RowParse {
            row,
            message: message.into(),
        }
    }

    /// Create a timestamp parse error
    pub fn timestamp_parse(value: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::TimestampParse {
            value: value.into(),
            source,
        }
    }

    /// Create a source unavailable error
    pub fn source_unavailable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Whether the caller, rather than the server, is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::Task {
            message: error.to_string(),
        }
    }
}

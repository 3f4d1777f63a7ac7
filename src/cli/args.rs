//! Command-line argument definitions for the buoy tracker
//!
//! This module defines the CLI interface using the clap derive API. Every
//! command that touches data takes an explicit `--source`, falling back to
//! the `BUOY_SOURCE` environment variable.

use crate::config::{Config, SourceLocator};
use crate::constants::{DEFAULT_BIND_ADDRESS, DEFAULT_SOURCE_PATH};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the buoy tracker
///
/// Reads drifting-buoy position exports and serves positions and the
/// environmental time series as JSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "buoy-tracker",
    version,
    about = "Serve buoy positions and environmental time series from CSV exports",
    long_about = "Parses drifting-buoy position exports (CSV), skipping malformed rows without \
                  aborting, and serves raw positions, date- or month-filtered positions and a \
                  time-ordered pressure/temperature/submergence series over an HTTP JSON API."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Serve the JSON API (and optionally a static frontend)
    Serve(ServeArgs),
    /// Parse a source and report row, series and day statistics
    Inspect(InspectArgs),
    /// Print the environmental time series as JSON
    Series(SeriesArgs),
}

/// Output format for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Human,
    /// JSON document
    Json,
}

/// Source selection shared by all commands
#[derive(Debug, Clone, ClapArgs)]
pub struct SourceArgs {
    /// Position CSV export to read
    #[arg(
        short = 's',
        long = "source",
        value_name = "PATH",
        env = "BUOY_SOURCE",
        default_value = DEFAULT_SOURCE_PATH,
        help = "Position CSV export to read"
    )]
    pub source: PathBuf,
}

impl SourceArgs {
    pub fn locator(&self) -> SourceLocator {
        SourceLocator::new(self.source.clone())
    }
}

/// Logging flags shared by all commands
#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl LogArgs {
    /// Map flags onto a tracing level name
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Arguments for the serve command
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Address to listen on
    #[arg(
        short = 'b',
        long = "bind",
        value_name = "ADDR",
        env = "BUOY_BIND",
        default_value = DEFAULT_BIND_ADDRESS,
        help = "Address to listen on"
    )]
    pub bind: String,

    /// Directory containing a built frontend
    ///
    /// Served for every path outside `/api`, with `index.html` for directories.
    #[arg(
        long = "static-dir",
        value_name = "DIR",
        env = "BUOY_STATIC_DIR",
        help = "Directory containing a built frontend"
    )]
    pub static_dir: Option<PathBuf>,

    /// Allowed CORS origin (repeatable; any origin when omitted)
    #[arg(
        long = "cors-origin",
        value_name = "ORIGIN",
        help = "Allowed CORS origin (repeatable; any origin when omitted)"
    )]
    pub cors_origins: Vec<String>,

    #[command(flatten)]
    pub log: LogArgs,
}

impl ServeArgs {
    /// Build the serving configuration
    pub fn to_config(&self) -> Config {
        let mut config = Config::default()
            .with_source(self.source.locator())
            .with_bind_address(self.bind.clone())
            .with_cors_origins(self.cors_origins.clone());

        if let Some(dir) = &self.static_dir {
            config = config.with_static_dir(dir.clone());
        }

        config
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Arguments for the series command
#[derive(Debug, Clone, Parser)]
pub struct SeriesArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Pretty-print the JSON output
    #[arg(long = "pretty", help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[command(flatten)]
    pub log: LogArgs,
}

//! Command implementations for the buoy tracker CLI
//!
//! Each command lives in its own module:
//! - `serve`: HTTP API with graceful Ctrl-C shutdown
//! - `inspect`: one-pass parse report for a source
//! - `series`: time series printed as JSON

pub mod inspect;
pub mod series;
pub mod serve;
pub mod shared;

use crate::cli::args::Commands;

/// Dispatch to the selected subcommand
pub async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve(serve_args) => serve::run_serve(serve_args).await,
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args).await,
        Commands::Series(series_args) => series::run_series(series_args).await,
    }
}

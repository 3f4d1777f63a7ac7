//! Series command implementation

use anyhow::Context;
use tracing::info;

use super::shared::setup_logging;
use crate::app::services::position_service::PositionService;
use crate::cli::args::SeriesArgs;

/// Print the environmental time series as a JSON array on stdout
pub async fn run_series(args: SeriesArgs) -> anyhow::Result<()> {
    setup_logging(&args.log);

    let service = PositionService::new(args.source.locator());
    let points = service
        .get_time_series()
        .await
        .with_context(|| format!("Failed to build time series from {}", service.source()))?;

    info!("Built {} time-series points", points.len());

    let json = if args.pretty {
        serde_json::to_string_pretty(&points)?
    } else {
        serde_json::to_string(&points)?
    };
    println!("{}", json);

    Ok(())
}

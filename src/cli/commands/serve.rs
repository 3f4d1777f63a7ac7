//! Serve command implementation

use anyhow::Context;
use tracing::{info, warn};

use super::shared::setup_logging;
use crate::cli::args::ServeArgs;
use crate::server;

/// Run the HTTP server until Ctrl-C
pub async fn run_serve(args: ServeArgs) -> anyhow::Result<()> {
    setup_logging(&args.log);

    let config = args.to_config();
    config.validate().context("Invalid server configuration")?;

    if !config.source.path().exists() {
        warn!(
            "Source {} does not exist yet; requests will fail until it does",
            config.source
        );
    }

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl-C, shutting down gracefully");
    };

    server::serve(config, shutdown)
        .await
        .context("Server terminated with an error")
}

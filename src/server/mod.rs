//! HTTP serving layer
//!
//! Thin axum glue over [`PositionService`]: JSON endpoints under `/api`,
//! CORS, request tracing and, when configured, a static frontend served for
//! every other path.
//!
//! | Route                          | Response                    |
//! |--------------------------------|-----------------------------|
//! | `GET /api/health`              | `{"status":"ok"}`           |
//! | `GET /api/positions`           | positions, `?date=`/`?month=` |
//! | `GET /api/positions/date/:p`   | positions with fix-time prefix |
//! | `GET /api/positions/month/:t`  | positions with month token  |
//! | `GET /api/timeseries`          | environmental series        |
//! | `GET /api/days`                | distinct fix days           |

pub mod error;
pub mod routes;

use std::future::Future;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::services::position_service::PositionService;
use crate::config::Config;
use crate::{Error, Result};

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: PositionService,
}

/// Build the application router from configuration
pub fn create_router(config: &Config) -> Result<Router> {
    let state = AppState {
        service: PositionService::from_config(config),
    };

    let api = Router::new()
        .route("/health", get(routes::health))
        .route("/positions", get(routes::positions))
        .route("/positions/date/:prefix", get(routes::positions_by_date))
        .route("/positions/month/:token", get(routes::positions_by_month))
        .route("/timeseries", get(routes::time_series))
        .route("/days", get(routes::fix_days));

    let mut router = Router::new().nest("/api", api).with_state(state);

    if let Some(static_dir) = &config.static_dir {
        router = router.fallback_service(
            ServeDir::new(static_dir).append_index_html_on_directories(true),
        );
    }

    Ok(router
        .layer(cors_layer(&config.cors_origins)?)
        .layer(TraceLayer::new_for_http()))
}

/// Bind and serve until `shutdown` resolves
pub async fn serve<F>(config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    config.validate()?;
    let addr = config.socket_addr()?;
    let router = create_router(&config)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::io(format!("Failed to bind {}", addr), e))?;

    info!(
        "Serving positions from {} on http://{}",
        config.source, addr
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| Error::io("HTTP server failed", e))?;

    info!("Server stopped");
    Ok(())
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| {
                Error::configuration(format!("Invalid CORS origin '{}': {}", origin, e))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

//! HTTP handlers for the position API

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::Result;
use crate::app::models::{PositionFilter, PositionRecord, TimeSeriesPoint};

/// Optional filters on `GET /api/positions`
#[derive(Debug, Default, Deserialize)]
pub struct PositionQuery {
    /// Fix-time prefix
    pub date: Option<String>,
    /// Month token compared at the fixed month offset
    pub month: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn positions(
    State(state): State<AppState>,
    Query(query): Query<PositionQuery>,
) -> Result<Json<Vec<PositionRecord>>> {
    let filter = PositionFilter::from_query(query.date, query.month)?;
    Ok(Json(state.service.get_positions(filter).await?))
}

pub async fn positions_by_date(
    State(state): State<AppState>,
    Path(prefix): Path<String>,
) -> Result<Json<Vec<PositionRecord>>> {
    let records = state
        .service
        .get_positions(PositionFilter::DatePrefix(prefix))
        .await?;
    Ok(Json(records))
}

pub async fn positions_by_month(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<Vec<PositionRecord>>> {
    let records = state
        .service
        .get_positions(PositionFilter::MonthToken(token))
        .await?;
    Ok(Json(records))
}

pub async fn time_series(State(state): State<AppState>) -> Result<Json<Vec<TimeSeriesPoint>>> {
    Ok(Json(state.service.get_time_series().await?))
}

pub async fn fix_days(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(state.service.get_fix_days().await?))
}

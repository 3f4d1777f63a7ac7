//! Integration tests for the position HTTP API
//!
//! These tests build the full router over a temporary CSV export and drive it
//! with in-process requests, covering filters, series ordering and the status
//! codes returned for client and source errors.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use buoy_tracker::{Config, SourceLocator};
use buoy_tracker::server::create_router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;
use tower::ServiceExt;

const HEADER: &str = "PositionFixTime,ObservationTime,Latitude,Longitude,\
                      BarometricPressure,SeaSurfaceTemperature,Submergence";

fn write_source(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}

fn sample_source() -> NamedTempFile {
    write_source(&[
        "16-03-2020 08:00:00,16-03-2020 08:00:00,12.6,45.2,1008.0,NaN,",
        "15-03-2020 10:00:00,15-03-2020 10:00:00,12.5,45.0,1010.0,21.4,3",
        "15-03-2020 11:00:00,15-03-2020 11:00:00,abc,45.1,1009.0,21.5,4",
        "02-04-2020 06:00:00,02-04-2020 06:00:00,13.0,46.0,,20.0,0",
        "02-04-2020 07:00:00,not a time,13.1,46.1,1004.0,20.1,0",
    ])
}

fn router_for(file: &NamedTempFile) -> Router {
    let config = Config::default().with_source(SourceLocator::new(file.path()));
    create_router(&config).expect("Failed to build router")
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Test that unfiltered positions contain every valid row in source order
///
/// Purpose: A malformed latitude must drop only its own row
/// Benefit: One bad line in an export never hides the rest of the track
#[tokio::test]
async fn test_positions_skip_malformed_rows() {
    let file = sample_source();
    let (status, body) = get(router_for(&file), "/api/positions").await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["fixTime"], "16-03-2020 08:00:00");
    assert_eq!(records[1]["lat"], 12.5);
    assert_eq!(records[3]["obsTime"], "not a time");
}

#[tokio::test]
async fn test_positions_by_date_prefix() {
    let file = sample_source();

    let (status, body) = get(router_for(&file), "/api/positions?date=15-03-2020").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = get(router_for(&file), "/api/positions/date/02-04").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_positions_by_month_token() {
    let file = sample_source();

    // Characters 6..9 of "DD-MM-YYYY ..." are the first three year digits
    let (status, body) = get(router_for(&file), "/api/positions?month=202").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);

    let (status, body) = get(router_for(&file), "/api/positions/month/201").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

/// Test that month tokens wider or narrower than the window are rejected
#[tokio::test]
async fn test_month_token_of_wrong_width_is_bad_request() {
    let file = sample_source();

    for uri in [
        "/api/positions?month=2020",
        "/api/positions?month=03",
        "/api/positions/month/2",
    ] {
        let (status, body) = get(router_for(&file), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["error"].is_string(), "{}", uri);
    }
}

/// Test that supplying both filters is rejected as a client error
#[tokio::test]
async fn test_conflicting_filters_are_bad_request() {
    let file = sample_source();
    let (status, body) = get(
        router_for(&file),
        "/api/positions?date=15-03&month=202",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_empty_month_token_is_bad_request() {
    let file = sample_source();
    let (status, _) = get(router_for(&file), "/api/positions?month=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Test the environmental series over the sample export
///
/// Purpose: Verify ordering, pressure filtering, null handling and ISO output
/// Benefit: The chart frontend can plot the array without further cleanup
#[tokio::test]
async fn test_time_series_is_sorted_and_filtered() {
    let file = sample_source();
    let (status, body) = get(router_for(&file), "/api/timeseries").await;

    assert_eq!(status, StatusCode::OK);
    let points = body.as_array().unwrap();
    assert_eq!(points.len(), 2);

    assert_eq!(points[0]["time"], "2020-03-15T10:00:00");
    assert_eq!(points[0]["pressure"], 1010.0);
    assert_eq!(points[0]["seaSurfaceTemperature"], 21.4);
    assert_eq!(points[0]["submergence"], 3.0);

    assert_eq!(points[1]["time"], "2020-03-16T08:00:00");
    assert_eq!(points[1]["pressure"], 1008.0);
    assert!(points[1]["seaSurfaceTemperature"].is_null());
    assert!(points[1]["submergence"].is_null());
}

#[tokio::test]
async fn test_fix_days_in_first_appearance_order() {
    let file = sample_source();
    let (status, body) = get(router_for(&file), "/api/days").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!(["16-03-2020", "15-03-2020", "02-04-2020"])
    );
}

#[tokio::test]
async fn test_header_only_source_yields_empty_arrays() {
    let file = write_source(&[]);

    for uri in ["/api/positions", "/api/timeseries", "/api/days"] {
        let (status, body) = get(router_for(&file), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, serde_json::json!([]), "{}", uri);
    }
}

/// Test that an unreadable source is a server error, not an empty result
#[tokio::test]
async fn test_missing_source_is_server_error() {
    let config = Config::default().with_source(SourceLocator::new("/no/such/dir/positions.csv"));
    let router = create_router(&config).unwrap();

    let (status, body) = get(router.clone(), "/api/positions").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());

    let (status, _) = get(router, "/api/timeseries").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_health() {
    let file = sample_source();
    let (status, body) = get(router_for(&file), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

/// Test that a file edited between requests is reflected in the next response
#[tokio::test]
async fn test_each_request_reparses_source() {
    let mut file = write_source(&["15-03-2020 10:00:00,15-03-2020 10:00:00,12.5,45.0,1010.0,,"]);
    let router = router_for(&file);

    let (_, body) = get(router.clone(), "/api/positions").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    writeln!(file, "16-03-2020 10:00:00,16-03-2020 10:00:00,12.7,45.3,1011.0,,").unwrap();
    file.flush().unwrap();

    let (_, body) = get(router, "/api/positions").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

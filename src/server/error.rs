//! Mapping of crate errors onto HTTP responses

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};

use crate::Error;

/// JSON body returned for failed requests
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl Error {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            match std::error::Error::source(&self) {
                Some(source) => error!("Request failed: {} ({})", self, source),
                None => error!("Request failed: {}", self),
            }
        } else {
            warn!("Rejected request: {}", self);
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

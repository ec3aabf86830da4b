pub mod health;
pub mod stats;
pub mod timer;
pub mod user;
pub mod worklog;

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use worklog_core::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Map a core error onto its HTTP status.
pub fn error_response(err: Error) -> ApiError {
    let status = match &err {
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
        Error::Other(e) => {
            tracing::error!("Unexpected error: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Rejections from axum extractors are reported as invalid input.
pub fn rejection_response(rejection: impl std::fmt::Display) -> ApiError {
    tracing::debug!("Rejected request: {}", rejection);
    error_response(Error::invalid_input(rejection.to_string()))
}

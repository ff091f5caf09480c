//! Handler helper functions
//!
//! Shared by multiple handlers: service-error mapping and time helpers.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, http::StatusCode};

use super::super::services::OrderServiceError;
use super::super::types::{ErrorResponse, error_codes};

/// Map a service error to its HTTP response
///
/// Validation failures are the caller's fault (400); store failures are
/// ours (500) and the detail stays in the log, not the body.
pub(crate) fn service_error(err: OrderServiceError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        OrderServiceError::InvalidRequest(msg) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(error_codes::INVALID_PARAMETER, msg)),
        ),
        OrderServiceError::Store(e) => {
            tracing::error!("order store failure: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    error_codes::INTERNAL_ERROR,
                    "internal error",
                )),
            )
        }
    }
}

/// Get current time in milliseconds
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

//! Error types for the booking server
//!
//! Provides unified error handling using thiserror.
//!
//! Cache misses are deliberately not represented here: the cache reports
//! absence through `Option`, and a miss simply falls through to the
//! repository. Errors cover domain lookups, request validation and
//! configuration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Booking Error Enum ==
/// Unified error type for the booking server.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Requested domain record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Rejected configuration, fatal at construction time
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            BookingError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            BookingError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            BookingError::InvalidConfig(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            BookingError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the booking server.
pub type Result<T> = std::result::Result<T, BookingError>;

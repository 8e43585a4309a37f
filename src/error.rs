//! Server and request-target error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::io;

/// Body returned for request targets that cannot be resolved
pub const BAD_REQUEST_BODY: &str = "bad request\n";

/// Server startup and serving errors
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// A request target that could not be resolved into a path
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("Invalid host: {0:?}")]
    InvalidHost(String),

    #[error("Invalid request target: {0}")]
    InvalidTarget(String),

    #[error("Invalid percent-escape in path: {0:?}")]
    InvalidEscape(String),
}

impl IntoResponse for TargetError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Rejecting unparsable request target");
        (StatusCode::BAD_REQUEST, BAD_REQUEST_BODY).into_response()
    }
}

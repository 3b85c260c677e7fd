//! # REST API Errors
//!
//! Error types for the HTTP boundary. Note what is NOT here: a
//! NotFound variant. An id filter that matches nothing returns an
//! empty collection with status 200 by design.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    /// Malformed id or limit parameter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal error producing a response
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: u16,
}

impl From<RestError> for ErrorBody {
    fn from(err: RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody::from(self));
        (status, body).into_response()
    }
}

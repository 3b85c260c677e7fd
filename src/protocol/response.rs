//! Protocol response envelopes
//!
//! Success: `{"status":"ok","data":...}`
//! Error:   `{"status":"error","code":...,"message":...}`

use serde::Serialize;
use serde_json::Value;

use super::errors::ProtocolError;

/// Success envelope
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub status: &'static str,
    pub data: Value,
}

/// Error envelope
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub code: String,
    pub message: String,
}

/// Unified response type
#[derive(Debug, Clone)]
pub enum Response {
    Success(SuccessResponse),
    Error(ErrorResponse),
}

impl Response {
    /// Wraps result data in a success envelope.
    pub fn success(data: Value) -> Self {
        Response::Success(SuccessResponse {
            status: "ok",
            data,
        })
    }

    /// Wraps a protocol error in an error envelope.
    pub fn error(err: &ProtocolError) -> Self {
        Response::Error(ErrorResponse {
            status: "error",
            code: err.code_str().to_string(),
            message: err.message().to_string(),
        })
    }

    /// Serializes the envelope to one line of JSON.
    pub fn to_json(&self) -> String {
        let serialized = match self {
            Response::Success(r) => serde_json::to_string(r),
            Response::Error(r) => serde_json::to_string(r),
        };
        serialized.expect("response envelope serialization cannot fail")
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }
}

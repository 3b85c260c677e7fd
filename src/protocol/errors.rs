//! Protocol error types
//!
//! Error codes:
//! - PODIUM_INVALID_REQUEST (ERROR): not a JSON object, unknown op
//! - PODIUM_INVALID_ARGUMENT (ERROR): parameter of the wrong type
//! - PODIUM_INTERNAL (ERROR): response could not be produced
//!
//! None of these are fatal: a bad request is answered with an error
//! envelope and the serving loop continues.

use std::fmt;

/// Protocol error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolErrorCode {
    /// Request envelope is unusable
    InvalidRequest,
    /// A parameter has the wrong type or range
    InvalidArgument,
    /// Response serialization failed
    Internal,
}

impl ProtocolErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "PODIUM_INVALID_REQUEST",
            Self::InvalidArgument => "PODIUM_INVALID_ARGUMENT",
            Self::Internal => "PODIUM_INTERNAL",
        }
    }
}

/// Protocol error
#[derive(Debug)]
pub struct ProtocolError {
    code: ProtocolErrorCode,
    message: String,
}

impl ProtocolError {
    /// Unusable request envelope
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self {
            code: ProtocolErrorCode::InvalidRequest,
            message: msg.into(),
        }
    }

    /// Parameter with the wrong type
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self {
            code: ProtocolErrorCode::InvalidArgument,
            message: msg.into(),
        }
    }

    /// Internal serialization failure
    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            code: ProtocolErrorCode::Internal,
            message: msg.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ProtocolErrorCode {
        self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for ProtocolError {}

/// Protocol result type
pub type ProtocolResult<T> = Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ProtocolError::invalid_request("x").code_str(),
            "PODIUM_INVALID_REQUEST"
        );
        assert_eq!(
            ProtocolError::invalid_argument("x").code_str(),
            "PODIUM_INVALID_ARGUMENT"
        );
    }
}

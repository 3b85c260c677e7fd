//! Dataset error types
//!
//! All dataset errors are FATAL: a dataset that cannot be read and
//! validated prevents startup entirely.
//!
//! Error codes:
//! - PODIUM_DATASET_IO
//! - PODIUM_DATASET_MALFORMED
//! - PODIUM_DATA_INTEGRITY

use std::fmt;
use std::io;

/// Dataset error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetErrorCode {
    /// Dataset file could not be read
    Io,
    /// Dataset file is not valid JSON for the expected shape
    Malformed,
    /// A record violates a data invariant
    IntegrityViolation,
}

impl DatasetErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io => "PODIUM_DATASET_IO",
            Self::Malformed => "PODIUM_DATASET_MALFORMED",
            Self::IntegrityViolation => "PODIUM_DATA_INTEGRITY",
        }
    }
}

/// Dataset error
#[derive(Debug)]
pub struct DatasetError {
    code: DatasetErrorCode,
    message: String,
}

impl DatasetError {
    /// I/O failure reading the dataset file
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self {
            code: DatasetErrorCode::Io,
            message: msg.into(),
        }
    }

    /// Structurally invalid dataset file
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self {
            code: DatasetErrorCode::Malformed,
            message: msg.into(),
        }
    }

    /// A record violating a load-time invariant
    pub fn integrity_violation(msg: impl Into<String>) -> Self {
        Self {
            code: DatasetErrorCode::IntegrityViolation,
            message: msg.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> DatasetErrorCode {
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

    /// Dataset errors always prevent startup
    pub fn is_fatal(&self) -> bool {
        true
    }
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for DatasetError {}

impl From<io::Error> for DatasetError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

/// Dataset result type
pub type DatasetResult<T> = Result<T, DatasetError>;

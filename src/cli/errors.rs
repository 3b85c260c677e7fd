//! CLI-specific error types
//!
//! All CLI errors terminate the process with a non-zero exit.

use std::fmt;
use std::io;

use crate::dataset::DatasetError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout, dataset skeleton)
    IoError,
    /// Dataset already exists at the configured path
    AlreadyInitialized,
    /// Dataset load or validation failed
    DatasetError,
    /// Boot failed
    BootFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "PODIUM_CLI_CONFIG_ERROR",
            Self::IoError => "PODIUM_CLI_IO_ERROR",
            Self::AlreadyInitialized => "PODIUM_CLI_ALREADY_INITIALIZED",
            Self::DatasetError => "PODIUM_CLI_DATASET_ERROR",
            Self::BootFailed => "PODIUM_CLI_BOOT_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Dataset already present
    pub fn already_initialized(path: impl fmt::Display) -> Self {
        Self::new(
            CliErrorCode::AlreadyInitialized,
            format!("Dataset already exists at {}", path),
        )
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
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

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<DatasetError> for CliError {
    fn from(e: DatasetError) -> Self {
        Self::new(CliErrorCode::DatasetError, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_error_keeps_its_code_in_message() {
        let err: CliError = DatasetError::integrity_violation("medal 3 has no holder").into();
        assert_eq!(err.code(), &CliErrorCode::DatasetError);
        assert!(err.message().contains("PODIUM_DATA_INTEGRITY"));
    }

    #[test]
    fn test_error_display() {
        let err = CliError::config_error("missing dataset_path");
        let display = format!("{}", err);
        assert!(display.contains("PODIUM_CLI_CONFIG_ERROR"));
    }
}

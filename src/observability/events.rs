//! Lifecycle events
//!
//! The observable events of a read-only query service: boot, dataset
//! load, serving, shutdown. Events are explicit and typed; free-form
//! event names do not appear outside this module.

use std::fmt;

use super::logger::Severity;

/// Observable lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Startup begins
    BootStart,
    /// Configuration file loaded and validated
    ConfigLoaded,
    /// Dataset loaded and validated
    DatasetLoaded,
    /// A dangling reference was found at load time
    IntegrityWarning,
    /// Startup failed (FATAL)
    BootFailed,
    /// Ready to serve requests
    Serving,
    /// An aggregate query was executed
    QueryExecuted,
    /// A request was rejected at the boundary
    QueryRejected,
    /// Shutdown complete
    ShutdownComplete,
}

impl Event {
    /// Event name as logged.
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::IntegrityWarning => "INTEGRITY_WARNING",
            Event::BootFailed => "BOOT_FAILED",
            Event::Serving => "SERVING",
            Event::QueryExecuted => "QUERY_EXECUTED",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
        }
    }

    /// Severity this event is logged at.
    pub fn severity(&self) -> Severity {
        match self {
            Event::BootFailed => Severity::Fatal,
            Event::IntegrityWarning => Severity::Warn,
            Event::QueryRejected => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Observability subsystem
//!
//! Structured JSON logging and typed lifecycle events.
//!
//! Principles:
//! 1. Observability is read-only: it never affects query results
//! 2. Synchronous, no background threads
//! 3. Deterministic output for a given event sequence

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with no extra fields.
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_does_not_panic() {
        log_event(Event::BootStart);
        log_event_with_fields(Event::DatasetLoaded, &[("medals", "3")]);
    }
}

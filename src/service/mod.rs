//! Query facade
//!
//! The single entry point boundary layers talk to: six per-entity
//! accessors plus the four aggregate views.

mod facade;

pub use facade::{QueryService, DEFAULT_TOP};

//! podium - a strict, deterministic, read-only Olympic results query
//! service
//!
//! The dataset is loaded and validated once at startup; everything
//! after that is a pure read. Data flows one direction:
//! store, index, query, service, then the boundary (HTTP or stdin).

pub mod cli;
pub mod dataset;
pub mod index;
pub mod model;
pub mod observability;
pub mod protocol;
pub mod query;
pub mod rest_api;
pub mod service;
pub mod store;

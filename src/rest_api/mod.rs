//! REST API boundary
//!
//! HTTP read endpoints over the query facade:
//! - six entity listings with optional `id` narrowing
//! - four aggregate views (`/top-countries`, `/collective-medals`,
//!   `/individual-medals`, `/top-individual`)
//! - `/health`
//!
//! All endpoints are GET; the service is read-only by construction.

mod config;
mod errors;
mod params;
mod response;
mod server;

pub use config::ServerConfig;
pub use errors::{ErrorBody, RestError, RestResult};
pub use params::{optional_id, top_count};
pub use response::{HealthResponse, ListResponse};
pub use server::RestServer;

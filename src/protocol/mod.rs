//! Line-delimited JSON query protocol
//!
//! The stdin/stdout boundary: one JSON request per line, one JSON
//! response per line. Mirrors the HTTP endpoints one-to-one and talks
//! only to the query facade.

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ProtocolError, ProtocolErrorCode, ProtocolResult};
pub use handler::ProtocolHandler;
pub use request::Request;
pub use response::{ErrorResponse, Response, SuccessResponse};

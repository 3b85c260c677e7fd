//! # Query Parameter Parsing
//!
//! Parses the raw query-string map into typed parameters. Presence is
//! explicit: a parameter is either absent or must parse as an unsigned
//! integer. There is no truthiness anywhere: `id=0` is a provided id
//! that matches nothing, and `top=0` asks for zero rows and gets them.
//!
//! Unknown parameters are ignored, matching the permissive behavior of
//! typical query-string handling.

use std::collections::HashMap;

use crate::model::EntityId;
use crate::service::DEFAULT_TOP;

use super::errors::{RestError, RestResult};

/// Parses an optional entity id parameter.
pub fn optional_id(params: &HashMap<String, String>, key: &str) -> RestResult<Option<EntityId>> {
    match params.get(key) {
        None => Ok(None),
        Some(value) => value.parse::<EntityId>().map(Some).map_err(|_| {
            RestError::InvalidArgument(format!("{} must be a non-negative integer: {}", key, value))
        }),
    }
}

/// Parses the `top` row-count parameter, defaulting to 10.
pub fn top_count(params: &HashMap<String, String>) -> RestResult<usize> {
    match params.get("top") {
        None => Ok(DEFAULT_TOP),
        Some(value) => value.parse::<usize>().map_err(|_| {
            RestError::InvalidArgument(format!("top must be a non-negative integer: {}", value))
        }),
    }
}

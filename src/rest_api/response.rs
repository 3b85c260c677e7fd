//! # Response Formatting
//!
//! Standard response envelope for REST list endpoints. Every endpoint
//! returns a list, even by-id lookups, which yield zero or one
//! element.

use serde::Serialize;

/// List response envelope
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_counts() {
        let response = ListResponse::new(vec![json!({"id": 1}), json!({"id": 2})]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["data"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_list_response() {
        let response: ListResponse<serde_json::Value> = ListResponse::new(Vec::new());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["count"], 0);
    }
}

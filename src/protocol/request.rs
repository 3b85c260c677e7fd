//! Protocol request parsing
//!
//! One JSON object per request. The `op` field selects the operation;
//! the entity ops take an optional `id`, the listing ops an optional
//! `team_id`/`athlete_id`, and the ranking ops a `top` count
//! defaulting to 10.
//!
//! Parameter presence is explicit: a missing or null key means "not
//! provided", and a provided value of the wrong type is an
//! InvalidArgument, never silently coerced.

use serde_json::{Map, Value};

use crate::model::{EntityId, EntityKind};
use crate::service::DEFAULT_TOP;

use super::errors::{ProtocolError, ProtocolResult};

/// A parsed protocol request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Scan one entity collection, optionally narrowed by id.
    Entities {
        kind: EntityKind,
        id: Option<EntityId>,
    },
    /// Country medal ranking.
    TopCountries { top: usize },
    /// Team-held medal listing.
    CollectiveMedals { team_id: Option<EntityId> },
    /// Athlete-held medal listing.
    IndividualMedals { athlete_id: Option<EntityId> },
    /// Athlete medal-count ranking.
    TopIndividual { top: usize },
}

impl Request {
    /// Parses a request from one line of JSON.
    pub fn parse(line: &str) -> ProtocolResult<Self> {
        let raw: Value = serde_json::from_str(line)
            .map_err(|e| ProtocolError::invalid_request(format!("Invalid JSON: {}", e)))?;

        let obj = raw
            .as_object()
            .ok_or_else(|| ProtocolError::invalid_request("Request must be a JSON object"))?;

        let op = obj
            .get("op")
            .and_then(Value::as_str)
            .ok_or_else(|| ProtocolError::invalid_request("Missing op"))?;

        if let Some(kind) = EntityKind::from_collection_name(op) {
            return Ok(Request::Entities {
                kind,
                id: optional_id(obj, "id")?,
            });
        }

        match op {
            "top-countries" => Ok(Request::TopCountries {
                top: optional_count(obj, "top")?.unwrap_or(DEFAULT_TOP),
            }),
            "collective-medals" => Ok(Request::CollectiveMedals {
                team_id: optional_id(obj, "team_id")?,
            }),
            "individual-medals" => Ok(Request::IndividualMedals {
                athlete_id: optional_id(obj, "athlete_id")?,
            }),
            "top-individual" => Ok(Request::TopIndividual {
                top: optional_count(obj, "top")?.unwrap_or(DEFAULT_TOP),
            }),
            other => Err(ProtocolError::invalid_request(format!(
                "Unknown op: {}",
                other
            ))),
        }
    }
}

/// Extracts an optional entity id. Absent and null both mean "not
/// provided"; anything that is not an unsigned integer in range is an
/// InvalidArgument.
fn optional_id(obj: &Map<String, Value>, key: &str) -> ProtocolResult<Option<EntityId>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|n| EntityId::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| {
                ProtocolError::invalid_argument(format!("{} must be a non-negative integer", key))
            }),
    }
}

/// Extracts an optional row count for ranking operations.
fn optional_count(obj: &Map<String, Value>, key: &str) -> ProtocolResult<Option<usize>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| {
                ProtocolError::invalid_argument(format!("{} must be a non-negative integer", key))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entity_request() {
        let request = Request::parse(r#"{"op": "countries"}"#).unwrap();
        assert_eq!(
            request,
            Request::Entities {
                kind: EntityKind::Country,
                id: None
            }
        );

        let request = Request::parse(r#"{"op": "athletes", "id": 7}"#).unwrap();
        assert_eq!(
            request,
            Request::Entities {
                kind: EntityKind::Athlete,
                id: Some(7)
            }
        );
    }

    #[test]
    fn test_parse_ranking_defaults() {
        let request = Request::parse(r#"{"op": "top-countries"}"#).unwrap();
        assert_eq!(request, Request::TopCountries { top: 10 });

        let request = Request::parse(r#"{"op": "top-individual", "top": 3}"#).unwrap();
        assert_eq!(request, Request::TopIndividual { top: 3 });
    }

    #[test]
    fn test_parse_listing_filters() {
        let request = Request::parse(r#"{"op": "collective-medals", "team_id": 2}"#).unwrap();
        assert_eq!(request, Request::CollectiveMedals { team_id: Some(2) });

        let request = Request::parse(r#"{"op": "individual-medals"}"#).unwrap();
        assert_eq!(request, Request::IndividualMedals { athlete_id: None });
    }

    #[test]
    fn test_null_means_not_provided() {
        let request = Request::parse(r#"{"op": "countries", "id": null}"#).unwrap();
        assert_eq!(
            request,
            Request::Entities {
                kind: EntityKind::Country,
                id: None
            }
        );
    }

    #[test]
    fn test_wrong_type_is_invalid_argument() {
        let err = Request::parse(r#"{"op": "countries", "id": "abc"}"#).unwrap_err();
        assert_eq!(err.code_str(), "PODIUM_INVALID_ARGUMENT");

        let err = Request::parse(r#"{"op": "top-countries", "top": -1}"#).unwrap_err();
        assert_eq!(err.code_str(), "PODIUM_INVALID_ARGUMENT");

        let err = Request::parse(r#"{"op": "top-countries", "top": 1.5}"#).unwrap_err();
        assert_eq!(err.code_str(), "PODIUM_INVALID_ARGUMENT");
    }

    #[test]
    fn test_bad_envelope_is_invalid_request() {
        assert_eq!(
            Request::parse("not json").unwrap_err().code_str(),
            "PODIUM_INVALID_REQUEST"
        );
        assert_eq!(
            Request::parse(r#"[1, 2]"#).unwrap_err().code_str(),
            "PODIUM_INVALID_REQUEST"
        );
        assert_eq!(
            Request::parse(r#"{"op": "referees"}"#).unwrap_err().code_str(),
            "PODIUM_INVALID_REQUEST"
        );
    }
}

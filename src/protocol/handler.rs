//! Protocol request handler
//!
//! Dispatches parsed requests to the query facade. Every request
//! produces exactly one response; parse failures become error
//! envelopes and never abort the serving loop.

use serde_json::Value;

use crate::model::EntityKind;
use crate::observability::{log_event_with_fields, Event};
use crate::service::QueryService;

use super::errors::ProtocolError;
use super::request::Request;
use super::response::Response;

/// Handler binding the protocol to a query service.
pub struct ProtocolHandler {
    service: QueryService,
}

impl ProtocolHandler {
    pub fn new(service: QueryService) -> Self {
        Self { service }
    }

    /// Handles one request line, returning the response envelope.
    pub fn handle(&self, line: &str) -> Response {
        match Request::parse(line) {
            Ok(request) => self.dispatch(&request),
            Err(err) => {
                log_event_with_fields(
                    Event::QueryRejected,
                    &[("code", err.code_str()), ("reason", err.message())],
                );
                Response::error(&err)
            }
        }
    }

    fn dispatch(&self, request: &Request) -> Response {
        let (op, data) = match *request {
            Request::Entities { kind, id } => {
                let data = match kind {
                    EntityKind::Country => to_value(&self.service.countries(id)),
                    EntityKind::Athlete => to_value(&self.service.athletes(id)),
                    EntityKind::Team => to_value(&self.service.teams(id)),
                    EntityKind::Discipline => to_value(&self.service.disciplines(id)),
                    EntityKind::Event => to_value(&self.service.events(id)),
                    EntityKind::Medal => to_value(&self.service.medals(id)),
                };
                (kind.collection_name(), data)
            }
            Request::TopCountries { top } => {
                ("top-countries", to_value(&self.service.top_countries(top)))
            }
            Request::CollectiveMedals { team_id } => (
                "collective-medals",
                to_value(&self.service.collective_medals(team_id)),
            ),
            Request::IndividualMedals { athlete_id } => (
                "individual-medals",
                to_value(&self.service.individual_medals(athlete_id)),
            ),
            Request::TopIndividual { top } => (
                "top-individual",
                to_value(&self.service.top_individual(top)),
            ),
        };

        match data {
            Ok(data) => {
                let rows = data.as_array().map(Vec::len).unwrap_or(0);
                log_event_with_fields(
                    Event::QueryExecuted,
                    &[("op", op), ("rows", &rows.to_string())],
                );
                Response::success(data)
            }
            Err(err) => Response::error(&err),
        }
    }
}

fn to_value<T: serde::Serialize>(rows: &T) -> Result<Value, ProtocolError> {
    serde_json::to_value(rows).map_err(|e| ProtocolError::internal(e.to_string()))
}

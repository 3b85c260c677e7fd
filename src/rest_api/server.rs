//! # REST API HTTP Server
//!
//! Axum-based HTTP server exposing the read endpoints. Handlers are
//! thin: parse parameters, call the query facade, wrap rows in the
//! list envelope. Trailing slashes are normalized away so /countries
//! and /countries/ hit the same route.

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;

use axum::{
    extract::{Query, Request, State},
    routing::get,
    Json, Router, ServiceExt,
};
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::normalize_path::NormalizePathLayer;

use crate::model::{Athlete, Country, Discipline, Event as SportEvent, Medal, Team};
use crate::observability::{log_event_with_fields, Event};
use crate::query::{
    CollectiveMedalRow, CountryRankingRow, IndividualMedalRow, TopIndividualRow,
};
use crate::service::QueryService;

use super::config::ServerConfig;
use super::errors::RestResult;
use super::params;
use super::response::{HealthResponse, ListResponse};

/// REST API server
pub struct RestServer {
    config: ServerConfig,
    router: Router,
}

impl RestServer {
    /// Builds the server around a query service.
    pub fn new(service: QueryService, config: ServerConfig) -> Self {
        let router = build_router(service, &config);
        Self { config, router }
    }

    /// Get the configured socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let app = NormalizePathLayer::trim_trailing_slash().layer(self.router);

        let listener = TcpListener::bind(addr).await?;
        log_event_with_fields(Event::Serving, &[("addr", &addr.to_string())]);
        axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await
    }
}

fn build_router(service: QueryService, config: &ServerConfig) -> Router {
    let cors = if config.cors_origins.is_empty() {
        // No origins configured: permissive
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/health", get(health_handler))
        // Entity endpoints
        .route("/countries", get(countries_handler))
        .route("/athletes", get(athletes_handler))
        .route("/disciplines", get(disciplines_handler))
        .route("/teams", get(teams_handler))
        .route("/events", get(events_handler))
        .route("/medals", get(medals_handler))
        // Aggregate endpoints
        .route("/top-countries", get(top_countries_handler))
        .route("/collective-medals", get(collective_medals_handler))
        .route("/individual-medals", get(individual_medals_handler))
        .route("/top-individual", get(top_individual_handler))
        .with_state(service)
        .layer(cors)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn countries_handler(
    State(service): State<QueryService>,
    Query(query): Query<HashMap<String, String>>,
) -> RestResult<Json<ListResponse<Country>>> {
    let id = params::optional_id(&query, "id")?;
    Ok(Json(ListResponse::new(service.countries(id))))
}

async fn athletes_handler(
    State(service): State<QueryService>,
    Query(query): Query<HashMap<String, String>>,
) -> RestResult<Json<ListResponse<Athlete>>> {
    let id = params::optional_id(&query, "id")?;
    Ok(Json(ListResponse::new(service.athletes(id))))
}

async fn disciplines_handler(
    State(service): State<QueryService>,
    Query(query): Query<HashMap<String, String>>,
) -> RestResult<Json<ListResponse<Discipline>>> {
    let id = params::optional_id(&query, "id")?;
    Ok(Json(ListResponse::new(service.disciplines(id))))
}

async fn teams_handler(
    State(service): State<QueryService>,
    Query(query): Query<HashMap<String, String>>,
) -> RestResult<Json<ListResponse<Team>>> {
    let id = params::optional_id(&query, "id")?;
    Ok(Json(ListResponse::new(service.teams(id))))
}

async fn events_handler(
    State(service): State<QueryService>,
    Query(query): Query<HashMap<String, String>>,
) -> RestResult<Json<ListResponse<SportEvent>>> {
    let id = params::optional_id(&query, "id")?;
    Ok(Json(ListResponse::new(service.events(id))))
}

async fn medals_handler(
    State(service): State<QueryService>,
    Query(query): Query<HashMap<String, String>>,
) -> RestResult<Json<ListResponse<Medal>>> {
    let id = params::optional_id(&query, "id")?;
    Ok(Json(ListResponse::new(service.medals(id))))
}

async fn top_countries_handler(
    State(service): State<QueryService>,
    Query(query): Query<HashMap<String, String>>,
) -> RestResult<Json<ListResponse<CountryRankingRow>>> {
    let top = params::top_count(&query)?;
    let rows = service.top_countries(top);
    log_query("top-countries", rows.len());
    Ok(Json(ListResponse::new(rows)))
}

async fn collective_medals_handler(
    State(service): State<QueryService>,
    Query(query): Query<HashMap<String, String>>,
) -> RestResult<Json<ListResponse<CollectiveMedalRow>>> {
    let team_id = params::optional_id(&query, "team_id")?;
    let rows = service.collective_medals(team_id);
    log_query("collective-medals", rows.len());
    Ok(Json(ListResponse::new(rows)))
}

async fn individual_medals_handler(
    State(service): State<QueryService>,
    Query(query): Query<HashMap<String, String>>,
) -> RestResult<Json<ListResponse<IndividualMedalRow>>> {
    let athlete_id = params::optional_id(&query, "athlete_id")?;
    let rows = service.individual_medals(athlete_id);
    log_query("individual-medals", rows.len());
    Ok(Json(ListResponse::new(rows)))
}

async fn top_individual_handler(
    State(service): State<QueryService>,
    Query(query): Query<HashMap<String, String>>,
) -> RestResult<Json<ListResponse<TopIndividualRow>>> {
    let top = params::top_count(&query)?;
    let rows = service.top_individual(top);
    log_query("top-individual", rows.len());
    Ok(Json(ListResponse::new(rows)))
}

fn log_query(op: &str, rows: usize) {
    log_event_with_fields(Event::QueryExecuted, &[("op", op), ("rows", &rows.to_string())]);
}

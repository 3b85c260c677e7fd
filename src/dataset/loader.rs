//! Dataset loader
//!
//! Loads the persisted dataset file once at startup:
//! 1. Read the file fully and release the handle
//! 2. Parse the six entity collections
//! 3. Validate load-time invariants
//!
//! Validation is strict about identity and medal ownership:
//! - Duplicate ids within a collection reject the load
//! - A medal with both or neither of {athlete_id, team_id} rejects
//!   the load
//!
//! Dangling foreign keys do not reject the load; they are reported as
//! warnings and fall out of the inner joins at query time.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{Athlete, Country, Discipline, EntityId, Event, Medal, Team};

use super::errors::{DatasetError, DatasetResult};

/// The six entity collections as persisted on disk.
///
/// All six keys must be present; an empty collection is an empty
/// array, not a missing key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub countries: Vec<Country>,
    pub athletes: Vec<Athlete>,
    pub teams: Vec<Team>,
    pub disciplines: Vec<Discipline>,
    pub events: Vec<Event>,
    pub medals: Vec<Medal>,
}

/// Per-collection record counts for a loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub countries: usize,
    pub athletes: usize,
    pub teams: usize,
    pub disciplines: usize,
    pub events: usize,
    pub medals: usize,
}

impl DatasetSummary {
    fn of(dataset: &Dataset) -> Self {
        Self {
            countries: dataset.countries.len(),
            athletes: dataset.athletes.len(),
            teams: dataset.teams.len(),
            disciplines: dataset.disciplines.len(),
            events: dataset.events.len(),
            medals: dataset.medals.len(),
        }
    }
}

/// Outcome of load-time validation: counts plus non-fatal findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub summary: DatasetSummary,
    /// Dangling references found during validation. These records are
    /// excluded by inner joins at query time rather than rejected.
    pub warnings: Vec<String>,
}

/// Loads and validates the dataset file at `path`.
pub fn load_dataset(path: &Path) -> DatasetResult<(Dataset, IntegrityReport)> {
    let content = fs::read_to_string(path).map_err(|e| {
        DatasetError::io_error(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let dataset: Dataset = serde_json::from_str(&content).map_err(|e| {
        DatasetError::malformed(format!("Invalid dataset JSON in {}: {}", path.display(), e))
    })?;

    let report = validate(&dataset)?;
    Ok((dataset, report))
}

/// Validates load-time invariants on an in-memory dataset.
pub fn validate(dataset: &Dataset) -> DatasetResult<IntegrityReport> {
    check_unique_ids("countries", dataset.countries.iter().map(|c| c.id))?;
    check_unique_ids("athletes", dataset.athletes.iter().map(|a| a.id))?;
    check_unique_ids("teams", dataset.teams.iter().map(|t| t.id))?;
    check_unique_ids("disciplines", dataset.disciplines.iter().map(|d| d.id))?;
    check_unique_ids("events", dataset.events.iter().map(|e| e.id))?;
    check_unique_ids("medals", dataset.medals.iter().map(|m| m.id))?;

    // Medal ownership: exactly one of athlete_id / team_id.
    for medal in &dataset.medals {
        if medal.holder().is_none() {
            let detail = if medal.athlete_id.is_some() {
                "both athlete_id and team_id set"
            } else {
                "neither athlete_id nor team_id set"
            };
            return Err(DatasetError::integrity_violation(format!(
                "medal {} violates medal ownership: {}",
                medal.id, detail
            )));
        }
    }

    let warnings = find_dangling_references(dataset);

    Ok(IntegrityReport {
        summary: DatasetSummary::of(dataset),
        warnings,
    })
}

fn check_unique_ids(
    collection: &str,
    ids: impl Iterator<Item = EntityId>,
) -> DatasetResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DatasetError::integrity_violation(format!(
                "duplicate id {} in {}",
                id, collection
            )));
        }
    }
    Ok(())
}

fn find_dangling_references(dataset: &Dataset) -> Vec<String> {
    let country_ids: HashSet<EntityId> = dataset.countries.iter().map(|c| c.id).collect();
    let athlete_ids: HashSet<EntityId> = dataset.athletes.iter().map(|a| a.id).collect();
    let team_ids: HashSet<EntityId> = dataset.teams.iter().map(|t| t.id).collect();
    let discipline_ids: HashSet<EntityId> = dataset.disciplines.iter().map(|d| d.id).collect();
    let event_ids: HashSet<EntityId> = dataset.events.iter().map(|e| e.id).collect();

    let mut warnings = Vec::new();

    for athlete in &dataset.athletes {
        if let Some(country_id) = athlete.country_id {
            if !country_ids.contains(&country_id) {
                warnings.push(format!(
                    "athlete {} references unknown country {}",
                    athlete.id, country_id
                ));
            }
        }
    }

    for team in &dataset.teams {
        if let Some(country_id) = team.country_id {
            if !country_ids.contains(&country_id) {
                warnings.push(format!(
                    "team {} references unknown country {}",
                    team.id, country_id
                ));
            }
        }
    }

    for event in &dataset.events {
        if !discipline_ids.contains(&event.discipline_id) {
            warnings.push(format!(
                "event {} references unknown discipline {}",
                event.id, event.discipline_id
            ));
        }
    }

    for medal in &dataset.medals {
        if !event_ids.contains(&medal.event_id) {
            warnings.push(format!(
                "medal {} references unknown event {}",
                medal.id, medal.event_id
            ));
        }
        if let Some(athlete_id) = medal.athlete_id {
            if !athlete_ids.contains(&athlete_id) {
                warnings.push(format!(
                    "medal {} references unknown athlete {}",
                    medal.id, athlete_id
                ));
            }
        }
        if let Some(team_id) = medal.team_id {
            if !team_ids.contains(&team_id) {
                warnings.push(format!(
                    "medal {} references unknown team {}",
                    medal.id, team_id
                ));
            }
        }
    }

    warnings
}

//! Query service facade
//!
//! Owns the immutable store snapshot and the relationship index built
//! over it. The service is cheaply cloneable (`Arc` internals) and
//! safe to share across concurrent request handlers; every operation
//! is read-only.
//!
//! Per-entity accessors mirror the entity endpoints: an optional id
//! narrows the scan to at most one record. Id filtering is explicit
//! presence, never truthiness: `Some(0)` is a provided id that matches
//! nothing, not an absent parameter.

use std::sync::Arc;

use crate::index::RelationshipIndex;
use crate::model::{Athlete, Country, Discipline, EntityId, Event, Medal, Team};
use crate::query::{
    collective_medals, country_ranking, individual_medals, top_individual, CollectiveMedalRow,
    CountryRankingRow, IndividualMedalRow, TopIndividualRow,
};
use crate::store::EntityStore;

/// Default row count for the two ranking views.
pub const DEFAULT_TOP: usize = 10;

/// Shareable, read-only query facade over a loaded dataset.
#[derive(Debug, Clone)]
pub struct QueryService {
    store: Arc<EntityStore>,
    index: Arc<RelationshipIndex>,
}

fn select<T: Clone>(items: &[T], found: Option<&T>, id: Option<EntityId>) -> Vec<T> {
    match id {
        Some(_) => found.cloned().into_iter().collect(),
        None => items.to_vec(),
    }
}

impl QueryService {
    /// Builds the facade from a validated store, constructing the
    /// relationship index once.
    pub fn new(store: EntityStore) -> Self {
        let index = RelationshipIndex::build(&store);
        Self {
            store: Arc::new(store),
            index: Arc::new(index),
        }
    }

    /// The underlying store, for callers that need raw lookups.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    // ==================
    // Entity accessors
    // ==================

    pub fn countries(&self, id: Option<EntityId>) -> Vec<Country> {
        select(
            self.store.countries(),
            id.and_then(|id| self.store.country(id)),
            id,
        )
    }

    pub fn athletes(&self, id: Option<EntityId>) -> Vec<Athlete> {
        select(
            self.store.athletes(),
            id.and_then(|id| self.store.athlete(id)),
            id,
        )
    }

    pub fn teams(&self, id: Option<EntityId>) -> Vec<Team> {
        select(
            self.store.teams(),
            id.and_then(|id| self.store.team(id)),
            id,
        )
    }

    pub fn disciplines(&self, id: Option<EntityId>) -> Vec<Discipline> {
        select(
            self.store.disciplines(),
            id.and_then(|id| self.store.discipline(id)),
            id,
        )
    }

    pub fn events(&self, id: Option<EntityId>) -> Vec<Event> {
        select(
            self.store.events(),
            id.and_then(|id| self.store.event(id)),
            id,
        )
    }

    pub fn medals(&self, id: Option<EntityId>) -> Vec<Medal> {
        select(
            self.store.medals(),
            id.and_then(|id| self.store.medal(id)),
            id,
        )
    }

    // ==================
    // Aggregate views
    // ==================

    /// Country medal ranking, best countries first.
    pub fn top_countries(&self, top: usize) -> Vec<CountryRankingRow> {
        country_ranking(&self.store, &self.index, top)
    }

    /// Team-held medals, optionally narrowed to one team.
    pub fn collective_medals(&self, team_id: Option<EntityId>) -> Vec<CollectiveMedalRow> {
        collective_medals(&self.store, &self.index, team_id)
    }

    /// Athlete-held medals, optionally narrowed to one athlete.
    pub fn individual_medals(&self, athlete_id: Option<EntityId>) -> Vec<IndividualMedalRow> {
        individual_medals(&self.store, &self.index, athlete_id)
    }

    /// Athlete medal-count ranking for individual events.
    pub fn top_individual(&self, top: usize) -> Vec<TopIndividualRow> {
        top_individual(&self.store, &self.index, top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use serde_json::json;

    fn service() -> QueryService {
        let dataset: Dataset = serde_json::from_value(json!({
            "countries": [{"id": 1, "name": "USA"}, {"id": 2, "name": "France"}],
            "athletes": [
                {"id": 1, "name": "Alice", "gender": "F", "country_id": 1}
            ],
            "teams": [],
            "disciplines": [{"id": 1, "name": "Athletics"}],
            "events": [{"id": 1, "name": "100m", "discipline_id": 1}],
            "medals": [
                {"id": 1, "event_id": 1, "type": "gold",
                 "date": "2021-01-01", "athlete_id": 1}
            ]
        }))
        .unwrap();
        QueryService::new(EntityStore::new(dataset))
    }

    #[test]
    fn test_accessor_without_id_scans_all() {
        let svc = service();
        assert_eq!(svc.countries(None).len(), 2);
        assert_eq!(svc.medals(None).len(), 1);
    }

    #[test]
    fn test_accessor_with_id_narrows() {
        let svc = service();
        let hit = svc.countries(Some(2));
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].name, "France");
    }

    #[test]
    fn test_accessor_with_unknown_id_is_empty() {
        let svc = service();
        assert!(svc.countries(Some(99)).is_empty());
        // Id 0 is provided-but-matching-nothing, not "absent".
        assert!(svc.countries(Some(0)).is_empty());
    }

    #[test]
    fn test_aggregates_flow_through() {
        let svc = service();
        let ranking = svc.top_countries(DEFAULT_TOP);
        assert_eq!(ranking[0].country, "USA");
        assert_eq!(ranking[0].gold, 1);

        assert_eq!(svc.individual_medals(None).len(), 1);
        assert!(svc.collective_medals(None).is_empty());
        assert_eq!(svc.top_individual(DEFAULT_TOP).len(), 1);
    }

    #[test]
    fn test_clone_shares_snapshot() {
        let svc = service();
        let clone = svc.clone();
        assert_eq!(
            svc.top_countries(DEFAULT_TOP),
            clone.top_countries(DEFAULT_TOP)
        );
    }
}

//! Reverse-direction adjacency maps
//!
//! Built once from the store, read-only afterwards. Keys are foreign
//! key values as they appear in the data; a key only yields results
//! when the owning entity also exists, so dangling references fall out
//! naturally at traversal time.
//!
//! Adjacency lists preserve load order, which keeps every traversal
//! deterministic.

use std::collections::HashMap;

use crate::model::EntityId;
use crate::store::EntityStore;

/// Adjacency index linking countries, athletes, teams and medals.
#[derive(Debug)]
pub struct RelationshipIndex {
    medals_by_athlete: HashMap<EntityId, Vec<EntityId>>,
    medals_by_team: HashMap<EntityId, Vec<EntityId>>,
    athletes_by_country: HashMap<EntityId, Vec<EntityId>>,
    teams_by_country: HashMap<EntityId, Vec<EntityId>>,
}

impl RelationshipIndex {
    /// Builds the adjacency maps from the store.
    pub fn build(store: &EntityStore) -> Self {
        let mut medals_by_athlete: HashMap<EntityId, Vec<EntityId>> = HashMap::new();
        let mut medals_by_team: HashMap<EntityId, Vec<EntityId>> = HashMap::new();
        let mut athletes_by_country: HashMap<EntityId, Vec<EntityId>> = HashMap::new();
        let mut teams_by_country: HashMap<EntityId, Vec<EntityId>> = HashMap::new();

        for medal in store.medals() {
            if let Some(athlete_id) = medal.athlete_id {
                medals_by_athlete.entry(athlete_id).or_default().push(medal.id);
            }
            if let Some(team_id) = medal.team_id {
                medals_by_team.entry(team_id).or_default().push(medal.id);
            }
        }

        for athlete in store.athletes() {
            if let Some(country_id) = athlete.country_id {
                athletes_by_country
                    .entry(country_id)
                    .or_default()
                    .push(athlete.id);
            }
        }

        for team in store.teams() {
            if let Some(country_id) = team.country_id {
                teams_by_country.entry(country_id).or_default().push(team.id);
            }
        }

        Self {
            medals_by_athlete,
            medals_by_team,
            athletes_by_country,
            teams_by_country,
        }
    }

    /// Medal ids held by an athlete, in load order.
    pub fn medals_of_athlete(&self, athlete_id: EntityId) -> &[EntityId] {
        self.medals_by_athlete
            .get(&athlete_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Medal ids held by a team, in load order.
    pub fn medals_of_team(&self, team_id: EntityId) -> &[EntityId] {
        self.medals_by_team
            .get(&team_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Athlete ids affiliated with a country, in load order.
    pub fn athletes_of_country(&self, country_id: EntityId) -> &[EntityId] {
        self.athletes_by_country
            .get(&country_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Team ids affiliated with a country, in load order.
    pub fn teams_of_country(&self, country_id: EntityId) -> &[EntityId] {
        self.teams_by_country
            .get(&country_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use serde_json::json;

    fn build_index() -> (EntityStore, RelationshipIndex) {
        let dataset: Dataset = serde_json::from_value(json!({
            "countries": [{"id": 1, "name": "USA"}, {"id": 2, "name": "France"}],
            "athletes": [
                {"id": 1, "name": "Alice", "gender": "F", "country_id": 1},
                {"id": 2, "name": "Bob", "gender": "M", "country_id": 1},
                {"id": 3, "name": "Chloe", "gender": "F"}
            ],
            "teams": [{"id": 1, "name": "USA Relay", "country_id": 1}],
            "disciplines": [{"id": 1, "name": "Athletics"}],
            "events": [{"id": 1, "name": "100m", "discipline_id": 1}],
            "medals": [
                {"id": 1, "event_id": 1, "type": "gold",
                 "date": "2021-01-01", "athlete_id": 1},
                {"id": 2, "event_id": 1, "type": "silver",
                 "date": "2021-01-02", "athlete_id": 1},
                {"id": 3, "event_id": 1, "type": "bronze",
                 "date": "2021-01-03", "team_id": 1}
            ]
        }))
        .unwrap();
        let store = EntityStore::new(dataset);
        let index = RelationshipIndex::build(&store);
        (store, index)
    }

    #[test]
    fn test_medals_of_athlete_in_load_order() {
        let (_store, index) = build_index();
        assert_eq!(index.medals_of_athlete(1), &[1, 2]);
        assert_eq!(index.medals_of_athlete(2), &[] as &[EntityId]);
    }

    #[test]
    fn test_medals_of_team() {
        let (_store, index) = build_index();
        assert_eq!(index.medals_of_team(1), &[3]);
        assert_eq!(index.medals_of_team(9), &[] as &[EntityId]);
    }

    #[test]
    fn test_country_adjacency_skips_unaffiliated() {
        let (_store, index) = build_index();
        // Chloe has no country and appears under no key.
        assert_eq!(index.athletes_of_country(1), &[1, 2]);
        assert_eq!(index.athletes_of_country(2), &[] as &[EntityId]);
        assert_eq!(index.teams_of_country(1), &[1]);
    }
}

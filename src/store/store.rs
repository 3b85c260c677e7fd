//! In-memory entity store
//!
//! Contract per component design:
//! - scan-all returns the collection in load order
//! - lookup-by-id returns `Option<&T>`; a non-matching id (including
//!   0, which is never assigned) is simply absent, not an error
//!
//! Lookups go through per-collection hash maps from id to position,
//! built once at construction. Id uniqueness is guaranteed by the
//! dataset validator before the store is built.

use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::model::{
    Athlete, Country, Discipline, EntityId, EntityKind, Event, Medal, Team,
};

/// Immutable store over the six entity collections.
#[derive(Debug)]
pub struct EntityStore {
    countries: Vec<Country>,
    athletes: Vec<Athlete>,
    teams: Vec<Team>,
    disciplines: Vec<Discipline>,
    events: Vec<Event>,
    medals: Vec<Medal>,

    countries_by_id: HashMap<EntityId, usize>,
    athletes_by_id: HashMap<EntityId, usize>,
    teams_by_id: HashMap<EntityId, usize>,
    disciplines_by_id: HashMap<EntityId, usize>,
    events_by_id: HashMap<EntityId, usize>,
    medals_by_id: HashMap<EntityId, usize>,
}

fn index_by_id<T>(items: &[T], id_of: impl Fn(&T) -> EntityId) -> HashMap<EntityId, usize> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| (id_of(item), position))
        .collect()
}

impl EntityStore {
    /// Builds the store from a validated dataset.
    pub fn new(dataset: Dataset) -> Self {
        let countries_by_id = index_by_id(&dataset.countries, |c| c.id);
        let athletes_by_id = index_by_id(&dataset.athletes, |a| a.id);
        let teams_by_id = index_by_id(&dataset.teams, |t| t.id);
        let disciplines_by_id = index_by_id(&dataset.disciplines, |d| d.id);
        let events_by_id = index_by_id(&dataset.events, |e| e.id);
        let medals_by_id = index_by_id(&dataset.medals, |m| m.id);

        Self {
            countries: dataset.countries,
            athletes: dataset.athletes,
            teams: dataset.teams,
            disciplines: dataset.disciplines,
            events: dataset.events,
            medals: dataset.medals,
            countries_by_id,
            athletes_by_id,
            teams_by_id,
            disciplines_by_id,
            events_by_id,
            medals_by_id,
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country(&self, id: EntityId) -> Option<&Country> {
        self.countries_by_id.get(&id).map(|&i| &self.countries[i])
    }

    pub fn athletes(&self) -> &[Athlete] {
        &self.athletes
    }

    pub fn athlete(&self, id: EntityId) -> Option<&Athlete> {
        self.athletes_by_id.get(&id).map(|&i| &self.athletes[i])
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: EntityId) -> Option<&Team> {
        self.teams_by_id.get(&id).map(|&i| &self.teams[i])
    }

    pub fn disciplines(&self) -> &[Discipline] {
        &self.disciplines
    }

    pub fn discipline(&self, id: EntityId) -> Option<&Discipline> {
        self.disciplines_by_id
            .get(&id)
            .map(|&i| &self.disciplines[i])
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn event(&self, id: EntityId) -> Option<&Event> {
        self.events_by_id.get(&id).map(|&i| &self.events[i])
    }

    pub fn medals(&self) -> &[Medal] {
        &self.medals
    }

    pub fn medal(&self, id: EntityId) -> Option<&Medal> {
        self.medals_by_id.get(&id).map(|&i| &self.medals[i])
    }

    /// Number of records of a given kind.
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Country => self.countries.len(),
            EntityKind::Athlete => self.athletes.len(),
            EntityKind::Team => self.teams.len(),
            EntityKind::Discipline => self.disciplines.len(),
            EntityKind::Event => self.events.len(),
            EntityKind::Medal => self.medals.len(),
        }
    }
}

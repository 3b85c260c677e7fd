//! Entity type definitions
//!
//! All entities derive Serialize/Deserialize and are plain data: no
//! behavior beyond small accessors. References between entities are
//! carried as raw ids and resolved through the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity identifier. Ids are positive; 0 never matches anything.
pub type EntityId = u32;

/// The six entity kinds held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Country,
    Athlete,
    Team,
    Discipline,
    Event,
    Medal,
}

impl EntityKind {
    /// Returns the plural collection name used in the dataset file
    /// and in protocol operations.
    pub fn collection_name(&self) -> &'static str {
        match self {
            EntityKind::Country => "countries",
            EntityKind::Athlete => "athletes",
            EntityKind::Team => "teams",
            EntityKind::Discipline => "disciplines",
            EntityKind::Event => "events",
            EntityKind::Medal => "medals",
        }
    }

    /// Parses a collection name back into a kind.
    pub fn from_collection_name(name: &str) -> Option<Self> {
        match name {
            "countries" => Some(EntityKind::Country),
            "athletes" => Some(EntityKind::Athlete),
            "teams" => Some(EntityKind::Team),
            "disciplines" => Some(EntityKind::Discipline),
            "events" => Some(EntityKind::Event),
            "medals" => Some(EntityKind::Medal),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.collection_name())
    }
}

/// Athlete gender. The source data does not constrain values, so any
/// unrecognized string maps to `Other` instead of failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            _ => Gender::Other,
        }
    }
}

/// Medal type. Unlike gender this is a closed set: anything else in
/// the dataset is a malformed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedalKind {
    Gold,
    Silver,
    Bronze,
}

impl MedalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedalKind::Gold => "gold",
            MedalKind::Silver => "silver",
            MedalKind::Bronze => "bronze",
        }
    }
}

impl fmt::Display for MedalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: EntityId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: EntityId,
    pub name: String,
    pub gender: Gender,
    /// An athlete may compete without a national affiliation.
    #[serde(default)]
    pub country_id: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub country_id: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discipline {
    pub id: EntityId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EntityId,
    pub name: String,
    pub discipline_id: EntityId,
}

/// Who holds a medal: an individual athlete or a team, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedalHolder {
    Athlete(EntityId),
    Team(EntityId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medal {
    pub id: EntityId,
    pub event_id: EntityId,
    #[serde(rename = "type")]
    pub kind: MedalKind,
    pub date: NaiveDate,
    #[serde(default)]
    pub athlete_id: Option<EntityId>,
    #[serde(default)]
    pub team_id: Option<EntityId>,
}

impl Medal {
    /// Resolves the holder of this medal.
    ///
    /// Returns `None` when the exactly-one-of invariant is violated
    /// (both or neither of athlete_id/team_id set). The loader rejects
    /// such records, so after a successful load this is always `Some`.
    pub fn holder(&self) -> Option<MedalHolder> {
        match (self.athlete_id, self.team_id) {
            (Some(athlete_id), None) => Some(MedalHolder::Athlete(athlete_id)),
            (None, Some(team_id)) => Some(MedalHolder::Team(team_id)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gender_maps_unconstrained_values() {
        assert_eq!(Gender::from("F".to_string()), Gender::Female);
        assert_eq!(Gender::from("male".to_string()), Gender::Male);
        assert_eq!(Gender::from("nonbinary".to_string()), Gender::Other);
    }

    #[test]
    fn test_gender_deserializes_from_short_form() {
        let athlete: Athlete = serde_json::from_value(json!({
            "id": 1,
            "name": "Alice",
            "gender": "F",
            "country_id": 1
        }))
        .unwrap();
        assert_eq!(athlete.gender, Gender::Female);
    }

    #[test]
    fn test_medal_kind_is_closed_set() {
        let result: Result<MedalKind, _> = serde_json::from_value(json!("platinum"));
        assert!(result.is_err());
        let kind: MedalKind = serde_json::from_value(json!("gold")).unwrap();
        assert_eq!(kind, MedalKind::Gold);
    }

    #[test]
    fn test_medal_type_field_name() {
        let medal: Medal = serde_json::from_value(json!({
            "id": 1,
            "event_id": 2,
            "type": "silver",
            "date": "2021-07-24",
            "athlete_id": 3
        }))
        .unwrap();
        assert_eq!(medal.kind, MedalKind::Silver);
        assert_eq!(medal.team_id, None);

        let back = serde_json::to_value(&medal).unwrap();
        assert_eq!(back["type"], "silver");
        assert_eq!(back["date"], "2021-07-24");
    }

    #[test]
    fn test_medal_holder_exclusivity() {
        let mut medal: Medal = serde_json::from_value(json!({
            "id": 1,
            "event_id": 2,
            "type": "gold",
            "date": "2021-01-01",
            "team_id": 7
        }))
        .unwrap();
        assert_eq!(medal.holder(), Some(MedalHolder::Team(7)));

        medal.athlete_id = Some(3);
        assert_eq!(medal.holder(), None);

        medal.team_id = None;
        assert_eq!(medal.holder(), Some(MedalHolder::Athlete(3)));

        medal.athlete_id = None;
        assert_eq!(medal.holder(), None);
    }

    #[test]
    fn test_entity_kind_collection_names_round_trip() {
        for kind in [
            EntityKind::Country,
            EntityKind::Athlete,
            EntityKind::Team,
            EntityKind::Discipline,
            EntityKind::Event,
            EntityKind::Medal,
        ] {
            assert_eq!(
                EntityKind::from_collection_name(kind.collection_name()),
                Some(kind)
            );
        }
        assert_eq!(EntityKind::from_collection_name("referees"), None);
    }
}

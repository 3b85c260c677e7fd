//! Entity model for the Olympic results dataset
//!
//! Six entity kinds, all immutable after load:
//! - Country, Athlete, Team, Discipline, Event, Medal
//!
//! Identity is a positive integer id, unique within its collection,
//! assigned at data-load time.

mod types;

pub use types::{
    Athlete, Country, Discipline, EntityId, EntityKind, Event, Gender, Medal, MedalHolder,
    MedalKind, Team,
};

//! Aggregation engine for the four derived views
//!
//! Pure, deterministic reductions over the store and relationship
//! index. Nothing in this module performs I/O or returns errors:
//! unknown filter ids produce empty results by design, and argument
//! validation happens at the boundary layers.

mod engine;
mod result;

pub use engine::{collective_medals, country_ranking, individual_medals, top_individual};
pub use result::{CollectiveMedalRow, CountryRankingRow, IndividualMedalRow, TopIndividualRow};

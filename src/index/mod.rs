//! Relationship index
//!
//! Precomputed adjacency over the entity store, covering the reverse
//! directions the aggregation engine needs (from a country back to its
//! athletes, teams and their medals). Forward references resolve
//! through the store's id lookups.

mod relations;

pub use relations::RelationshipIndex;

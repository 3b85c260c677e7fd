//! Entity store
//!
//! Immutable snapshot of the six entity collections, built once from a
//! validated dataset. Safe to share across concurrent readers behind
//! an `Arc`; nothing mutates it after construction.

mod store;

pub use store::EntityStore;

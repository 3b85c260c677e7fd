//! Store Invariant Tests
//!
//! Per-entity accessor properties:
//! - An id-narrowed scan is a subset of the full scan
//! - Unknown ids (including 0) yield empty results, never errors
//! - Repeated reads return identical results

use podium::dataset::Dataset;
use podium::model::EntityKind;
use podium::service::QueryService;
use podium::store::EntityStore;
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn fixture() -> QueryService {
    let dataset: Dataset = serde_json::from_value(json!({
        "countries": [
            {"id": 1, "name": "USA"},
            {"id": 2, "name": "France"},
            {"id": 3, "name": "Norway"}
        ],
        "athletes": [
            {"id": 1, "name": "Alice", "gender": "F", "country_id": 1},
            {"id": 2, "name": "Bernard", "gender": "M", "country_id": 2}
        ],
        "teams": [{"id": 1, "name": "USA Relay", "country_id": 1}],
        "disciplines": [{"id": 1, "name": "Athletics"}],
        "events": [
            {"id": 1, "name": "100m", "discipline_id": 1},
            {"id": 2, "name": "4x100m", "discipline_id": 1}
        ],
        "medals": [
            {"id": 1, "event_id": 1, "type": "gold",
             "date": "2021-07-31", "athlete_id": 1},
            {"id": 2, "event_id": 2, "type": "bronze",
             "date": "2021-08-06", "team_id": 1}
        ]
    }))
    .unwrap();
    QueryService::new(EntityStore::new(dataset))
}

// =============================================================================
// Subset Property
// =============================================================================

#[test]
fn test_id_scan_is_subset_of_full_scan() {
    let service = fixture();

    for country in service.countries(None) {
        let narrowed = service.countries(Some(country.id));
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0], country);
    }

    for medal in service.medals(None) {
        let narrowed = service.medals(Some(medal.id));
        assert_eq!(narrowed, vec![medal]);
    }
}

#[test]
fn test_unknown_id_yields_empty() {
    let service = fixture();
    assert!(service.countries(Some(999)).is_empty());
    assert!(service.athletes(Some(999)).is_empty());
    assert!(service.teams(Some(999)).is_empty());
    assert!(service.disciplines(Some(999)).is_empty());
    assert!(service.events(Some(999)).is_empty());
    assert!(service.medals(Some(999)).is_empty());
}

#[test]
fn test_id_zero_is_provided_and_matches_nothing() {
    let service = fixture();
    // Not "absent parameter": a real lookup that finds nothing.
    assert!(service.countries(Some(0)).is_empty());
    assert_eq!(service.countries(None).len(), 3);
}

// =============================================================================
// Store Counts
// =============================================================================

#[test]
fn test_store_counts_match_scan_lengths() {
    let service = fixture();
    let store = service.store();

    assert_eq!(store.count(EntityKind::Country), service.countries(None).len());
    assert_eq!(store.count(EntityKind::Athlete), service.athletes(None).len());
    assert_eq!(store.count(EntityKind::Team), service.teams(None).len());
    assert_eq!(
        store.count(EntityKind::Discipline),
        service.disciplines(None).len()
    );
    assert_eq!(store.count(EntityKind::Event), service.events(None).len());
    assert_eq!(store.count(EntityKind::Medal), service.medals(None).len());
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_repeated_reads_are_identical() {
    let service = fixture();
    let first = service.athletes(None);
    for _ in 0..10 {
        assert_eq!(service.athletes(None), first);
    }
}

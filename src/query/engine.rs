//! Aggregation engine
//!
//! The four derived views over the dataset. Each operation is a pure
//! function of `(store, index)` plus a filter or limit parameter:
//! same inputs, same output, every time.
//!
//! Join semantics are fixed per view and must not drift:
//! - country_ranking: OUTER, every country appears, zero-filled
//! - collective_medals / individual_medals: INNER, a row exists only
//!   when the whole join chain resolves
//! - top_individual: INNER, grouped by (athlete name, country name)
//!
//! Limits are explicit row counts. A limit of 0 returns no rows.

use std::collections::BTreeMap;

use crate::index::RelationshipIndex;
use crate::model::{EntityId, Medal, MedalKind};
use crate::store::EntityStore;

use super::result::{
    CollectiveMedalRow, CountryRankingRow, IndividualMedalRow, TopIndividualRow,
};

/// Running gold/silver/bronze tally for one country.
#[derive(Debug, Default, Clone, Copy)]
struct MedalTally {
    gold: u64,
    silver: u64,
    bronze: u64,
}

impl MedalTally {
    fn add(&mut self, kind: MedalKind) {
        match kind {
            MedalKind::Gold => self.gold += 1,
            MedalKind::Silver => self.silver += 1,
            MedalKind::Bronze => self.bronze += 1,
        }
    }
}

/// Medal count ranking of countries.
///
/// Every country appears, zero-medal countries included. Each medal
/// counts exactly once, through its single nationality path: the
/// holder athlete's country for individual medals, the holder team's
/// country for collective medals.
///
/// Rows sort descending by (gold, silver, bronze), exact ties broken
/// by country name ascending so output is deterministic. The first
/// `limit` rows are returned.
pub fn country_ranking(
    store: &EntityStore,
    index: &RelationshipIndex,
    limit: usize,
) -> Vec<CountryRankingRow> {
    let mut rows: Vec<CountryRankingRow> = store
        .countries()
        .iter()
        .map(|country| {
            let mut tally = MedalTally::default();

            for &athlete_id in index.athletes_of_country(country.id) {
                for &medal_id in index.medals_of_athlete(athlete_id) {
                    if let Some(medal) = store.medal(medal_id) {
                        tally.add(medal.kind);
                    }
                }
            }

            for &team_id in index.teams_of_country(country.id) {
                for &medal_id in index.medals_of_team(team_id) {
                    if let Some(medal) = store.medal(medal_id) {
                        tally.add(medal.kind);
                    }
                }
            }

            CountryRankingRow {
                country: country.name.clone(),
                gold: tally.gold,
                silver: tally.silver,
                bronze: tally.bronze,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        (b.gold, b.silver, b.bronze)
            .cmp(&(a.gold, a.silver, a.bronze))
            .then_with(|| a.country.cmp(&b.country))
    });
    rows.truncate(limit);
    rows
}

/// Joins one team-held medal out to its names. `None` when any link
/// in the chain is missing.
fn collective_row(store: &EntityStore, medal: &Medal) -> Option<CollectiveMedalRow> {
    let team = store.team(medal.team_id?)?;
    let country = store.country(team.country_id?)?;
    let event = store.event(medal.event_id)?;
    let discipline = store.discipline(event.discipline_id)?;

    Some(CollectiveMedalRow {
        country: country.name.clone(),
        discipline: discipline.name.clone(),
        event: event.name.clone(),
        kind: medal.kind,
        date: medal.date,
    })
}

/// Medals held by teams, joined out to country, discipline and event.
///
/// Inner join: a medal appears only when its team, the team's country,
/// its event and the event's discipline all resolve. With `team_id`
/// set, only that team's medals appear; an unknown team id yields an
/// empty result. Rows appear in medal load order.
pub fn collective_medals(
    store: &EntityStore,
    index: &RelationshipIndex,
    team_id: Option<EntityId>,
) -> Vec<CollectiveMedalRow> {
    match team_id {
        Some(filter) => index
            .medals_of_team(filter)
            .iter()
            .filter_map(|&medal_id| store.medal(medal_id))
            .filter_map(|medal| collective_row(store, medal))
            .collect(),
        None => store
            .medals()
            .iter()
            .filter(|medal| medal.team_id.is_some())
            .filter_map(|medal| collective_row(store, medal))
            .collect(),
    }
}

fn individual_row(
    store: &EntityStore,
    medal: &Medal,
) -> Option<IndividualMedalRow> {
    let athlete = store.athlete(medal.athlete_id?)?;
    let country = store.country(athlete.country_id?)?;
    let event = store.event(medal.event_id)?;
    let discipline = store.discipline(event.discipline_id)?;

    Some(IndividualMedalRow {
        athlete: athlete.name.clone(),
        country: country.name.clone(),
        discipline: discipline.name.clone(),
        event: event.name.clone(),
        kind: medal.kind,
        date: medal.date,
    })
}

/// Medals held by individual athletes, joined out to athlete, country,
/// discipline and event.
///
/// Inner join: athletes without a national affiliation are excluded,
/// as are medals whose event/discipline chain is broken. With
/// `athlete_id` set, only that athlete's medals appear.
pub fn individual_medals(
    store: &EntityStore,
    index: &RelationshipIndex,
    athlete_id: Option<EntityId>,
) -> Vec<IndividualMedalRow> {
    match athlete_id {
        Some(filter) => index
            .medals_of_athlete(filter)
            .iter()
            .filter_map(|&medal_id| store.medal(medal_id))
            .filter_map(|medal| individual_row(store, medal))
            .collect(),
        None => store
            .medals()
            .iter()
            .filter(|medal| medal.athlete_id.is_some())
            .filter_map(|medal| individual_row(store, medal))
            .collect(),
    }
}

/// Medal count ranking of athletes for individual events.
///
/// Groups athlete-held medals by (athlete name, country name): by
/// NAME, not id, so two distinct athletes sharing both collapse into
/// one row. That is the specified behavior, kept as-is.
///
/// Rows sort descending by count; exact ties keep (name, country)
/// ascending order. The first `limit` rows are returned.
pub fn top_individual(
    store: &EntityStore,
    index: &RelationshipIndex,
    limit: usize,
) -> Vec<TopIndividualRow> {
    // BTreeMap keeps groups in (name, country) order; the stable sort
    // below preserves that order among equal counts.
    let mut counts: BTreeMap<(String, String), u64> = BTreeMap::new();

    for athlete in store.athletes() {
        let country = match athlete.country_id.and_then(|id| store.country(id)) {
            Some(c) => c,
            None => continue,
        };
        let held = index.medals_of_athlete(athlete.id).len() as u64;
        if held == 0 {
            continue;
        }
        *counts
            .entry((athlete.name.clone(), country.name.clone()))
            .or_insert(0) += held;
    }

    let mut rows: Vec<TopIndividualRow> = counts
        .into_iter()
        .map(|((athlete, country), medals)| TopIndividualRow {
            athlete,
            country,
            medals,
        })
        .collect();

    rows.sort_by(|a, b| b.medals.cmp(&a.medals));
    rows.truncate(limit);
    rows
}

//! Aggregation result rows
//!
//! Flat, serializable rows produced by the aggregation engine. Field
//! names match the wire format; the medal kind serializes as `type`
//! like the entity it came from.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::MedalKind;

/// One row of the country medal ranking.
///
/// Present for every country, including countries with zero medals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRankingRow {
    pub country: String,
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
}

/// One team-held medal, joined out to its country, discipline and
/// event names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectiveMedalRow {
    pub country: String,
    pub discipline: String,
    pub event: String,
    #[serde(rename = "type")]
    pub kind: MedalKind,
    pub date: NaiveDate,
}

/// One athlete-held medal, joined out to athlete, country, discipline
/// and event names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualMedalRow {
    pub athlete: String,
    pub country: String,
    pub discipline: String,
    pub event: String,
    #[serde(rename = "type")]
    pub kind: MedalKind,
    pub date: NaiveDate,
}

/// One row of the top-individual ranking: total medals per
/// (athlete name, country name) group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopIndividualRow {
    pub athlete: String,
    pub country: String,
    pub medals: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medal_rows_serialize_kind_as_type() {
        let row = CollectiveMedalRow {
            country: "USA".to_string(),
            discipline: "Athletics".to_string(),
            event: "4x100m".to_string(),
            kind: MedalKind::Gold,
            date: NaiveDate::from_ymd_opt(2021, 8, 6).unwrap(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["type"], "gold");
        assert_eq!(value["date"], "2021-08-06");
        assert!(value.get("kind").is_none());
    }
}

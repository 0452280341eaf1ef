use std::collections::HashMap;

use serde::Serialize;

use crate::match_data::MatchRecord;
use crate::penalty::PenaltyAggregate;

pub const OUTPUT_COLUMNS: [&str; 10] = [
    "Season",
    "HomeTeam",
    "AwayTeam",
    "HomeGoals",
    "AwayGoals",
    "Result",
    "home_pk_scored",
    "home_pk_awarded",
    "away_pk_scored",
    "away_pk_awarded",
];

/// One output record of the season dataset. Field order matches the fixed
/// output column order, which the CSV writer derives from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonRow {
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "HomeTeam")]
    pub home_team: String,
    #[serde(rename = "AwayTeam")]
    pub away_team: String,
    #[serde(rename = "HomeGoals")]
    pub home_goals: String,
    #[serde(rename = "AwayGoals")]
    pub away_goals: String,
    #[serde(rename = "Result")]
    pub result: String,
    pub home_pk_scored: u32,
    pub home_pk_awarded: u32,
    pub away_pk_scored: u32,
    pub away_pk_awarded: u32,
}

/// Left join match rows against penalty aggregates on (home, away). Every
/// match row survives; pairs absent from the aggregates get zero counters.
/// An empty aggregate table goes through the same lookup, so "no penalty
/// data" and "penalty log with no events" produce identical output.
pub fn combine_season(
    season: &str,
    matches: &[MatchRecord],
    aggregates: &[PenaltyAggregate],
) -> Vec<SeasonRow> {
    let by_pair: HashMap<(&str, &str), &PenaltyAggregate> = aggregates
        .iter()
        .map(|a| ((a.home_team.as_str(), a.away_team.as_str()), a))
        .collect();

    matches
        .iter()
        .map(|m| {
            let pens = by_pair
                .get(&(m.home_team.as_str(), m.away_team.as_str()))
                .copied();
            SeasonRow {
                season: season.to_string(),
                home_team: m.home_team.clone(),
                away_team: m.away_team.clone(),
                home_goals: m.home_goals.clone(),
                away_goals: m.away_goals.clone(),
                result: m.result.clone(),
                home_pk_scored: pens.map_or(0, |p| p.home_pk_scored),
                home_pk_awarded: pens.map_or(0, |p| p.home_pk_awarded),
                away_pk_scored: pens.map_or(0, |p| p.away_pk_scored),
                away_pk_awarded: pens.map_or(0, |p| p.away_pk_awarded),
            }
        })
        .collect()
}

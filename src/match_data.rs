use crate::error::Result;
use crate::schema::{self, ColumnAliases};

pub const CANONICAL_COLUMNS: [&str; 5] =
    ["HomeTeam", "AwayTeam", "HomeGoals", "AwayGoals", "Result"];

/// A raw CSV table as handed over by the source collaborator: header row
/// plus string cells, no typing applied.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One row of the canonical five-column match table. Goal and result values
/// stay as the source text; numeric interpretation is the consumer's call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub home_team: String,
    pub away_team: String,
    pub home_goals: String,
    pub away_goals: String,
    pub result: String,
}

/// Project a raw match table onto the canonical shape, resolving the
/// goal/result columns through their historical aliases. No rows are
/// filtered and no values are coerced.
pub fn normalize_match_table(
    table: &RawTable,
    aliases: &ColumnAliases,
) -> Result<Vec<MatchRecord>> {
    let home_team = schema::resolve_column(&table.columns, "home team", &["HomeTeam"])?;
    let away_team = schema::resolve_column(&table.columns, "away team", &["AwayTeam"])?;
    let home_goals = schema::resolve_column(&table.columns, "home goals", &aliases.home_goals)?;
    let away_goals = schema::resolve_column(&table.columns, "away goals", &aliases.away_goals)?;
    let result = schema::resolve_column(&table.columns, "result", &aliases.result)?;

    let mut out = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        out.push(MatchRecord {
            home_team: cell(row, home_team),
            away_team: cell(row, away_team),
            home_goals: cell(row, home_goals),
            away_goals: cell(row, away_goals),
            result: cell(row, result),
        });
    }
    Ok(out)
}

fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}

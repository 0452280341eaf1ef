use std::collections::BTreeMap;

use crate::error::Result;
use crate::match_text::split_match_descriptor;

// Positional layout of the headerless penalty export.
pub const PK_TEAM_COL: usize = 4;
pub const MATCH_COL: usize = 5;
pub const OUTCOME_COL: usize = 7;

const MIN_COLUMNS: usize = 8;
pub const SCORED_OUTCOME: &str = "Scored";

/// Per-match penalty counters, one row per (home, away) pair seen in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PenaltyAggregate {
    pub home_team: String,
    pub away_team: String,
    pub home_pk_scored: u32,
    pub home_pk_awarded: u32,
    pub away_pk_scored: u32,
    pub away_pk_awarded: u32,
}

/// Aggregation result plus diagnostics. `unattributed` counts rows whose
/// kicking team matched neither side of the descriptor; they contribute to
/// no counter but are surfaced instead of vanishing.
#[derive(Debug, Clone, Default)]
pub struct PenaltyAggregation {
    pub aggregates: Vec<PenaltyAggregate>,
    pub rows_used: usize,
    pub rows_dropped: usize,
    pub unattributed: usize,
    pub warnings: Vec<String>,
}

/// Collapse a raw per-event penalty log into per-match counters.
///
/// A table too narrow to hold the outcome column is structurally
/// incompatible: it yields an empty aggregation with a warning rather than
/// failing the season. An unparseable match descriptor aborts the whole
/// file, which the driver downgrades to zero-penalty treatment.
pub fn aggregate_penalty_rows(rows: &[Vec<String>]) -> Result<PenaltyAggregation> {
    let mut agg = PenaltyAggregation::default();
    if rows.is_empty() {
        return Ok(agg);
    }

    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    if width < MIN_COLUMNS {
        agg.warnings.push(format!(
            "penalty table has {width} columns, need at least {MIN_COLUMNS}; ignoring file"
        ));
        return Ok(agg);
    }

    // Counters per pair: [home scored, home awarded, away scored, away awarded].
    let mut groups: BTreeMap<(String, String), [u32; 4]> = BTreeMap::new();

    for row in rows {
        let (Some(pk_team), Some(descriptor), Some(outcome)) = (
            field(row, PK_TEAM_COL),
            field(row, MATCH_COL),
            field(row, OUTCOME_COL),
        ) else {
            agg.rows_dropped += 1;
            continue;
        };

        let (home_team, away_team) = split_match_descriptor(descriptor)?;
        agg.rows_used += 1;

        let scored = u32::from(outcome == SCORED_OUTCOME);
        let counters = groups.entry((home_team.clone(), away_team.clone())).or_default();
        if pk_team == home_team {
            counters[0] += scored;
            counters[1] += 1;
        } else if pk_team == away_team {
            counters[2] += scored;
            counters[3] += 1;
        } else {
            agg.unattributed += 1;
        }
    }

    agg.aggregates = groups
        .into_iter()
        .map(|((home_team, away_team), c)| PenaltyAggregate {
            home_team,
            away_team,
            home_pk_scored: c[0],
            home_pk_awarded: c[1],
            away_pk_scored: c[2],
            away_pk_awarded: c[3],
        })
        .collect();
    Ok(agg)
}

fn field(row: &[String], idx: usize) -> Option<&str> {
    match row.get(idx) {
        Some(v) if !v.is_empty() => Some(v.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pk_team: &str, descriptor: &str, outcome: &str) -> Vec<String> {
        let mut cells = vec![String::new(); 9];
        cells[PK_TEAM_COL] = pk_team.to_string();
        cells[MATCH_COL] = descriptor.to_string();
        cells[OUTCOME_COL] = outcome.to_string();
        cells
    }

    #[test]
    fn counts_scored_and_missed_per_side() {
        let rows = vec![
            row("Arsenal", "Arsenal vs Chelsea", "Scored"),
            row("Chelsea", "Arsenal vs Chelsea", "Missed"),
        ];
        let agg = aggregate_penalty_rows(&rows).unwrap();
        assert_eq!(agg.aggregates.len(), 1);
        let pair = &agg.aggregates[0];
        assert_eq!(pair.home_team, "Arsenal");
        assert_eq!(pair.home_pk_scored, 1);
        assert_eq!(pair.home_pk_awarded, 1);
        assert_eq!(pair.away_pk_scored, 0);
        assert_eq!(pair.away_pk_awarded, 1);
    }

    #[test]
    fn awarded_totals_match_attributed_rows() {
        let rows = vec![
            row("Leeds", "Leeds vs Everton", "Scored"),
            row("Everton", "Leeds vs Everton", "Saved"),
            row("Leeds", "Leeds vs Everton", "Missed"),
            row("Fulham", "Fulham vs Wolves", "Scored"),
            // Spelling drift: attributable to neither side.
            row("Wolverhampton", "Fulham vs Wolves", "Scored"),
        ];
        let agg = aggregate_penalty_rows(&rows).unwrap();
        let awarded: u32 = agg
            .aggregates
            .iter()
            .map(|a| a.home_pk_awarded + a.away_pk_awarded)
            .sum();
        assert_eq!(agg.rows_used, 5);
        assert_eq!(agg.unattributed, 1);
        assert_eq!(awarded as usize + agg.unattributed, agg.rows_used);
    }

    #[test]
    fn unattributed_only_pair_still_emits_zero_row() {
        let rows = vec![row("Wolverhampton", "Fulham vs Wolves", "Scored")];
        let agg = aggregate_penalty_rows(&rows).unwrap();
        assert_eq!(agg.unattributed, 1);
        assert_eq!(agg.aggregates.len(), 1);
        assert_eq!(agg.aggregates[0].home_pk_awarded, 0);
        assert_eq!(agg.aggregates[0].away_pk_awarded, 0);
    }

    #[test]
    fn rows_missing_a_selected_field_are_dropped() {
        let mut incomplete = row("Arsenal", "Arsenal vs Chelsea", "Scored");
        incomplete[MATCH_COL].clear();
        let rows = vec![incomplete, row("Arsenal", "Arsenal vs Chelsea", "Scored")];
        let agg = aggregate_penalty_rows(&rows).unwrap();
        assert_eq!(agg.rows_dropped, 1);
        assert_eq!(agg.rows_used, 1);
        assert_eq!(agg.aggregates[0].home_pk_awarded, 1);
    }

    #[test]
    fn exactly_eight_columns_is_accepted() {
        let mut cells = vec![String::new(); 8];
        cells[PK_TEAM_COL] = "Arsenal".to_string();
        cells[MATCH_COL] = "Arsenal vs Chelsea".to_string();
        cells[OUTCOME_COL] = "Scored".to_string();
        let agg = aggregate_penalty_rows(&[cells]).unwrap();
        assert!(agg.warnings.is_empty());
        assert_eq!(agg.aggregates.len(), 1);
        assert_eq!(agg.aggregates[0].home_pk_scored, 1);
    }

    #[test]
    fn narrow_table_warns_and_yields_nothing() {
        let rows = vec![vec![String::from("x"); 7]];
        let agg = aggregate_penalty_rows(&rows).unwrap();
        assert!(agg.aggregates.is_empty());
        assert_eq!(agg.warnings.len(), 1);
    }

    #[test]
    fn empty_log_is_valid() {
        let agg = aggregate_penalty_rows(&[]).unwrap();
        assert!(agg.aggregates.is_empty());
        assert!(agg.warnings.is_empty());
        assert_eq!(agg.rows_used, 0);
    }

    #[test]
    fn bad_descriptor_aborts_aggregation() {
        let rows = vec![row("Arsenal", "ArsenalChelsea", "Scored")];
        assert!(aggregate_penalty_rows(&rows).is_err());
    }
}

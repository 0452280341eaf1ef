use std::path::PathBuf;

use chrono::Utc;

use crate::error::{OrganizeError, Result};
use crate::match_data;
use crate::penalty::{self, PenaltyAggregation};
use crate::schema::ColumnAliases;
use crate::season::{self, SeasonRow};
use crate::source_csv;

/// Input/output locations for one run. Defaults mirror the historical
/// export layout; env vars and CLI flags override per directory.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub match_dir: PathBuf,
    pub penalty_dir: PathBuf,
    pub output_dir: PathBuf,
    pub alias_file: Option<PathBuf>,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            match_dir: PathBuf::from("football-data_game_data"),
            penalty_dir: PathBuf::from("epl_penalties_by_game"),
            output_dir: PathBuf::from("organized_pk_data"),
            alias_file: None,
        }
    }
}

impl DatasetPaths {
    pub fn from_env() -> Self {
        let mut paths = Self::default();
        if let Some(dir) = env_path("PK_MATCH_DIR") {
            paths.match_dir = dir;
        }
        if let Some(dir) = env_path("PK_PENALTY_DIR") {
            paths.penalty_dir = dir;
        }
        if let Some(dir) = env_path("PK_OUTPUT_DIR") {
            paths.output_dir = dir;
        }
        paths.alias_file = env_path("PK_ALIAS_FILE");
        paths
    }

    pub fn match_file(&self, season: &Season) -> PathBuf {
        self.match_dir.join(format!("E0_{}.csv", season.suffix))
    }

    pub fn penalty_file(&self, season: &Season) -> PathBuf {
        self.penalty_dir
            .join(format!("epl_penalty_stats_{}.csv", season.label))
    }

    pub fn output_file(&self, season: &Season) -> PathBuf {
        self.output_dir
            .join(format!("football_penalty_data_{}.csv", season.label))
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    let raw = std::env::var(key).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

/// A season as both its `YYYY-YY` label and the two-digit-pair file suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub suffix: String,
    pub label: String,
}

impl Season {
    pub fn from_start_year(year: u32) -> Self {
        let next = (year + 1) % 100;
        Self {
            suffix: format!("{:02}{next:02}", year % 100),
            label: format!("20{:02}-{next:02}", year % 100),
        }
    }

    /// Parse a `YYYY-YY` label such as `2012-13`.
    pub fn from_label(label: &str) -> Result<Self> {
        let bytes = label.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && label.chars().enumerate().all(|(i, c)| i == 4 || c.is_ascii_digit());
        if !well_formed {
            return Err(OrganizeError::Parse {
                token: label.to_string(),
            });
        }
        Ok(Self {
            suffix: format!("{}{}", &label[2..4], &label[5..7]),
            label: label.to_string(),
        })
    }
}

/// The seasons the original exports cover, 2012-13 through 2019-20.
pub fn default_seasons() -> Vec<Season> {
    (12..20).map(Season::from_start_year).collect()
}

#[derive(Debug, Clone)]
pub struct SeasonReport {
    pub label: String,
    pub matches: usize,
    pub penalty_rows: usize,
    pub penalty_pairs: usize,
    pub unattributed: usize,
    pub output_path: PathBuf,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: String,
    pub finished_at: String,
    pub seasons_total: usize,
    pub seasons_processed: usize,
    pub reports: Vec<SeasonReport>,
    pub skipped: Vec<String>,
}

/// Process every season independently. A failing season is skipped with a
/// note in the summary; the run itself always completes.
pub fn run(paths: &DatasetPaths, seasons: &[Season]) -> RunSummary {
    let aliases = ColumnAliases::load_or_default(paths.alias_file.as_deref());
    let started_at = Utc::now().to_rfc3339();

    let mut reports = Vec::new();
    let mut skipped = Vec::new();
    for season in seasons {
        match process_season(paths, &aliases, season) {
            Ok(report) => reports.push(report),
            Err(err) => skipped.push(format!("season {}: {err}", season.label)),
        }
    }

    RunSummary {
        started_at,
        finished_at: Utc::now().to_rfc3339(),
        seasons_total: seasons.len(),
        seasons_processed: reports.len(),
        reports,
        skipped,
    }
}

/// Build and write one season dataset. Match-file problems propagate (the
/// season has nothing to stand on); penalty-file problems degrade to
/// all-zero counters with a warning.
pub fn process_season(
    paths: &DatasetPaths,
    aliases: &ColumnAliases,
    season: &Season,
) -> Result<SeasonReport> {
    let table = source_csv::read_match_table(&paths.match_file(season))?;
    let matches = match_data::normalize_match_table(&table, aliases)?;

    let aggregation = load_penalties(paths, season);
    let rows: Vec<SeasonRow> = season::combine_season(&season.label, &matches, &aggregation.aggregates);

    let output_path = paths.output_file(season);
    source_csv::write_season_csv(&output_path, &rows)?;

    let mut warnings = aggregation.warnings;
    if aggregation.unattributed > 0 {
        warnings.push(format!(
            "{} penalty rows matched neither side of their fixture",
            aggregation.unattributed
        ));
    }

    Ok(SeasonReport {
        label: season.label.clone(),
        matches: matches.len(),
        penalty_rows: aggregation.rows_used,
        penalty_pairs: aggregation.aggregates.len(),
        unattributed: aggregation.unattributed,
        output_path,
        warnings,
    })
}

fn load_penalties(paths: &DatasetPaths, season: &Season) -> PenaltyAggregation {
    let path = paths.penalty_file(season);
    let rows = match source_csv::read_penalty_rows(&path) {
        Ok(rows) => rows,
        Err(err) => {
            let mut agg = PenaltyAggregation::default();
            agg.warnings
                .push(format!("no penalty data for {}: {err}", season.label));
            return agg;
        }
    };
    match penalty::aggregate_penalty_rows(&rows) {
        Ok(agg) => agg,
        Err(err) => {
            let mut agg = PenaltyAggregation::default();
            agg.warnings.push(format!(
                "penalty aggregation failed for {}: {err}; using zero counters",
                season.label
            ));
            agg
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seasons_cover_2012_to_2020() {
        let seasons = default_seasons();
        assert_eq!(seasons.len(), 8);
        assert_eq!(seasons[0].label, "2012-13");
        assert_eq!(seasons[0].suffix, "1213");
        assert_eq!(seasons[7].label, "2019-20");
        assert_eq!(seasons[7].suffix, "1920");
    }

    #[test]
    fn label_round_trips() {
        let season = Season::from_label("2015-16").unwrap();
        assert_eq!(season, Season::from_start_year(15));
        assert!(Season::from_label("2015/16").is_err());
        assert!(Season::from_label("15-16").is_err());
    }
}

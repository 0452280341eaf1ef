use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OrganizeError, Result};

/// Ordered alias lists for the columns whose names drifted across
/// data-source vintages. Earlier entries win; the canonical output
/// names are accepted too so re-normalizing our own output is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnAliases {
    pub home_goals: Vec<String>,
    pub away_goals: Vec<String>,
    pub result: Vec<String>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            home_goals: names(&["FTHG", "HG", "HomeGoals"]),
            away_goals: names(&["FTAG", "AG", "AwayGoals"]),
            result: names(&["FTR", "Res", "Result"]),
        }
    }
}

impl ColumnAliases {
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        let Ok(raw) = fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }
}

fn names(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// Index of the first candidate present in `columns`, scanning candidates
/// in order. Failing resolves to a schema error for this file only.
pub fn resolve_column<S: AsRef<str>>(
    columns: &[String],
    field: &str,
    candidates: &[S],
) -> Result<usize> {
    for name in candidates {
        if let Some(idx) = columns.iter().position(|c| c.as_str() == name.as_ref()) {
            return Ok(idx);
        }
    }
    Err(OrganizeError::Schema {
        field: field.to_string(),
        candidates: candidates.iter().map(|s| s.as_ref().to_string()).collect(),
        columns: columns.to_vec(),
    })
}

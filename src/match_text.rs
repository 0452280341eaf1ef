use crate::error::{OrganizeError, Result};

/// Split rules checked in order; a descriptor containing both patterns
/// resolves via the first. Historical exports depend on this tie-break.
pub const SPLIT_RULES: &[&str] = &["vs ", " vs"];

/// Split a "Home vs Away" descriptor into trimmed team names.
///
/// Blank input is an unattributable descriptor, not an error: it maps to a
/// pair of empty strings and the aggregation decides what to do with it.
pub fn split_match_descriptor(raw: &str) -> Result<(String, String)> {
    if raw.trim().is_empty() {
        return Ok((String::new(), String::new()));
    }
    for rule in SPLIT_RULES {
        if raw.contains(rule) {
            let mut parts = raw.split(rule);
            let home = parts.next().unwrap_or_default().trim().to_string();
            let away = parts.next().unwrap_or_default().trim().to_string();
            return Ok((home, away));
        }
    }
    Err(OrganizeError::Parse {
        token: raw.to_string(),
    })
}

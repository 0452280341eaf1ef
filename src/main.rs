use std::path::PathBuf;

use anyhow::{Result, anyhow};

use pk_organizer::pipeline::{self, DatasetPaths, Season};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let mut paths = DatasetPaths::from_env();
    apply_path_args(&mut paths);
    let seasons = match parse_seasons_arg()? {
        Some(seasons) => seasons,
        None => pipeline::default_seasons(),
    };
    if seasons.is_empty() {
        return Err(anyhow!("no seasons to process"));
    }

    let summary = pipeline::run(&paths, &seasons);

    println!("Season processing complete");
    println!(
        "Seasons: {}/{}",
        summary.seasons_processed, summary.seasons_total
    );
    for report in &summary.reports {
        println!(
            "season {}: {} games, {} penalty rows ({} fixtures) -> {}",
            report.label,
            report.matches,
            report.penalty_rows,
            report.penalty_pairs,
            report.output_path.display()
        );
        for warning in &report.warnings {
            println!("  warning: {warning}");
        }
    }
    for skip in &summary.skipped {
        println!("skipped {skip}");
    }

    if summary.seasons_processed == 0 {
        return Err(anyhow!("no season was processed successfully"));
    }
    Ok(())
}

fn apply_path_args(paths: &mut DatasetPaths) {
    if let Some(dir) = flag_value("--match-dir") {
        paths.match_dir = PathBuf::from(dir);
    }
    if let Some(dir) = flag_value("--penalty-dir") {
        paths.penalty_dir = PathBuf::from(dir);
    }
    if let Some(dir) = flag_value("--out") {
        paths.output_dir = PathBuf::from(dir);
    }
    if let Some(file) = flag_value("--aliases") {
        paths.alias_file = Some(PathBuf::from(file));
    }
}

// Comma/space separated labels, e.g. --seasons=2012-13,2013-14.
fn parse_seasons_arg() -> Result<Option<Vec<Season>>> {
    let Some(raw) = flag_value("--seasons") else {
        return Ok(None);
    };
    let mut seasons = Vec::new();
    for part in raw.split([',', ';', ' ']) {
        let label = part.trim();
        if label.is_empty() {
            continue;
        }
        seasons.push(Season::from_label(label)?);
    }
    Ok(Some(seasons))
}

fn flag_value(flag: &str) -> Option<String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == flag
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(next.trim().to_string());
        }
    }
    None
}

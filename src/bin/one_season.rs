use anyhow::{Context, Result, anyhow};

use pk_organizer::pipeline::{DatasetPaths, Season, process_season};
use pk_organizer::schema::ColumnAliases;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let label = season_label_arg().ok_or_else(|| anyhow!("usage: one_season --season=YYYY-YY"))?;
    let season = Season::from_label(&label)
        .with_context(|| format!("invalid season label {label:?}"))?;

    let paths = DatasetPaths::from_env();
    let aliases = ColumnAliases::load_or_default(paths.alias_file.as_deref());
    let report = process_season(&paths, &aliases, &season)
        .with_context(|| format!("season {label} failed"))?;

    println!(
        "season {}: {} games, {} penalty rows ({} fixtures)",
        report.label, report.matches, report.penalty_rows, report.penalty_pairs
    );
    println!("written to {}", report.output_path.display());
    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    Ok(())
}

fn season_label_arg() -> Option<String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix("--season=") {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == "--season"
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(next.trim().to_string());
        }
    }
    None
}

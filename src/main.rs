//! Building triage CLI
//!
//! Reads one observation record (JSON) and prints the ranked remediation actions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use building_triage::assessment::{default_catalog, load_catalog, AssessmentEngine};
use building_triage::ObservationRecord;

#[derive(Parser)]
#[command(name = "building-triage")]
#[command(about = "Rank remediation actions for a damaged building", long_about = None)]
struct Cli {
    /// Observation record JSON file
    observation: PathBuf,

    /// Number of actions to show
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Show severity band and confidence label for each action
    #[arg(long)]
    verbose: bool,

    /// Custom priority catalog TOML file
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Emit the ranked list as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    building_triage::init_tracing();
    let cli = Cli::parse();

    let config = match &cli.catalog {
        Some(path) => load_catalog(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => default_catalog(),
    };
    let engine = AssessmentEngine::new(config)?;

    let observation = ObservationRecord::from_json_file(&cli.observation)
        .with_context(|| format!("Failed to read observation {}", cli.observation.display()))?;

    let result = engine.evaluate(&observation);
    let top = result.top(cli.top);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(top)?);
        return Ok(());
    }

    if top.is_empty() {
        println!("No prioritized actions to display.");
        return Ok(());
    }

    for action in top {
        if cli.verbose {
            println!(
                "{} [{}, {} confidence]",
                action,
                action.band.as_str(),
                action.confidence_label
            );
        } else {
            println!("{}", action);
        }
    }

    if cli.verbose && !result.suppressed.is_empty() {
        println!();
        println!("Superseded by combined findings:");
        for id in &result.suppressed {
            println!("  - {}", id);
        }
    }

    Ok(())
}

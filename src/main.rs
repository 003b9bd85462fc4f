//! DrawerZen command-line tool.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use drawerzen::{init_logging, EngineConfig, LayoutFile, LayoutSnapshot, RejectedBin};

#[derive(Parser)]
#[command(name = "drawerzen")]
#[command(version = drawerzen::VERSION)]
#[command(about = "Lay out drawer organiser bins on a 21mm grid")]
struct Cli {
    /// Engine configuration file (.json or .toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate every bin of a layout file
    Check {
        /// Layout file
        layout: PathBuf,
    },

    /// Repack the placed bins, largest first
    Sort {
        /// Layout file
        layout: PathBuf,
    },

    /// Fill free space with standard bin sizes
    Fill {
        /// Layout file
        layout: PathBuf,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output<T: Serialize> {
    layout: LayoutSnapshot,
    rejected: Vec<RejectedBin>,
    #[serde(flatten)]
    result: T,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.json)?;

    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(build_date = drawerzen::BUILD_DATE, "drawerzen {}", drawerzen::VERSION);

    match cli.command {
        Command::Check { layout } => {
            let report = LayoutFile::load(&layout)?.check(config);
            print_json(&report)?;
            if !report.valid {
                std::process::exit(1);
            }
        }
        Command::Sort { layout } => {
            let (mut state, rejected) = LayoutFile::load(&layout)?.into_layout(config);
            let result = state.auto_sort();
            print_json(&Output {
                layout: state.snapshot(),
                rejected,
                result: serde_json::json!({ "unplacedBins": result.unplaced_bins }),
            })?;
        }
        Command::Fill { layout } => {
            let (mut state, rejected) = LayoutFile::load(&layout)?.into_layout(config);
            let report = state.generate_bins();
            print_json(&Output {
                layout: state.snapshot(),
                rejected,
                result: serde_json::json!({
                    "generated": report.bins.len(),
                    "iterations": report.iterations,
                    "ceilingHit": report.ceiling_hit,
                }),
            })?;
        }
    }

    Ok(())
}

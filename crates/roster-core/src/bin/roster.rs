//! roster: inspect how a profile's publication list reconciles
//!
//! Reads a JSON profile bundle (member, members, publications, links) and
//! prints the ordered display records as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use roster_core::{build_profile, ProfileInput, RosterConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Reconcile and order a member's publications")]
struct Cli {
    /// JSON profile bundle
    input: PathBuf,

    /// TOML config file (defaults to the per-user config if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only print featured publications
    #[arg(long)]
    featured: bool,

    /// Print data-quality issues instead of records
    #[arg(long)]
    issues: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> roster_core::Result<String> {
    let config = load_config(cli.config.as_ref())?;
    let input = ProfileInput::load(&cli.input)?;
    let result = build_profile(&input, &config);

    let output = if cli.issues {
        serde_json::to_string_pretty(&result.issues)?
    } else if cli.featured {
        serde_json::to_string_pretty(&result.featured())?
    } else {
        serde_json::to_string_pretty(&result.records)?
    };
    Ok(output)
}

fn load_config(explicit: Option<&PathBuf>) -> roster_core::Result<RosterConfig> {
    if let Some(path) = explicit {
        return RosterConfig::load(path);
    }
    match RosterConfig::default_path() {
        Some(path) if path.exists() => {
            tracing::debug!("Using config at {:?}", path);
            RosterConfig::load(path)
        }
        _ => Ok(RosterConfig::default()),
    }
}

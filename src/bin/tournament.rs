use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use smart_connect_four::config::{AppConfig, ConfigSource};
use smart_connect_four::tournament::run_round_robin;

/// Run a round-robin tournament between Connect Four agents.
#[derive(Parser)]
#[command(name = "tournament", about = "Round-robin tournament between Connect Four agents")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override games played by each pair
    #[arg(long)]
    games: Option<usize>,

    /// Override entrants, e.g. --entrants smart,random,random
    #[arg(long, value_delimiter = ',')]
    entrants: Option<Vec<String>>,

    /// Seed every agent for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Print a default configuration file and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    // Load configuration
    let (mut config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.tournament.games_per_pair = games;
    }
    if let Some(entrants) = cli.entrants {
        config.tournament.entrants = entrants;
    }
    if let Some(seed) = cli.seed {
        config.agent.seed = Some(seed);
    }
    config.validate().context("invalid tournament settings")?;
    config.logging.init()?;
    if source == ConfigSource::Defaults {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let entrants = config.entrant_kinds()?;
    info!(
        entrants = ?config.tournament.entrants,
        games_per_pair = config.tournament.games_per_pair,
        "starting round-robin"
    );

    let report = run_round_robin(&entrants, config.tournament.games_per_pair, &config.agent)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}

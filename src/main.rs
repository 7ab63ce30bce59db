use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use smart_connect_four::ai::SmartAgent;
use smart_connect_four::config::{AppConfig, ConfigSource};
use smart_connect_four::game::{ActionMask, GameOutcome, GameState, Player};

/// Play Connect Four against the rule-based SmartAgent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against SmartAgent")]
struct Cli {
    /// Let SmartAgent move first (you play O)
    #[arg(long)]
    second: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Seed for the agent's random fallback
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(seed) = cli.seed {
        config.agent.seed = Some(seed);
    }
    config.logging.init()?;
    if source == ConfigSource::Defaults {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let human = if cli.second { Player::Yellow } else { Player::Red };
    let mut agent = SmartAgent::from_config(&config.agent);
    let mut state = GameState::initial();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("You are {} ({})", human, human.symbol());

    while !state.is_terminal() {
        println!("{}", state.render());
        let legal = state.legal_actions();

        let column = if state.current_player() == human {
            match prompt_column(&mut lines, &legal)? {
                Some(col) => col,
                None => {
                    println!("Game abandoned.");
                    return Ok(());
                }
            }
        } else {
            let decision = agent
                .decide(state.board(), &legal)
                .context("SmartAgent failed to move")?;
            println!("SmartAgent plays column {} ({:?})", decision.column, decision.rule);
            decision.column
        };

        state.apply_move_mut(column)?;
    }

    println!("{}", state.render());
    match state.outcome() {
        Some(GameOutcome::Winner(player)) if player == human => println!("You win!"),
        Some(GameOutcome::Winner(_)) => println!("SmartAgent wins."),
        _ => println!("Draw."),
    }
    Ok(())
}

/// Read a legal column from the player. `None` on quit or end of input.
fn prompt_column(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    legal: &ActionMask,
) -> Result<Option<usize>> {
    loop {
        print!("Your move {:?} (q to quit): ", legal.to_vec());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match input.parse::<usize>() {
            Ok(col) if legal.is_legal(col) => return Ok(Some(col)),
            _ => println!("'{input}' is not a playable column."),
        }
    }
}

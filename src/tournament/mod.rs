//! Round-robin matches between agents: game playing, result bookkeeping
//! and final standings.

mod match_play;
mod standings;

pub use match_play::{play_game, GameRecord, Seat};
pub use standings::{EntrantRecord, PairResult, TournamentReport};

use tracing::info;

use crate::ai::{AgentConfig, AgentKind};
use crate::error::TournamentError;

/// Tournament configuration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub games_per_pair: usize,
    /// Agent kinds by name ("smart", "random").
    pub entrants: Vec<String>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        TournamentConfig {
            games_per_pair: 10,
            entrants: vec!["smart".to_string(), "random".to_string()],
        }
    }
}

/// Display names for entrants; repeated kinds get a `#n` suffix.
fn entrant_names(entrants: &[AgentKind]) -> Vec<String> {
    entrants
        .iter()
        .enumerate()
        .map(|(idx, kind)| {
            let earlier = entrants[..idx].iter().filter(|k| *k == kind).count();
            if earlier == 0 {
                kind.name().to_string()
            } else {
                format!("{} #{}", kind.name(), earlier + 1)
            }
        })
        .collect()
}

/// Every pair of entrants plays `games_per_pair` games; the pair alternates
/// who moves first, starting with the earlier entrant. Fresh agents are
/// built for every game. With a seed in `agent_config`, each game derives its
/// own seeds from it so runs are reproducible.
pub fn run_round_robin(
    entrants: &[AgentKind],
    games_per_pair: usize,
    agent_config: &AgentConfig,
) -> Result<TournamentReport, TournamentError> {
    if entrants.len() < 2 {
        return Err(TournamentError::NotEnoughEntrants(entrants.len()));
    }

    let names = entrant_names(entrants);
    let mut records: Vec<EntrantRecord> = names.iter().map(EntrantRecord::new).collect();
    let mut head_to_head = Vec::new();
    let mut game_number: u64 = 0;

    for a in 0..entrants.len() {
        for b in (a + 1)..entrants.len() {
            let mut pair = PairResult {
                first: names[a].clone(),
                second: names[b].clone(),
                first_wins: 0,
                second_wins: 0,
                draws: 0,
            };

            for game in 0..games_per_pair {
                let (first_idx, second_idx) = if game % 2 == 0 { (a, b) } else { (b, a) };

                let seeded = |offset: u64| AgentConfig {
                    seed: agent_config
                        .seed
                        .map(|seed| seed.wrapping_add(game_number * 2 + offset)),
                    ..agent_config.clone()
                };
                let mut first = entrants[first_idx].build(&seeded(0));
                let mut second = entrants[second_idx].build(&seeded(1));
                game_number += 1;

                let record = play_game(first.as_mut(), second.as_mut())?;
                match record.winner {
                    Some(seat) => {
                        let (winner, loser) = match seat {
                            Seat::First => (first_idx, second_idx),
                            Seat::Second => (second_idx, first_idx),
                        };
                        records[winner].wins += 1;
                        records[loser].losses += 1;
                        if winner == a {
                            pair.first_wins += 1;
                        } else {
                            pair.second_wins += 1;
                        }
                    }
                    None => {
                        records[first_idx].draws += 1;
                        records[second_idx].draws += 1;
                        pair.draws += 1;
                    }
                }
            }

            info!(
                first = %pair.first,
                second = %pair.second,
                first_wins = pair.first_wins,
                second_wins = pair.second_wins,
                draws = pair.draws,
                "pairing finished"
            );
            head_to_head.push(pair);
        }
    }

    Ok(TournamentReport {
        games_per_pair,
        entrants: records,
        head_to_head,
    })
}

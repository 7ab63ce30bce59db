use std::fmt;

use serde::Serialize;

/// Lifetime record of one entrant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntrantRecord {
    pub name: String,
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,
}

impl EntrantRecord {
    pub fn new(name: impl Into<String>) -> Self {
        EntrantRecord {
            name: name.into(),
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    pub fn games(&self) -> u64 {
        self.wins + self.losses + self.draws
    }

    /// Fraction of games won; 0 before any game is played.
    pub fn win_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            n => self.wins as f64 / n as f64,
        }
    }
}

/// Head-to-head tally for one pairing, from the first entrant's side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairResult {
    pub first: String,
    pub second: String,
    pub first_wins: u64,
    pub second_wins: u64,
    pub draws: u64,
}

/// Final standings of a round-robin.
#[derive(Debug, Clone, Serialize)]
pub struct TournamentReport {
    pub games_per_pair: usize,
    pub entrants: Vec<EntrantRecord>,
    pub head_to_head: Vec<PairResult>,
}

impl TournamentReport {
    /// Entrants ordered by wins, best first. Ties keep entry order.
    pub fn ranking(&self) -> Vec<&EntrantRecord> {
        let mut ranked: Vec<&EntrantRecord> = self.entrants.iter().collect();
        ranked.sort_by(|a, b| b.wins.cmp(&a.wins));
        ranked
    }

    pub fn total_games(&self) -> usize {
        self.head_to_head.len() * self.games_per_pair
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for TournamentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(70);
        writeln!(f, "{rule}")?;
        writeln!(f, "FINAL STANDINGS")?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:<6} {:<25} {:<5} {:<5} {:<5} {:>7}",
            "Rank", "Agent", "W", "L", "D", "Win%"
        )?;
        writeln!(f, "{}", "-".repeat(70))?;
        for (rank, record) in self.ranking().into_iter().enumerate() {
            writeln!(
                f,
                "{:<6} {:<25} {:<5} {:<5} {:<5} {:>6.1}%",
                rank + 1,
                record.name,
                record.wins,
                record.losses,
                record.draws,
                record.win_rate() * 100.0
            )?;
        }

        writeln!(f)?;
        writeln!(f, "HEAD-TO-HEAD")?;
        for pair in &self.head_to_head {
            writeln!(
                f,
                "{} vs {}: {}-{}-{}",
                pair.first, pair.second, pair.first_wins, pair.second_wins, pair.draws
            )?;
        }
        write!(f, "{rule}")
    }
}

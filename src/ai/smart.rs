use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::AgentError;
use crate::game::{ActionMask, Board, Channel, COLS};

use super::agent::{Agent, AgentConfig};
use super::threat::{creates_double_threat, find_winning_move, Search};

/// Column ordering: center-first, used when no tactical rule applies.
pub const CENTER_PREFERENCE: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// The priority rule that produced a decision, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Win,
    Block,
    CreateDoubleThreat,
    BlockDoubleThreat,
    CenterPreference,
    RandomFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub column: usize,
    pub rule: Rule,
}

impl Decision {
    fn new(column: usize, rule: Rule) -> Self {
        Decision { column, rule }
    }
}

/// Pick a column for the mover.
///
/// Rules are tried in order and the first that yields a column wins:
/// 1. complete four for the mover
/// 2. block the opponent's immediate four
/// 3. create a double threat for the mover
/// 4. take a column where the opponent would create a double threat
/// 5. first legal column in [`CENTER_PREFERENCE`]
/// 6. uniform random legal column
///
/// The board is not modified. `rng` is only consulted by rule 6.
pub fn choose_column<R: Rng + ?Sized>(
    board: &Board,
    mask: &ActionMask,
    rng: &mut R,
) -> Result<Decision, AgentError> {
    if mask.is_empty() {
        return Err(AgentError::NoLegalMoves);
    }

    if let Search::Found(col) = find_winning_move(board, mask, Channel::Mover) {
        return Ok(Decision::new(col, Rule::Win));
    }

    if let Search::Found(col) = find_winning_move(board, mask, Channel::Opponent) {
        return Ok(Decision::new(col, Rule::Block));
    }

    if let Some(col) = mask
        .columns()
        .find(|&col| creates_double_threat(board, col, Channel::Mover))
    {
        return Ok(Decision::new(col, Rule::CreateDoubleThreat));
    }

    // Places an opponent piece at the candidate, not a mover piece.
    if let Some(col) = mask
        .columns()
        .find(|&col| creates_double_threat(board, col, Channel::Opponent))
    {
        return Ok(Decision::new(col, Rule::BlockDoubleThreat));
    }

    if let Some(&col) = CENTER_PREFERENCE.iter().find(|&&col| mask.is_legal(col)) {
        return Ok(Decision::new(col, Rule::CenterPreference));
    }

    mask.to_vec()
        .choose(rng)
        .map(|&col| Decision::new(col, Rule::RandomFallback))
        .ok_or(AgentError::NoLegalMoves)
}

/// Rule-based agent: win, block, double threats, then center preference.
pub struct SmartAgent {
    name: String,
    rng: StdRng,
    validate_input: bool,
}

impl SmartAgent {
    pub fn new() -> Self {
        Self::from_config(&AgentConfig::default())
    }

    pub fn from_config(config: &AgentConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        SmartAgent {
            name: "SmartAgent".to_string(),
            rng,
            validate_input: config.validate_input,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Choose a column and report which rule chose it.
    pub fn decide(&mut self, board: &Board, mask: &ActionMask) -> Result<Decision, AgentError> {
        if self.validate_input {
            board.validate_with_mask(mask)?;
        }
        let decision = choose_column(board, mask, &mut self.rng)?;
        debug!(
            agent = %self.name,
            column = decision.column,
            rule = ?decision.rule,
            "chose column"
        );
        Ok(decision)
    }
}

impl Default for SmartAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for SmartAgent {
    fn select_action(&mut self, board: &Board, mask: &ActionMask) -> Result<usize, AgentError> {
        self.decide(board, mask).map(|decision| decision.column)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

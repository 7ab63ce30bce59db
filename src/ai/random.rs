use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::error::AgentError;
use crate::game::{ActionMask, Board};

use super::agent::{Agent, AgentConfig};

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_config(config: &AgentConfig) -> Self {
        config.seed.map_or_else(Self::new, Self::with_seed)
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, _board: &Board, mask: &ActionMask) -> Result<usize, AgentError> {
        mask.to_vec()
            .choose(&mut self.rng)
            .copied()
            .ok_or(AgentError::NoLegalMoves)
    }

    fn name(&self) -> &str {
        "RandomAgent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new();
        let state = GameState::initial();
        let legal = state.legal_actions();

        for _ in 0..100 {
            let action = agent.select_action(state.board(), &legal).unwrap();
            assert!(legal.is_legal(action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_respects_partial_mask() {
        let mut agent = RandomAgent::with_seed(3);
        let mask = ActionMask::from_flags([1, 0, 0, 0, 0, 0, 1]);
        for _ in 0..50 {
            let action = agent.select_action(&Board::new(), &mask).unwrap();
            assert!(action == 0 || action == 6);
        }
    }

    #[test]
    fn test_random_agent_fails_without_moves() {
        let mut agent = RandomAgent::with_seed(1);
        assert_eq!(
            agent.select_action(&Board::new(), &ActionMask::none()),
            Err(AgentError::NoLegalMoves)
        );
    }

    #[test]
    fn test_seeded_agents_agree() {
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        let mask = ActionMask::all();
        for _ in 0..20 {
            assert_eq!(
                a.select_action(&Board::new(), &mask),
                b.select_action(&Board::new(), &mask)
            );
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::new();
        let mut agent2 = RandomAgent::new();
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() {
            let mask = state.legal_actions();
            let action = if turn % 2 == 0 {
                agent1.select_action(state.board(), &mask).unwrap()
            } else {
                agent2.select_action(state.board(), &mask).unwrap()
            };
            state = state.apply_move(action).unwrap();
            turn += 1;
        }

        assert!(state.is_terminal());
        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "RandomAgent");
    }
}

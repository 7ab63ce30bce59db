use tracing::debug;

use crate::ai::Agent;
use crate::error::TournamentError;
use crate::game::{GameOutcome, GameState, Player};

/// Seat at the table: `First` plays Red and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    fn of(player: Player) -> Seat {
        match player {
            Player::Red => Seat::First,
            Player::Yellow => Seat::Second,
        }
    }
}

/// Result of a single game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: Option<Seat>,
    pub moves: usize,
    pub final_state: GameState,
}

/// Play one game to completion. `first` plays Red.
///
/// Every chosen column is checked against the legal mask before it is
/// applied; an agent error or an illegal choice ends the game with an error.
pub fn play_game(
    first: &mut dyn Agent,
    second: &mut dyn Agent,
) -> Result<GameRecord, TournamentError> {
    let mut state = GameState::initial();

    while !state.is_terminal() {
        let mask = state.legal_actions();
        let agent: &mut dyn Agent = match state.current_player() {
            Player::Red => &mut *first,
            Player::Yellow => &mut *second,
        };

        let action = agent
            .select_action(state.board(), &mask)
            .map_err(|source| TournamentError::Agent {
                agent: agent.name().to_string(),
                source,
            })?;
        if !mask.is_legal(action) {
            return Err(TournamentError::IllegalAction {
                agent: agent.name().to_string(),
                action,
                legal: mask.to_vec(),
            });
        }
        state.apply_move_mut(action)?;
    }

    let winner = match state.outcome() {
        Some(GameOutcome::Winner(player)) => Some(Seat::of(player)),
        _ => None,
    };
    debug!(
        first = first.name(),
        second = second.name(),
        ?winner,
        moves = state.moves_played(),
        "game finished"
    );

    Ok(GameRecord {
        winner,
        moves: state.moves_played(),
        final_state: state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{AgentConfig, RandomAgent, SmartAgent};
    use crate::error::AgentError;
    use crate::game::{ActionMask, Board};

    /// Always plays the same column, legal or not.
    struct Stubborn(usize);

    impl Agent for Stubborn {
        fn select_action(&mut self, _board: &Board, _mask: &ActionMask) -> Result<usize, AgentError> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "Stubborn"
        }
    }

    struct Broken;

    impl Agent for Broken {
        fn select_action(&mut self, _board: &Board, _mask: &ActionMask) -> Result<usize, AgentError> {
            Err(AgentError::NoLegalMoves)
        }

        fn name(&self) -> &str {
            "Broken"
        }
    }

    fn smart() -> SmartAgent {
        SmartAgent::from_config(&AgentConfig {
            validate_input: true,
            seed: Some(1),
        })
    }

    #[test]
    fn game_runs_to_completion() {
        let mut a = smart();
        let mut b = RandomAgent::with_seed(5);
        let record = play_game(&mut a, &mut b).unwrap();
        assert!(record.final_state.is_terminal());
        assert_eq!(record.moves, record.final_state.moves_played());
        assert!(record.moves >= 7 && record.moves <= 42);
    }

    #[test]
    fn stacking_one_column_wins_for_first_seat() {
        let mut a = Stubborn(0);
        let mut b = Stubborn(1);
        let record = play_game(&mut a, &mut b).unwrap();
        assert_eq!(record.winner, Some(Seat::First));
        assert_eq!(record.moves, 7);
    }

    #[test]
    fn illegal_action_is_reported() {
        // Both fill column 0; the seventh drop is illegal.
        let mut a = Stubborn(0);
        let mut b = Stubborn(0);
        let err = play_game(&mut a, &mut b).unwrap_err();
        match err {
            TournamentError::IllegalAction { agent, action, legal } => {
                assert_eq!(agent, "Stubborn");
                assert_eq!(action, 0);
                assert_eq!(legal, vec![1, 2, 3, 4, 5, 6]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn agent_failure_is_reported() {
        let mut a = smart();
        let mut b = Broken;
        let err = play_game(&mut a, &mut b).unwrap_err();
        assert!(matches!(
            err,
            TournamentError::Agent { ref agent, source: AgentError::NoLegalMoves } if agent == "Broken"
        ));
    }

    #[test]
    fn smart_beats_single_column_stacker() {
        // Smart blocks column 0 after three stones and then wins down the
        // center before the stacker runs out of room.
        let mut a = Stubborn(0);
        let mut b = smart();
        let record = play_game(&mut a, &mut b).unwrap();
        assert_eq!(record.winner, Some(Seat::Second));
    }
}

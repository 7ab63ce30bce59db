use super::{ActionMask, Board, Channel, MoveError, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A game in progress. The board is kept relative to the player to move,
/// so `board()` is exactly the snapshot an agent is handed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    moves_played: usize,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            outcome: None,
            moves_played: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Board seen by the player to move: their pieces in the mover channel.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Which player holds (row, col), if anyone.
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`.
    pub fn owner(&self, row: usize, col: usize) -> Option<Player> {
        if self.board.is_occupied_by(row, col, Channel::Mover) {
            Some(self.current_player)
        } else if self.board.is_occupied_by(row, col, Channel::Opponent) {
            Some(self.current_player.other())
        } else {
            None
        }
    }

    /// Legal columns (not full); empty once the game is over
    pub fn legal_actions(&self) -> ActionMask {
        if self.is_terminal() {
            return ActionMask::none();
        }
        self.board.action_mask()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move mutably
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self.board.drop_piece(column, Channel::Mover)?;

        if self.board.completes_four(row, column, Channel::Mover) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.board = self.board.swapped();
        self.current_player = self.current_player.other();
        self.moves_played += 1;

        Ok(())
    }

    /// Text rendering with fixed symbols per player (X = Red, O = Yellow).
    pub fn render(&self) -> String {
        let mut out = String::from("\n  0   1   2   3   4   5   6\n");
        let divider = format!("+{}\n", "---+".repeat(super::COLS));
        out.push_str(&divider);
        for row in 0..super::ROWS {
            out.push('|');
            for col in 0..super::COLS {
                let symbol = self.owner(row, col).map_or(' ', Player::symbol);
                out.push_str(&format!(" {symbol} |"));
            }
            out.push('\n');
            out.push_str(&divider);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().count(), 7);
        assert_eq!(state.moves_played(), 0);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        // Yellow to move: Red's piece shows up in the opponent channel.
        assert_eq!(new_state.board().get(5, 3), Cell::Opponent);
        assert_eq!(new_state.owner(5, 3), Some(Player::Red));
        assert_eq!(new_state.owner(4, 3), None);
        // Original state is untouched.
        assert_eq!(state.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red wins with horizontal line
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(4), Err(MoveError::GameOver));
    }

    #[test]
    fn test_vertical_win_for_yellow() {
        let mut state = GameState::initial();
        for _ in 0..3 {
            state.apply_move_mut(0).unwrap(); // Red
            state.apply_move_mut(6).unwrap(); // Yellow
        }
        state.apply_move_mut(1).unwrap(); // Red
        state.apply_move_mut(6).unwrap(); // Yellow completes column 6

        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Yellow)));
        assert_eq!(state.moves_played(), 8);
    }

    #[test]
    fn test_column_full_is_rejected() {
        let mut state = GameState::initial();
        for _ in 0..6 {
            state.apply_move_mut(2).unwrap();
        }
        assert!(!state.legal_actions().is_legal(2));
        assert_eq!(state.apply_move(2), Err(MoveError::ColumnFull));
        assert_eq!(state.apply_move(9), Err(MoveError::InvalidColumn));
    }

    #[test]
    fn test_draw() {
        // Columns are filled in pairs so no line of four forms for either side.
        let sequence = [
            0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, //
            2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, //
            4, 5, 4, 5, 4, 5, 5, 4, 5, 4, 5, 4, //
            6, 6, 6, 6, 6, 6,
        ];

        let mut state = GameState::initial();
        for (i, &col) in sequence.iter().enumerate() {
            assert!(!state.is_terminal(), "game ended early at move {i}");
            state = state.apply_move(col).unwrap();
        }

        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert_eq!(state.moves_played(), 42);
        assert!(state.board().is_full());
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(0), Err(MoveError::GameOver));
    }

    #[test]
    #[should_panic]
    fn test_owner_out_of_range_panics() {
        let _ = GameState::initial().owner(0, crate::game::COLS);
    }

    #[test]
    fn test_render_uses_absolute_symbols() {
        let state = GameState::initial()
            .apply_move(3)
            .unwrap()
            .apply_move(4)
            .unwrap();
        let text = state.render();
        assert!(text.contains("|   |   |   | X | O |   |   |"));
    }
}

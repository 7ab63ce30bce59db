//! Core Connect Four game logic: the two-layer board with gravity placement
//! and alignment detection, action masks, players, and a game state machine
//! with immutable transitions.

mod board;
mod mask;
mod player;
mod state;

pub use board::{Board, Cell, Channel, Direction, MoveError, COLS, ROWS};
pub use mask::ActionMask;
pub use player::Player;
pub use state::{GameOutcome, GameState};

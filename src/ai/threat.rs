//! One-ply threat analysis: immediate wins and double threats.
//!
//! Every check drops a hypothetical piece on a copy of the board; the board
//! passed in is never modified.

use crate::game::{ActionMask, Board, Channel, COLS};

/// Outcome of a column search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Search {
    Found(usize),
    NotFound,
}

impl Search {
    pub fn column(self) -> Option<usize> {
        match self {
            Search::Found(col) => Some(col),
            Search::NotFound => None,
        }
    }
}

/// Would dropping a `channel` piece into `col` win on the spot?
/// Full columns never win.
pub fn wins_at(board: &Board, col: usize, channel: Channel) -> bool {
    match board.landing_row(col) {
        Ok(row) => board
            .with_piece(row, col, channel)
            .completes_four(row, col, channel),
        Err(_) => false,
    }
}

/// First legal column, in ascending order, where a `channel` piece completes
/// four. With `Channel::Opponent` this is the column that must be blocked.
pub fn find_winning_move(board: &Board, legal: &ActionMask, channel: Channel) -> Search {
    legal
        .columns()
        .find(|&col| wins_at(board, col, channel))
        .map_or(Search::NotFound, Search::Found)
}

/// Does a `channel` piece in `col` leave at least two columns where a second
/// `channel` piece would complete four?
///
/// The follow-up scan covers all seven columns of the post-move board, not
/// just the ones legal before the move, and stops at the second hit.
pub fn creates_double_threat(board: &Board, col: usize, channel: Channel) -> bool {
    let Ok(row) = board.landing_row(col) else {
        return false;
    };
    let after = board.with_piece(row, col, channel);

    let mut winning_moves = 0;
    for next_col in 0..COLS {
        if wins_at(&after, next_col, channel) {
            winning_moves += 1;
            if winning_moves >= 2 {
                return true;
            }
        }
    }
    false
}

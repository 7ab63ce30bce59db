use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

use super::mask::ActionMask;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Selects whose pieces are being tested. `Mover` is always the side about
/// to play in the snapshot the board represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Mover,
    Opponent,
}

impl Channel {
    /// Get the other channel
    pub fn other(self) -> Channel {
        match self {
            Channel::Mover => Channel::Opponent,
            Channel::Opponent => Channel::Mover,
        }
    }

    fn layer(self) -> usize {
        match self {
            Channel::Mover => 0,
            Channel::Opponent => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Mover,
    Opponent,
}

/// The four line axes a run of four can lie on, as (row, col) steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalUp,
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUp => (-1, 1),
            Direction::DiagonalDown => (1, 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
    #[error("game is already over")]
    GameOver,
}

type Layer = [[bool; COLS]; ROWS];

/// A 6x7 snapshot with one occupancy layer per channel.
///
/// `Board` is `Copy`: every hypothetical placement works on its own value and
/// the caller's snapshot is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    layers: [Layer; 2],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            layers: [[[false; COLS]; ROWS]; 2],
        }
    }

    /// Build a board from raw occupancy layers without checking them.
    /// Use [`Board::validate`] to reject overlapping cells.
    pub fn from_layers(mover: [[bool; COLS]; ROWS], opponent: [[bool; COLS]; ROWS]) -> Self {
        Board {
            layers: [mover, opponent],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`, as do the other cell
    /// accessors below.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if self.layers[0][row][col] {
            Cell::Mover
        } else if self.layers[1][row][col] {
            Cell::Opponent
        } else {
            Cell::Empty
        }
    }

    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`.
    pub fn is_occupied_by(&self, row: usize, col: usize, channel: Channel) -> bool {
        self.layers[channel.layer()][row][col]
    }

    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        !self.layers[0][row][col] && !self.layers[1][row][col]
    }

    /// Set a cell for `channel` directly, ignoring gravity. Any piece of the
    /// other channel in that cell is removed.
    pub fn place(&mut self, row: usize, col: usize, channel: Channel) {
        self.layers[channel.layer()][row][col] = true;
        self.layers[channel.other().layer()][row][col] = false;
    }

    /// Copy of this board with one extra `channel` piece at (row, col).
    pub fn with_piece(&self, row: usize, col: usize, channel: Channel) -> Board {
        let mut next = *self;
        next.place(row, col, channel);
        next
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        !self.is_empty_at(0, col)
    }

    /// Row a piece dropped into `col` would land on.
    ///
    /// Scans from the bottom row upward and returns the first row with both
    /// layers empty. `ColumnFull` means "skip this column", not a fault.
    pub fn landing_row(&self, col: usize) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }
        (0..ROWS)
            .rev()
            .find(|&row| self.is_empty_at(row, col))
            .ok_or(MoveError::ColumnFull)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, channel: Channel) -> Result<usize, MoveError> {
        let row = self.landing_row(col)?;
        self.place(row, col, channel);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns whose top cell is empty.
    pub fn action_mask(&self) -> ActionMask {
        ActionMask::from_fn(|col| !self.is_column_full(col))
    }

    pub fn piece_count(&self, channel: Channel) -> usize {
        self.layers[channel.layer()]
            .iter()
            .flatten()
            .filter(|&&occupied| occupied)
            .count()
    }

    /// The same position seen from the other side: layers exchanged.
    pub fn swapped(&self) -> Board {
        Board {
            layers: [self.layers[1], self.layers[0]],
        }
    }

    /// Does the `channel` piece at (row, col) complete a run of four?
    ///
    /// The piece must already be on the board. Each axis is counted in both
    /// directions from (row, col); a run stops at the edge of the grid or at
    /// the first cell not held by `channel`.
    pub fn completes_four(&self, row: usize, col: usize, channel: Channel) -> bool {
        Direction::ALL.iter().any(|&direction| {
            let (dr, dc) = direction.delta();
            let count = 1
                + self.run_length(row, col, dr, dc, channel)
                + self.run_length(row, col, -dr, -dc, channel);
            count >= 4
        })
    }

    /// Consecutive `channel` cells starting one step from (row, col).
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, channel: Channel) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.is_occupied_by(r as usize, c as usize, channel)
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Reject cells claimed by both channels.
    pub fn validate(&self) -> Result<(), BoardError> {
        for row in 0..ROWS {
            for col in 0..COLS {
                if self.layers[0][row][col] && self.layers[1][row][col] {
                    return Err(BoardError::OverlappingCell { row, col });
                }
            }
        }
        Ok(())
    }

    /// Validate the board and check that every column `mask` marks legal
    /// still has room.
    ///
    /// A mask stricter than the board is accepted: callers may withhold
    /// playable columns (e.g. only column 6 legal on an open board), but may
    /// never offer a full one.
    pub fn validate_with_mask(&self, mask: &ActionMask) -> Result<(), BoardError> {
        self.validate()?;
        match mask.columns().find(|&col| self.is_column_full(col)) {
            Some(col) => Err(BoardError::FullColumnMarkedLegal(col)),
            None => Ok(()),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses six rows of `X` (mover), `O` (opponent) and `.` (empty), top row
/// first. Whitespace inside a row is ignored and blank lines are skipped.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != ROWS {
            return Err(BoardError::WrongRowCount(rows.len()));
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|ch| !ch.is_whitespace()).collect();
            if cells.len() != COLS {
                return Err(BoardError::WrongRowLength {
                    row,
                    len: cells.len(),
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                match ch {
                    'X' | 'x' => board.place(row, col, Channel::Mover),
                    'O' | 'o' => board.place(row, col, Channel::Opponent),
                    '.' => {}
                    other => return Err(BoardError::InvalidCell { row, col, ch: other }),
                }
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6")?;
        writeln!(f, " {}", "-".repeat(15))?;
        for row in 0..ROWS {
            write!(f, "|")?;
            for col in 0..COLS {
                let symbol = match self.get(row, col) {
                    Cell::Mover => 'X',
                    Cell::Opponent => 'O',
                    Cell::Empty => '.',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f, " |")?;
        }
        write!(f, " {}", "-".repeat(15))
    }
}

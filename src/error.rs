use std::path::PathBuf;

use crate::game::MoveError;

/// Structural problems with a board snapshot or its textual form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is occupied by both channels")]
    OverlappingCell { row: usize, col: usize },

    #[error("column {0} is marked legal but is full")]
    FullColumnMarkedLegal(usize),

    #[error("expected 6 rows, found {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} cells, expected 7")]
    WrongRowLength { row: usize, len: usize },

    #[error("invalid cell {ch:?} at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, ch: char },
}

/// Errors an agent can report instead of a column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    #[error("no legal move available")]
    NoLegalMoves,

    #[error("malformed board: {0}")]
    MalformedBoard(#[from] BoardError),
}

/// Errors that can occur while playing matches between agents.
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("a tournament needs at least 2 entrants, got {0}")]
    NotEnoughEntrants(usize),

    #[error("{agent} selected illegal action {action} (legal: {legal:?})")]
    IllegalAction {
        agent: String,
        action: usize,
        legal: Vec<usize>,
    },

    #[error("{agent} failed to choose a move: {source}")]
    Agent {
        agent: String,
        source: AgentError,
    },

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::OverlappingCell { row: 5, col: 2 };
        assert_eq!(err.to_string(), "cell (5, 2) is occupied by both channels");
    }

    #[test]
    fn test_agent_error_display() {
        assert_eq!(AgentError::NoLegalMoves.to_string(), "no legal move available");
        let err = AgentError::from(BoardError::FullColumnMarkedLegal(4));
        assert_eq!(
            err.to_string(),
            "malformed board: column 4 is marked legal but is full"
        );
    }

    #[test]
    fn test_tournament_error_display() {
        let err = TournamentError::IllegalAction {
            agent: "Random".to_string(),
            action: 5,
            legal: vec![0, 1, 2],
        };
        assert_eq!(
            err.to_string(),
            "Random selected illegal action 5 (legal: [0, 1, 2])"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("tournament.games_per_pair must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: tournament.games_per_pair must be > 0"
        );
    }
}

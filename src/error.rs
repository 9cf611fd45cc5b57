//! Error types for the rollout-ttt crate

use thiserror::Error;

use crate::tictactoe::Side;

/// Main error type for the rollout-ttt crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: position {position} is occupied or out of bounds (must be 0-8)")]
    IllegalMove { position: usize },

    #[error("no legal move: the board is full")]
    NoLegalMove,

    #[error("game already over")]
    GameOver,

    #[error("not your turn: {expected:?} to move, got a move for {got:?}")]
    NotYourTurn { expected: Side, got: Side },

    #[error("invalid difficulty '{value}' (expected 0-3 or trivial, easy, hard, expert)")]
    InvalidDifficulty { value: String },

    #[error("wrong board length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid side '{input}' (expected 'robot' or 'player')")]
    ParseSide { input: String },

    #[error("invalid first mover '{input}'. Expected one of: {expected}")]
    ParseFirstMover { input: String, expected: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{Board, Cell, Side};
pub use game::{FirstMover, GameStatus, Move, Session, random_side};
pub use lines::{LineAnalyzer, WIN_LINES};

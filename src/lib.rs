//! Tic-Tac-Toe robot opponent driven by weighted random rollouts
//!
//! This crate provides:
//! - Board rules: win lines, free cells, move application
//! - The rollout evaluator that picks the robot's move
//! - Difficulty levels mapping to rollout budgets
//! - A game session with explicit turn state
//! - A match pipeline for playing the robot against baseline agents
//! - The `ttt-robot` command-line front end
//!
//! # Example
//!
//! ```
//! use rollout_ttt::{
//!     rollout::RolloutEvaluator,
//!     tictactoe::{Board, Side},
//! };
//!
//! // Robot holds 0 and 1; cell 2 finishes the row
//! let board = Board::from_string("oo.xx....").unwrap();
//! let mut evaluator = RolloutEvaluator::with_seed(1000, 42);
//! assert_eq!(evaluator.choose(&board, Side::Robot).unwrap(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod rollout;
pub mod tictactoe;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use rollout::{Difficulty, MoveScore, RolloutEvaluator};
pub use tictactoe::{Board, Cell, GameStatus, Session, Side};

//! CLI infrastructure for the ttt-robot binary
//!
//! Commands: interactive play against the robot, move suggestions for a
//! given board, and benchmark matches against baseline agents.

pub mod commands;
pub mod config;
pub mod output;

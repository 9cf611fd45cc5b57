//! Match pipeline abstractions
//!
//! This module provides:
//! - Baseline agents to play the robot against
//! - A match runner that plays many games and tallies outcomes
//! - Observers that watch the games (progress bar, metrics)

pub mod agents;
pub mod matches;
pub mod observers;

pub use agents::{BlockingAgent, RandomAgent, RobotAgent};
pub use matches::{MatchConfig, MatchResult, MatchRunner};
pub use observers::{MatchMetrics, MetricsHandle, MetricsObserver, ProgressObserver};

pub use crate::ports::{Agent, Observer};

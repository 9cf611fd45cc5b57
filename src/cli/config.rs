//! Shared configuration flags for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{EngineConfig, rollout::Difficulty, tictactoe::FirstMover};

/// Flags shared by every command; each one overrides the config file and env
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// JSON config file (defaults to $TTT_CONFIG, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Difficulty: 0-3 or trivial, easy, hard, expert
    #[arg(long, short = 'd', global = true)]
    pub difficulty: Option<Difficulty>,

    /// Random seed for reproducibility
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Who opens each game: robot, player, alternate, random
    #[arg(long, global = true)]
    pub first: Option<FirstMover>,

    /// Tracing filter (overrides config; RUST_LOG wins over both)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

impl CommonArgs {
    /// Resolve the engine configuration with these flags on top
    pub fn resolve(&self) -> Result<EngineConfig> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// [`CommonArgs::resolve`] with environment variables read through `lookup`
    pub fn resolve_with<F>(&self, lookup: F) -> Result<EngineConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = EngineConfig::resolve_with(self.config.as_deref(), lookup)
            .context("failed to resolve engine configuration")?;

        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(first) = self.first {
            config.first_mover = first;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

//! Engine configuration
//!
//! Configuration is loaded from a JSON file with environment variable
//! overrides. CLI flags take highest priority, followed by env vars, then the
//! file, then built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    rollout::Difficulty,
    tictactoe::FirstMover,
};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_VAR: &str = "TTT_CONFIG";

/// Engine configuration shared by all commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Difficulty level selecting the rollout budget
    pub difficulty: Difficulty,

    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Pause after a finished game before the board is cleared
    pub reset_delay_ms: u64,

    /// Who opens each game
    pub first_mover: FirstMover,

    /// Default tracing filter when RUST_LOG is not set
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: None,
            reset_delay_ms: 1000,
            first_mover: FirstMover::Random,
            log_level: "warn".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load a configuration file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create config file {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Resolve the configuration: explicit path, else `TTT_CONFIG`, else
    /// defaults; then environment overrides; then validation.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        Self::resolve_with(path, |key| std::env::var(key).ok())
    }

    /// [`EngineConfig::resolve`] with variables read through `lookup`
    pub fn resolve_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| lookup(CONFIG_PATH_VAR).map(PathBuf::from));

        let base = match path {
            Some(path) => Self::load(&path)?,
            None => {
                debug!("no config file given, using built-in defaults");
                Self::default()
            }
        };

        let config = base.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// Keys: `TTT_DIFFICULTY`, `TTT_SEED`, `TTT_RESET_DELAY_MS`,
    /// `TTT_FIRST_MOVER`, `TTT_LOG_LEVEL`.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("TTT_DIFFICULTY") {
            self.difficulty = value.parse()?;
        }
        if let Some(value) = lookup("TTT_SEED") {
            self.seed = Some(parse_number("TTT_SEED", &value)?);
        }
        if let Some(value) = lookup("TTT_RESET_DELAY_MS") {
            self.reset_delay_ms = parse_number("TTT_RESET_DELAY_MS", &value)?;
        }
        if let Some(value) = lookup("TTT_FIRST_MOVER") {
            self.first_mover = value.parse()?;
        }
        if let Some(value) = lookup("TTT_LOG_LEVEL") {
            self.log_level = value;
        }
        Ok(self)
    }

    /// Check the configuration for values no command can work with
    pub fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "log_level must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidConfiguration {
            message: format!("{key}='{value}' is not a non-negative integer"),
        })
}

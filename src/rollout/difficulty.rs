//! Difficulty levels mapped to rollout budgets

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Rollouts per candidate for each selector index
const ROLLOUTS: [usize; 4] = [1, 10, 1000, 10000];

/// How hard the robot tries, as exposed by the difficulty selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Trivial,
    Easy,
    #[default]
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Trivial,
        Difficulty::Easy,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Look up a difficulty by selector index (0-3)
    pub fn from_index(index: usize) -> Result<Self, Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| Error::InvalidDifficulty {
                value: index.to_string(),
            })
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn rollouts_per_candidate(self) -> usize {
        ROLLOUTS[self.index()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Trivial => "trivial",
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if let Ok(index) = normalized.parse::<usize>() {
            return Self::from_index(index).map_err(|_| Error::InvalidDifficulty {
                value: s.to_string(),
            });
        }
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| Error::InvalidDifficulty {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rollout_lookup() {
        let rollouts: Vec<usize> = Difficulty::ALL
            .iter()
            .map(|d| d.rollouts_per_candidate())
            .collect();
        assert_eq!(rollouts, vec![1, 10, 1000, 10000]);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Difficulty::from_index(0).unwrap(), Difficulty::Trivial);
        assert_eq!(Difficulty::from_index(3).unwrap(), Difficulty::Expert);
        assert!(matches!(
            Difficulty::from_index(4),
            Err(Error::InvalidDifficulty { .. })
        ));
    }

    #[test]
    fn test_parse() {
        assert_eq!("1".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("EXPERT".parse::<Difficulty>().unwrap(), Difficulty::Expert);
        assert_eq!(" hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("7".parse::<Difficulty>().is_err());
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Expert).unwrap();
        assert_eq!(json, "\"expert\"");
        let back: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(back, Difficulty::Easy);
        assert_eq!(Difficulty::default(), Difficulty::Hard);
    }
}

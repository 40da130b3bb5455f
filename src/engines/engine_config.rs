//! AI opponent configuration.
//!
//! Difficulty picks the search depth and, for the easy level, a chance of
//! skipping the search and playing a uniformly random legal move instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ChessError;
use crate::search::minimax::{SearchConfig, DEFAULT_NODE_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    #[inline]
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Probability of bypassing the search with a random legal move.
    #[inline]
    pub const fn random_move_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Medium | Difficulty::Hard => 0.0,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ChessError::InvalidDifficulty(s.to_owned())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub depth: u8,
    pub random_move_probability: f64,
    /// Seed for the random-move roll; `None` draws from the OS.
    pub seed: Option<u64>,
    pub node_limit: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::default())
    }
}

impl AiConfig {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            depth: difficulty.depth(),
            random_move_probability: difficulty.random_move_probability(),
            seed: None,
            node_limit: Some(DEFAULT_NODE_LIMIT),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth: self.depth,
            pruning: true,
            node_limit: self.node_limit,
        }
    }
}

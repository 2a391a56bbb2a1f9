//! Run configuration.
//!
//! Read once at setup; together with the seed and the provider's intent
//! sequence it fully determines a run. Out-of-range values are clamped at
//! setup rather than rejected — configuration mistakes should degrade, not
//! abort.

use serde::{Deserialize, Serialize};

/// Difficulty tier. Each game maps tiers to fixed deltas on its initial
/// resources and action-point baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// Configuration for one simulation run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of actors (each game clamps to its supported range).
    pub actors: usize,
    /// Initial hazard count (Captain Is Dead threats; ignored by Pandemic).
    pub hazards: usize,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// RNG seed; fixed seed + fixed intents = identical run.
    pub seed: u64,
    /// Maximum actor turns before the run is cut off.
    pub max_turns: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            actors: 2,
            hazards: 2,
            difficulty: Difficulty::Normal,
            seed: 42,
            max_turns: 10,
        }
    }
}

impl SimConfig {
    /// Start from defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the actor count.
    #[must_use]
    pub fn with_actors(mut self, actors: usize) -> Self {
        self.actors = actors;
        self
    }

    /// Set the initial hazard count.
    #[must_use]
    pub fn with_hazards(mut self, hazards: usize) -> Self {
        self.hazards = hazards;
        self
    }

    /// Set the difficulty tier.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the turn limit.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

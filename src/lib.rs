//! # coop-sim
//!
//! A deterministic turn and action resolution engine for cooperative
//! board games, with two complete rule sets: The Captain Is Dead and
//! Pandemic.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Core**: The orchestrator, decks, RNG, and the
//!    provider boundary know nothing about either game. Rules live
//!    behind the `CoopGame` trait.
//!
//! 2. **Determinism**: All randomness flows through one seeded
//!    `GameRng`, and every "pick one of several eligible" site sorts
//!    its candidates by a stable key before drawing. Fixed seed plus
//!    fixed intents replays an identical run.
//!
//! 3. **Rejection Over Panic**: Illegal or unknown intents resolve to
//!    `Outcome { applied: false, .. }` with the state untouched. Game
//!    over is a `Terminal` value, never an error.
//!
//! ## Architecture
//!
//! - Intents carry externally supplied proper nouns as plain strings;
//!   each game resolves them against its registry in one place.
//! - The two games charge action points differently on purpose:
//!   Captain burns a point on any resolved intent, Pandemic only on
//!   applied ones. See `CostPolicy`.
//! - Decision-making lives outside the crate behind `ActionProvider`;
//!   a `ScriptedProvider` covers tests and replays.
//!
//! ## Modules
//!
//! - `core`: RNG, decks, outcomes, the `CoopGame` seam, the provider
//!   boundary, the orchestrator, and run configuration
//! - `captain`: The Captain Is Dead registry, state, setup, action and
//!   crisis resolvers
//! - `pandemic`: Pandemic registry (48-city map), state, setup, action
//!   and infection/epidemic resolvers

pub mod captain;
pub mod core;
pub mod pandemic;

// Re-export commonly used types
pub use crate::core::{
    ActionProvider, CoopGame, CostPolicy, Deck, Difficulty, GameRng, Orchestrator, Outcome,
    ProviderError, RunOutcome, RunSummary, ScriptedProvider, SimConfig, Terminal,
};

pub use crate::captain::{CaptainGame, CaptainIntent, ShipState};

pub use crate::pandemic::{BoardState, MoveMode, PandemicGame, PandemicIntent, ShareDirection};

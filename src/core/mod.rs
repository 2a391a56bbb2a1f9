//! Core engine types: RNG, decks, outcomes, configuration, the
//! orchestrator, and the seams to game rules and external deciders.
//!
//! Everything here is game-agnostic; the `captain` and `pandemic` modules
//! plug in through `CoopGame`.

pub mod config;
pub mod deck;
pub mod engine;
pub mod orchestrator;
pub mod outcome;
pub mod provider;
pub mod rng;

pub use config::{Difficulty, SimConfig};
pub use deck::Deck;
pub use engine::{CoopGame, CostPolicy};
pub use orchestrator::{Orchestrator, RunOutcome, RunSummary};
pub use outcome::{Outcome, Terminal};
pub use provider::{ActionProvider, ProviderError, ScriptedProvider};
pub use rng::GameRng;

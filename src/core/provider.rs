//! The external decision boundary.
//!
//! An `ActionProvider` chooses the next intent for the current actor —
//! a human, a script, or an LLM integration living outside this crate.
//! The core only sees the final structured intent; prompt construction,
//! tool schemas, and retry ladders are the provider's business.
//!
//! A provider failure never stalls the simulation: the orchestrator maps
//! any `ProviderError` to the game's fallback end-turn intent.

use std::collections::VecDeque;

use super::engine::CoopGame;

/// Why a provider could not produce an intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider did not answer in time.
    Timeout,
    /// A scripted provider ran out of intents.
    Exhausted,
    /// Any other provider-side failure.
    Failed(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Timeout => write!(f, "provider timed out"),
            ProviderError::Exhausted => write!(f, "scripted provider exhausted"),
            ProviderError::Failed(reason) => write!(f, "provider failed: {reason}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Supplies the next action intent for the current actor.
///
/// The provider receives a read-only view of the game and may use any
/// decision strategy. It may also return intents the engine does not
/// recognize; those resolve as failed actions, they are not errors.
pub trait ActionProvider<G: CoopGame> {
    /// Choose the next intent given the current state.
    fn next_intent(&mut self, game: &G) -> Result<G::Intent, ProviderError>;
}

/// Replays a fixed sequence of intents, then reports exhaustion.
///
/// Used by tests and replays; exhaustion maps to the game's fallback
/// end-turn intent at the orchestrator, so a short script simply ends
/// turns early.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider<I> {
    queue: VecDeque<I>,
}

impl<I> ScriptedProvider<I> {
    /// Create a provider from an intent sequence.
    #[must_use]
    pub fn new(intents: impl IntoIterator<Item = I>) -> Self {
        Self {
            queue: intents.into_iter().collect(),
        }
    }

    /// Intents left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl<G: CoopGame> ActionProvider<G> for ScriptedProvider<G::Intent> {
    fn next_intent(&mut self, _game: &G) -> Result<G::Intent, ProviderError> {
        self.queue.pop_front().ok_or(ProviderError::Exhausted)
    }
}

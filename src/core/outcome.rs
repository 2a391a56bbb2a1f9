//! Action outcomes and terminal game states.
//!
//! In-game rule violations are never errors: an illegal intent resolves to
//! `Outcome { applied: false, .. }` with a reason, and game-over is a
//! normal acceptance state surfaced as a `Terminal` value. Nothing here
//! panics or propagates.

use serde::{Deserialize, Serialize};

/// The result of resolving one action intent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Whether the action's preconditions held and its mutation applied.
    pub applied: bool,
    /// Human-readable result or rejection reason.
    pub message: String,
}

impl Outcome {
    /// A successfully applied action.
    pub fn applied(message: impl Into<String>) -> Self {
        Self {
            applied: true,
            message: message.into(),
        }
    }

    /// A rejected action; state is unchanged.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            applied: false,
            message: message.into(),
        }
    }
}

/// A terminal game state with its reason.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminal {
    /// True for a cooperative victory, false for a defeat.
    pub victory: bool,
    /// Why the game ended.
    pub reason: String,
}

impl Terminal {
    /// A won game.
    pub fn victory(reason: impl Into<String>) -> Self {
        Self {
            victory: true,
            reason: reason.into(),
        }
    }

    /// A lost game.
    pub fn defeat(reason: impl Into<String>) -> Self {
        Self {
            victory: false,
            reason: reason.into(),
        }
    }
}

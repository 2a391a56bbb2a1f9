//! The turn orchestrator: `ActionPhase → HazardPhase → Advance`.
//!
//! The orchestrator exclusively owns the game state. Each actor turn it
//! pulls intents from the provider while action points last, resolves
//! them, charges points per the game's cost policy, runs the hazard phase
//! once, and advances the turn pointer. Termination is checked after every
//! mutation, not just at phase boundaries — the loop stops mid-phase the
//! instant a terminal condition holds.

use tracing::{debug, warn};

use super::engine::{CoopGame, CostPolicy};
use super::outcome::Terminal;
use super::provider::ActionProvider;

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// A terminal condition was reached.
    Finished(Terminal),
    /// The configured turn limit was reached with the game still open.
    TurnLimit,
}

/// Result of driving a game to completion or the turn limit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Actor turns played (the turn the game ended on counts).
    pub turns_played: u32,
    /// Terminal outcome or turn-limit cutoff.
    pub outcome: RunOutcome,
}

/// Drives one game with one provider.
pub struct Orchestrator<G, P> {
    /// The game state machine. Public so callers can inspect state
    /// between turns; nothing else holds a reference.
    pub game: G,
    provider: P,
    max_turns: u32,
}

impl<G, P> Orchestrator<G, P>
where
    G: CoopGame,
    P: ActionProvider<G>,
{
    /// Create an orchestrator.
    pub fn new(game: G, provider: P, max_turns: u32) -> Self {
        Self {
            game,
            provider,
            max_turns,
        }
    }

    /// Play one actor turn. Returns the terminal state if the game ended.
    pub fn play_turn(&mut self) -> Option<Terminal> {
        // Action phase: spend points until exhausted, ended, or terminal.
        while self.game.action_points() > 0 {
            let intent = match self.provider.next_intent(&self.game) {
                Ok(intent) => intent,
                Err(err) => {
                    warn!(%err, "provider failed, substituting fallback intent");
                    G::fallback_intent()
                }
            };

            if G::ends_turn(&intent) {
                debug!("actor ended action phase early");
                break;
            }

            let outcome = self.game.resolve_action(&intent);
            debug!(applied = outcome.applied, message = %outcome.message, "resolved intent");

            let charge = match self.game.cost_policy() {
                CostPolicy::ChargeAlways => true,
                CostPolicy::ChargeOnSuccess => outcome.applied,
            };
            if charge {
                self.game.spend_point();
            }

            if let Some(terminal) = self.game.check_terminal() {
                return Some(terminal);
            }
        }

        // Hazard phase runs exactly once per turn.
        self.game.hazard_phase();
        if let Some(terminal) = self.game.check_terminal() {
            return Some(terminal);
        }

        self.game.advance_turn();
        None
    }

    /// Play until a terminal state or the turn limit.
    pub fn run(&mut self) -> RunSummary {
        for turn in 1..=self.max_turns {
            debug!(turn, "starting actor turn");
            if let Some(terminal) = self.play_turn() {
                return RunSummary {
                    turns_played: turn,
                    outcome: RunOutcome::Finished(terminal),
                };
            }
        }
        RunSummary {
            turns_played: self.max_turns,
            outcome: RunOutcome::TurnLimit,
        }
    }

    /// Consume the orchestrator, returning the game state.
    pub fn into_game(self) -> G {
        self.game
    }
}

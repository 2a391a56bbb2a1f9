//! The per-game rule-table seam.
//!
//! Games implement `CoopGame` to define their rules; the orchestrator
//! drives any implementor through the same
//! `ActionPhase → HazardPhase → Advance` machine. The engine never
//! interprets game specifics — intents are opaque to it apart from the
//! end-turn predicate and the fallback used when the provider fails.

use super::outcome::{Outcome, Terminal};

/// How action points are charged for resolved intents.
///
/// The two games genuinely differ here and the asymmetry is deliberate:
/// in The Captain Is Dead a failed or unrecognized action still burns a
/// point; in Pandemic only applied actions cost one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostPolicy {
    /// Every resolved intent consumes a point, applied or not.
    ChargeAlways,
    /// Only applied intents consume a point.
    ChargeOnSuccess,
}

/// A cooperative game the orchestrator can drive.
///
/// ## Implementation notes
///
/// - `resolve_action` must never panic for illegal intents; it reports
///   them through `Outcome::rejected`.
/// - `check_terminal` is a pure predicate and is called after every
///   mutation, so it must be cheap.
/// - `advance_turn` moves the turn pointer cyclically and resets the next
///   actor's action points to the configured baseline.
pub trait CoopGame {
    /// The game's tagged action-intent union.
    type Intent: Clone + std::fmt::Debug;

    /// The action-point charging policy for this game.
    fn cost_policy(&self) -> CostPolicy;

    /// Action points remaining for the actor whose turn it is.
    fn action_points(&self) -> u8;

    /// Consume one action point from the current actor (floor 0).
    fn spend_point(&mut self);

    /// Does this intent end the action phase without resolving?
    fn ends_turn(intent: &Self::Intent) -> bool;

    /// The no-op intent substituted when the provider fails or times out.
    fn fallback_intent() -> Self::Intent;

    /// Validate and apply one intent against the state.
    fn resolve_action(&mut self, intent: &Self::Intent) -> Outcome;

    /// Run the hazard phase (crisis card or draw/infect sequence).
    ///
    /// Implementations early-exit internally the moment a terminal
    /// condition becomes true mid-phase.
    fn hazard_phase(&mut self);

    /// Terminal predicate; win conditions are evaluated before lose.
    fn check_terminal(&self) -> Option<Terminal>;

    /// Advance the turn pointer and reset the next actor's points.
    fn advance_turn(&mut self);
}

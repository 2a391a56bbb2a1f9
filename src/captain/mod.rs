//! The Captain Is Dead: a crippled starship, a dead captain, and a crew
//! racing to bring the Jump Core online before the ship is overwhelmed.
//!
//! ## Rules summary
//!
//! Each crew member spends action points moving around the ship,
//! repairing systems, activating system effects, and battling threats.
//! After each turn a crisis card resolves. The crew wins when Jump Core
//! repair progress reaches its goal; they lose if Life Support or
//! Shields go offline, or if a Red alert coincides with too many active
//! threats.
//!
//! Failed and unrecognized actions still consume a point
//! (`CostPolicy::ChargeAlways`): a panicked crew wastes time.

pub mod actions;
pub mod crisis;
pub mod registry;
pub mod setup;
pub mod state;

pub use actions::CaptainIntent;
pub use state::ShipState;

use crate::core::{CoopGame, CostPolicy, Outcome, SimConfig, Terminal};

/// The Captain Is Dead, packaged for the orchestrator.
#[derive(Clone, Debug)]
pub struct CaptainGame {
    pub state: ShipState,
}

impl CaptainGame {
    /// Build a fresh game from the simulation config.
    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        Self {
            state: setup::new_state(config),
        }
    }
}

impl CoopGame for CaptainGame {
    type Intent = CaptainIntent;

    fn cost_policy(&self) -> CostPolicy {
        CostPolicy::ChargeAlways
    }

    fn action_points(&self) -> u8 {
        self.state.current_character().action_points
    }

    fn spend_point(&mut self) {
        let character = self.state.current_character_mut();
        character.action_points = character.action_points.saturating_sub(1);
    }

    fn ends_turn(intent: &CaptainIntent) -> bool {
        matches!(intent, CaptainIntent::EndTurn)
    }

    fn fallback_intent() -> CaptainIntent {
        CaptainIntent::EndTurn
    }

    fn resolve_action(&mut self, intent: &CaptainIntent) -> Outcome {
        actions::resolve(&mut self.state, intent)
    }

    fn hazard_phase(&mut self) {
        crisis::resolve_crisis(&mut self.state);
    }

    fn check_terminal(&self) -> Option<Terminal> {
        self.state.check_terminal()
    }

    fn advance_turn(&mut self) {
        let next = (self.state.current + 1) % self.state.crew.len();
        self.state.current = next;
        let baseline = self.state.ap_baseline;
        self.state.crew[next].action_points = baseline;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_turn_wraps_and_resets_points() {
        let mut game = CaptainGame::new(&SimConfig::default());
        game.state.crew[1].action_points = 0;
        game.advance_turn();
        assert_eq!(game.state.current, 1);
        assert_eq!(game.action_points(), game.state.ap_baseline);
        game.advance_turn();
        assert_eq!(game.state.current, 0);
    }

    #[test]
    fn test_spend_point_floors_at_zero() {
        let mut game = CaptainGame::new(&SimConfig::default());
        game.state.crew[0].action_points = 1;
        game.spend_point();
        game.spend_point();
        assert_eq!(game.action_points(), 0);
    }

    #[test]
    fn test_fallback_ends_turn() {
        assert!(CaptainGame::ends_turn(&CaptainGame::fallback_intent()));
    }
}

//! Pandemic: four diseases spread across a 48-city world while the
//! players race to cure them all.
//!
//! ## Rules summary
//!
//! Each player spends action points moving, treating cubes, building
//! research stations, sharing cards, and discovering cures. After the
//! actions, two player cards are drawn (Epidemics resolve immediately),
//! then infection cards place new cubes. A city's 4th cube of a color
//! outbreaks into its neighbors. The players win when every disease is
//! cured; they lose to 8 outbreaks, an empty cube supply, or an empty
//! player deck.
//!
//! Only applied actions consume a point (`CostPolicy::ChargeOnSuccess`).

pub mod actions;
pub mod infection;
pub mod registry;
pub mod setup;
pub mod state;

pub use actions::{MoveMode, PandemicIntent, ShareDirection};
pub use state::BoardState;

use crate::core::{CoopGame, CostPolicy, Outcome, SimConfig, Terminal};

/// Pandemic, packaged for the orchestrator.
#[derive(Clone, Debug)]
pub struct PandemicGame {
    pub state: BoardState,
}

impl PandemicGame {
    /// Build a fresh game from the simulation config.
    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        Self {
            state: setup::new_state(config),
        }
    }
}

impl CoopGame for PandemicGame {
    type Intent = PandemicIntent;

    fn cost_policy(&self) -> CostPolicy {
        CostPolicy::ChargeOnSuccess
    }

    fn action_points(&self) -> u8 {
        self.state.current_player().action_points
    }

    fn spend_point(&mut self) {
        let player = self.state.current_player_mut();
        player.action_points = player.action_points.saturating_sub(1);
    }

    fn ends_turn(intent: &PandemicIntent) -> bool {
        matches!(intent, PandemicIntent::Pass)
    }

    fn fallback_intent() -> PandemicIntent {
        PandemicIntent::Pass
    }

    fn resolve_action(&mut self, intent: &PandemicIntent) -> Outcome {
        actions::resolve(&mut self.state, intent)
    }

    /// Draw 2 player cards, then infect, with a terminal check between:
    /// an exhausted player deck ends the game before any infection.
    fn hazard_phase(&mut self) {
        infection::draw_player_cards(&mut self.state);
        if self.state.check_terminal().is_some() {
            return;
        }
        infection::infect_cities(&mut self.state);
    }

    fn check_terminal(&self) -> Option<Terminal> {
        self.state.check_terminal()
    }

    fn advance_turn(&mut self) {
        let next = (self.state.current + 1) % self.state.players.len();
        self.state.current = next;
        let baseline = self.state.ap_baseline;
        self.state.players[next].action_points = baseline;
    }
}

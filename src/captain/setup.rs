//! Game setup: build a `ShipState` from a `SimConfig`.
//!
//! Out-of-range counts are clamped (crew 1-6, threats 0-4). Difficulty
//! remaps initial threat difficulty, system condition, alert level, and
//! the action-point baseline by fixed deltas.

use im::Vector;
use rustc_hash::FxHashMap;

use crate::core::{Deck, Difficulty, GameRng, SimConfig};

use super::registry::{
    self, AlertLevel, ShipSystem, SystemStatus,
};
use super::state::{Character, ShipState};

/// Build the initial ship state.
pub fn new_state(config: &SimConfig) -> ShipState {
    let crew_count = config.actors.clamp(1, 6);
    let threat_count = config.hazards.min(4);
    let mut rng = GameRng::new(config.seed);

    let mut systems = FxHashMap::default();
    for system in ShipSystem::ALL {
        let status = if system == ShipSystem::JumpCore {
            SystemStatus::Offline
        } else {
            SystemStatus::Online
        };
        systems.insert(system, status);
    }

    let mut crew: Vec<Character> = registry::crew_templates()
        .into_iter()
        .take(crew_count)
        .map(|template| Character {
            name: template.name.into(),
            role: template.role,
            skills: template.skills.into_iter().collect(),
            special_ability: template.special_ability.into(),
            location: template.location,
            action_points: 4,
        })
        .collect();

    let mut threats: Vec<_> = registry::initial_threats()
        .into_iter()
        .take(threat_count)
        .collect();

    let mut crisis_deck = Deck::new(registry::crisis_cards());
    crisis_deck.shuffle(&mut rng);

    let mut alert = AlertLevel::Yellow;
    let ap_baseline = match config.difficulty {
        Difficulty::Easy => {
            for threat in &mut threats {
                threat.difficulty = threat.difficulty.saturating_sub(1).max(1);
            }
            5
        }
        Difficulty::Normal => 4,
        Difficulty::Hard => {
            for threat in &mut threats {
                threat.difficulty += 1;
            }
            systems.insert(ShipSystem::Shields, SystemStatus::Damaged);
            alert = AlertLevel::Orange;
            3
        }
    };
    for character in &mut crew {
        character.action_points = ap_baseline;
    }

    ShipState {
        systems,
        alert,
        jump_core_progress: 0,
        threats,
        crew,
        current: 0,
        crisis_deck,
        last_crisis: None,
        ap_baseline,
        log: Vector::new(),
        rng,
    }
}

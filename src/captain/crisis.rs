//! End-of-turn crisis phase for The Captain Is Dead.
//!
//! One crisis card resolves per turn. The discard pile is reshuffled when
//! the draw pile runs dry, and a default "Emergency Alert" card is
//! synthesized if both piles are empty, so the phase always has a card to
//! resolve.

use tracing::debug;

use super::registry::{self, CrisisCard, CrisisEffect, ShipSystem, SystemStatus};
use super::state::{ShipState, THREAT_CAP};

/// Draw and resolve one crisis card.
pub fn resolve_crisis(state: &mut ShipState) {
    let card = state
        .crisis_deck
        .draw_or_synthesize(&mut state.rng, CrisisCard::emergency_alert);
    debug!(card = %card.name, effect = ?card.effect, "crisis drawn");
    state.record(format!("CRISIS: {} - {}", card.name, card.description));

    // Shields down amplifies the crisis: the same effect resolves twice.
    // Checked after the primary application, so the crisis that knocks
    // the Shields offline is itself amplified.
    apply_effect(state, card.effect);
    if state.system_status(ShipSystem::Shields) == SystemStatus::Offline {
        state.record(format!(
            "With Shields offline, the {} crisis hits twice as hard!",
            card.name
        ));
        apply_effect(state, card.effect);
    }

    if state.alert == registry::AlertLevel::Red {
        for threat in &mut state.threats {
            threat.difficulty += 1;
        }
        if !state.threats.is_empty() {
            state.record(
                "RED ALERT: every active threat grows more dangerous.".to_string(),
            );
        }
    }

    state.last_crisis = Some(card.clone());
    state.crisis_deck.discard(card);
}

fn apply_effect(state: &mut ShipState, effect: CrisisEffect) {
    match effect {
        CrisisEffect::SystemDamage => damage_random_system(state),
        CrisisEffect::NewThreat => spawn_threat(state),
        CrisisEffect::ActionRestriction => {
            for character in &mut state.crew {
                if character.action_points > 1 {
                    character.action_points -= 1;
                }
            }
            state.record("Crew action points reduced by the crisis.".to_string());
        }
    }
}

/// Step a canonically-picked functioning system down one tier. The Jump
/// Core is never a target; its state only moves through repairs.
fn damage_random_system(state: &mut ShipState) {
    let candidates: Vec<ShipSystem> = ShipSystem::ALL
        .into_iter()
        .filter(|&system| {
            system != ShipSystem::JumpCore
                && state.system_status(system) != SystemStatus::Offline
        })
        .collect();
    let Some(system) = state
        .rng
        .choose_sorted_by_key(&candidates, |system| system.name())
    else {
        state.record("The crisis found no functioning system to damage.".to_string());
        return;
    };
    let degraded = state.system_status(system).damaged();
    state.set_system(system, degraded);
    state.record(format!(
        "{} took damage and is now {}.",
        system.name(),
        match degraded {
            SystemStatus::Online => "ONLINE",
            SystemStatus::Damaged => "DAMAGED",
            SystemStatus::Offline => "OFFLINE",
        }
    ));
    if system == ShipSystem::Shields && degraded == SystemStatus::Offline {
        state.escalate_alert();
    }
}

/// Append a canonically-picked reinforcement threat, or escalate the
/// alert when the board is already saturated.
fn spawn_threat(state: &mut ShipState) {
    if state.threats.len() >= THREAT_CAP {
        state.record(
            "The ship cannot track another threat. Alert level rising!".to_string(),
        );
        state.escalate_alert();
        return;
    }
    let pool = registry::reinforcement_threats();
    let threat = state
        .rng
        .choose_sorted_by_key(&pool, |threat| threat.name.clone())
        .expect("reinforcement threat table is never empty");
    state.record(format!(
        "New threat detected: {} (Difficulty: {})",
        threat.name, threat.difficulty
    ));
    state.threats.push(threat);
}

//! Action intents and the action resolver for The Captain Is Dead.
//!
//! Intents carry externally supplied proper nouns as strings; resolution
//! against the registry happens here. Illegal intents come back as
//! `Outcome::rejected` — the orchestrator still charges a point for them
//! under this game's `ChargeAlways` policy.

use serde::{Deserialize, Serialize};

use crate::core::Outcome;

use super::registry::{Location, ShipSystem, Skill, SystemStatus};
use super::state::ShipState;

/// One requested crew action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptainIntent {
    /// Move to a named location.
    Move { destination: String },
    /// Repair a named system.
    Repair { system: String },
    /// Activate a named system's effect.
    UseSystem { system: String },
    /// Battle a named threat.
    Battle { threat: String },
    /// End the action phase early.
    EndTurn,
    /// Anything the provider produced that the engine does not recognize.
    Unknown { action: String },
}

/// Validate and apply one intent.
pub fn resolve(state: &mut ShipState, intent: &CaptainIntent) -> Outcome {
    let outcome = match intent {
        CaptainIntent::Move { destination } => resolve_move(state, destination),
        CaptainIntent::Repair { system } => resolve_repair(state, system),
        CaptainIntent::UseSystem { system } => resolve_use_system(state, system),
        CaptainIntent::Battle { threat } => resolve_battle(state, threat),
        CaptainIntent::EndTurn => Outcome::applied(format!(
            "{} ends their turn.",
            state.current_character().name
        )),
        CaptainIntent::Unknown { action } => {
            Outcome::rejected(format!("Unrecognized action: {action}"))
        }
    };
    state.record(outcome.message.clone());
    outcome
}

fn resolve_move(state: &mut ShipState, destination: &str) -> Outcome {
    let Some(target) = Location::lookup(destination) else {
        return Outcome::rejected(format!("Invalid location: {destination}"));
    };
    let character = state.current_character_mut();
    let from = character.location;
    character.location = target;
    Outcome::applied(format!(
        "{} moved from {} to {}.",
        character.name,
        from.name(),
        target.name()
    ))
}

fn resolve_repair(state: &mut ShipState, system_name: &str) -> Outcome {
    let Some(system) = ShipSystem::lookup(system_name) else {
        return Outcome::rejected(format!("Unknown system: {system_name}"));
    };
    let status = state.system_status(system);
    if status == SystemStatus::Online {
        return Outcome::rejected(format!(
            "{} is already online and functioning correctly.",
            system.name()
        ));
    }

    let engineering = state.current_character().skill(Skill::Engineering);
    let name = state.current_character().name.clone();

    if system == ShipSystem::JumpCore {
        // The objective: tiered progress, engineering 2 required.
        if engineering < 2 {
            return Outcome::rejected(format!(
                "Insufficient Engineering skill to repair Jump Core. Required: 2, Current: {engineering}"
            ));
        }
        state.jump_core_progress += 1;
        let mut message = format!(
            "{} made progress on the Jump Core! Progress: {}/{}",
            name,
            state.jump_core_progress,
            super::state::JUMP_CORE_GOAL
        );
        if state.jump_core_progress >= super::state::JUMP_CORE_GOAL {
            state.set_system(ShipSystem::JumpCore, SystemStatus::Online);
            message.push_str(" Jump Core is now fully repaired and ONLINE!");
        }
        return Outcome::applied(message);
    }

    if engineering < 1 {
        return Outcome::rejected(format!(
            "Insufficient Engineering skill to repair {}. Required: 1, Current: {engineering}",
            system.name()
        ));
    }
    let repaired = status.repaired();
    state.set_system(system, repaired);
    match repaired {
        SystemStatus::Online => Outcome::applied(format!(
            "{} repaired {}! It is now ONLINE.",
            name,
            system.name()
        )),
        _ => Outcome::applied(format!(
            "{} partially repaired {}. It is now DAMAGED but functional.",
            name,
            system.name()
        )),
    }
}

fn resolve_use_system(state: &mut ShipState, system_name: &str) -> Outcome {
    let Some(system) = ShipSystem::lookup(system_name) else {
        return Outcome::rejected(format!("Unknown system: {system_name}"));
    };
    if state.system_status(system) == SystemStatus::Offline {
        return Outcome::rejected(format!(
            "Cannot use {} because it is OFFLINE.",
            system.name()
        ));
    }

    let name = state.current_character().name.clone();
    match system {
        ShipSystem::Shields => match weaken_random_threat(state) {
            Some((threat_name, difficulty)) => Outcome::applied(format!(
                "{name} reinforced the Shields! Reduced threat level of {threat_name} to {difficulty}."
            )),
            None => Outcome::applied(format!(
                "{name} reinforced the Shields, but there are no active threats."
            )),
        },
        ShipSystem::TargetingComputer => match weaken_random_threat(state) {
            Some((threat_name, difficulty)) => Outcome::applied(format!(
                "{name} used the Targeting Computer to analyze {threat_name}! Reduced its difficulty to {difficulty}."
            )),
            None => Outcome::applied(format!(
                "{name} used the Targeting Computer, but there are no active threats."
            )),
        },
        ShipSystem::Sensors => {
            if state.threats.is_empty() {
                Outcome::applied(format!(
                    "{name} used the Sensors but detected no active threats."
                ))
            } else {
                let report: Vec<String> = state
                    .threats
                    .iter()
                    .map(|threat| {
                        format!(
                            "{}: {} (Difficulty: {})",
                            threat.name, threat.description, threat.difficulty
                        )
                    })
                    .collect();
                Outcome::applied(format!(
                    "{name} used the Sensors to scan active threats: {}",
                    report.join("; ")
                ))
            }
        }
        ShipSystem::Teleporter => {
            // Candidates are canonically ordered before the pick, so a
            // seeded run replays exactly.
            let destination = state
                .rng
                .choose_sorted_by_key(&Location::ALL, |location| location.name())
                .expect("location table is never empty");
            let character = state.current_character_mut();
            let from = character.location;
            character.location = destination;
            Outcome::applied(format!(
                "{name} used the Teleporter to move from {} to {}.",
                from.name(),
                destination.name()
            ))
        }
        ShipSystem::Holodeck => {
            let skill = state
                .rng
                .choose_sorted_by_key(&Skill::ALL, |skill| skill.name())
                .expect("skill table is never empty");
            let character = state.current_character_mut();
            let boosted = (character.skill(skill) + 1).min(5);
            character.skills.insert(skill, boosted);
            Outcome::applied(format!(
                "{name} used the Holodeck to practice! {} skill increased to {boosted}.",
                skill.name()
            ))
        }
        ShipSystem::LifeSupport => {
            // +1 point now; the orchestrator charges 1 for the action, so
            // the spend loop keeps going at no net cost.
            let character = state.current_character_mut();
            character.action_points += 1;
            Outcome::applied(format!(
                "{name} optimized Life Support systems! Gained 1 extra action point."
            ))
        }
        ShipSystem::JumpCore => Outcome::applied(format!(
            "{name} used {}, but it had no specific effect.",
            system.name()
        )),
    }
}

/// Canonically pick an active threat and lower its difficulty (floor 1).
fn weaken_random_threat(state: &mut ShipState) -> Option<(String, u8)> {
    let candidates: Vec<(String, usize)> = state
        .threats
        .iter()
        .enumerate()
        .map(|(idx, threat)| (threat.name.clone(), idx))
        .collect();
    let (name, idx) = state.rng.choose_sorted(&candidates)?;
    let threat = &mut state.threats[idx];
    threat.difficulty = threat.difficulty.saturating_sub(1).max(1);
    Some((name, threat.difficulty))
}

fn resolve_battle(state: &mut ShipState, threat_name: &str) -> Outcome {
    let Some(idx) = state.find_threat(threat_name) else {
        return Outcome::rejected(format!("Unknown threat: {threat_name}"));
    };
    let tactical = state.current_character().skill(Skill::Tactical);
    let difficulty = state.threats[idx].difficulty;
    if i32::from(tactical) < i32::from(difficulty) - 1 {
        return Outcome::rejected(format!(
            "Insufficient Tactical skill to battle {threat_name}. Required: {}, Current: {tactical}",
            i32::from(difficulty) - 1
        ));
    }

    // One uniform draw decides the battle.
    let success_chance =
        (0.5 + (f64::from(tactical) - f64::from(difficulty)) * 0.2).min(0.9);
    let name = state.current_character().name.clone();
    if state.rng.roll() < success_chance {
        state.threats.remove(idx);
        Outcome::applied(format!(
            "{name} successfully defeated the {threat_name} threat!"
        ))
    } else {
        let threat = &mut state.threats[idx];
        threat.difficulty += 1;
        Outcome::applied(format!(
            "{name} failed to defeat {threat_name}! The threat has grown stronger (Difficulty: {}).",
            threat.difficulty
        ))
    }
}

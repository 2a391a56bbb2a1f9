//! Mutable ship state and the termination predicate.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Deck, GameRng, Terminal};

use super::registry::{
    AlertLevel, CrisisCard, Location, Role, ShipSystem, Skill, SystemStatus, Threat,
};

/// Jump core progress needed for victory.
pub const JUMP_CORE_GOAL: u8 = 5;

/// Active threat cap; a `NewThreat` crisis at the cap escalates the alert.
pub const THREAT_CAP: usize = 4;

/// A crew member. Created at setup, never destroyed mid-game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub role: Role,
    pub skills: FxHashMap<Skill, u8>,
    pub special_ability: String,
    pub location: Location,
    pub action_points: u8,
}

impl Character {
    /// Skill level, 0 when untrained.
    #[must_use]
    pub fn skill(&self, skill: Skill) -> u8 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }
}

/// The single mutable snapshot of a Captain Is Dead run.
#[derive(Clone, Debug)]
pub struct ShipState {
    pub systems: FxHashMap<ShipSystem, SystemStatus>,
    pub alert: AlertLevel,
    pub jump_core_progress: u8,
    pub threats: Vec<Threat>,
    pub crew: Vec<Character>,
    /// Turn pointer; always indexes a valid crew member.
    pub current: usize,
    pub crisis_deck: Deck<CrisisCard>,
    pub last_crisis: Option<CrisisCard>,
    /// Per-turn action-point reset value (difficulty-dependent).
    pub ap_baseline: u8,
    /// Append-only event log; `im::Vector` keeps snapshots cheap.
    pub log: Vector<String>,
    pub rng: GameRng,
}

impl ShipState {
    /// The crew member whose turn it is.
    #[must_use]
    pub fn current_character(&self) -> &Character {
        &self.crew[self.current]
    }

    pub fn current_character_mut(&mut self) -> &mut Character {
        &mut self.crew[self.current]
    }

    /// Status of a system. Setup seeds every system, so missing entries
    /// only occur in hand-built test states; they read as Offline.
    #[must_use]
    pub fn system_status(&self, system: ShipSystem) -> SystemStatus {
        self.systems
            .get(&system)
            .copied()
            .unwrap_or(SystemStatus::Offline)
    }

    pub fn set_system(&mut self, system: ShipSystem, status: SystemStatus) {
        self.systems.insert(system, status);
    }

    /// Escalate the alert one step (saturating at Red).
    pub fn escalate_alert(&mut self) {
        self.alert = self.alert.escalated();
        self.record(format!("Alert level increased to {}.", self.alert.name()));
    }

    /// Find an active threat by name.
    #[must_use]
    pub fn find_threat(&self, name: &str) -> Option<usize> {
        self.threats.iter().position(|threat| threat.name == name)
    }

    /// Append to the event log.
    pub fn record(&mut self, message: impl Into<String>) {
        self.log.push_back(message.into());
    }

    /// Terminal predicate. Victory is evaluated before any defeat.
    #[must_use]
    pub fn check_terminal(&self) -> Option<Terminal> {
        if self.jump_core_progress >= JUMP_CORE_GOAL {
            return Some(Terminal::victory(
                "Victory! The jump core has been fully repaired and the ship has escaped.",
            ));
        }

        for system in [ShipSystem::LifeSupport, ShipSystem::Shields] {
            if self.system_status(system) == SystemStatus::Offline {
                return Some(Terminal::defeat(format!(
                    "Defeat! {} has gone offline.",
                    system.name()
                )));
            }
        }

        if self.alert == AlertLevel::Red && self.threats.len() > 3 {
            return Some(Terminal::defeat(
                "Defeat! The ship has been overwhelmed by threats during Red Alert.",
            ));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::captain::setup;
    use crate::core::SimConfig;

    fn state() -> ShipState {
        setup::new_state(&SimConfig::default())
    }

    #[test]
    fn test_initial_systems() {
        let s = state();
        assert_eq!(s.system_status(ShipSystem::JumpCore), SystemStatus::Offline);
        assert_eq!(s.system_status(ShipSystem::Shields), SystemStatus::Online);
        assert_eq!(s.system_status(ShipSystem::LifeSupport), SystemStatus::Online);
    }

    #[test]
    fn test_not_terminal_at_start() {
        assert!(state().check_terminal().is_none());
    }

    #[test]
    fn test_victory_at_goal() {
        let mut s = state();
        s.jump_core_progress = JUMP_CORE_GOAL;
        let terminal = s.check_terminal().unwrap();
        assert!(terminal.victory);
    }

    #[test]
    fn test_defeat_on_critical_system_offline() {
        let mut s = state();
        s.set_system(ShipSystem::LifeSupport, SystemStatus::Offline);
        let terminal = s.check_terminal().unwrap();
        assert!(!terminal.victory);
        assert!(terminal.reason.contains("Life Support"));
    }

    #[test]
    fn test_defeat_on_red_alert_overwhelm() {
        let mut s = state();
        s.alert = AlertLevel::Red;
        s.threats = super::super::registry::initial_threats();
        // 4 threats > 3 during Red Alert.
        let terminal = s.check_terminal().unwrap();
        assert!(!terminal.victory);
        assert!(terminal.reason.contains("overwhelmed"));
    }

    #[test]
    fn test_win_checked_before_lose() {
        let mut s = state();
        s.jump_core_progress = JUMP_CORE_GOAL;
        s.set_system(ShipSystem::Shields, SystemStatus::Offline);
        // Both conditions hold; victory wins.
        assert!(s.check_terminal().unwrap().victory);
    }
}

//! Static definitions for The Captain Is Dead: ship systems, locations,
//! skills, crew roles, and the template tables game setup instantiates.
//!
//! Status and category fields are closed enums with total transition
//! tables. Name resolution for externally supplied proper nouns is
//! centralized here (`ShipSystem::lookup`, `Location::lookup`) so resolver
//! code never compares against literal strings.

use serde::{Deserialize, Serialize};

/// Ship systems. Jump Core is the victory objective and is excluded from
/// crisis damage selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShipSystem {
    JumpCore,
    Shields,
    Sensors,
    Teleporter,
    LifeSupport,
    TargetingComputer,
    Holodeck,
}

impl ShipSystem {
    pub const ALL: [ShipSystem; 7] = [
        ShipSystem::JumpCore,
        ShipSystem::Shields,
        ShipSystem::Sensors,
        ShipSystem::Teleporter,
        ShipSystem::LifeSupport,
        ShipSystem::TargetingComputer,
        ShipSystem::Holodeck,
    ];

    /// Display name, as the external provider names systems.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ShipSystem::JumpCore => "Jump Core",
            ShipSystem::Shields => "Shields",
            ShipSystem::Sensors => "Sensors",
            ShipSystem::Teleporter => "Teleporter",
            ShipSystem::LifeSupport => "Life Support",
            ShipSystem::TargetingComputer => "Targeting Computer",
            ShipSystem::Holodeck => "Holodeck",
        }
    }

    /// Resolve an externally supplied system name.
    #[must_use]
    pub fn lookup(name: &str) -> Option<ShipSystem> {
        Self::ALL.into_iter().find(|system| system.name() == name)
    }
}

/// System condition with total repair/damage transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemStatus {
    Online,
    Damaged,
    Offline,
}

impl SystemStatus {
    /// One tier of damage. Offline systems stay offline.
    #[must_use]
    pub fn damaged(self) -> SystemStatus {
        match self {
            SystemStatus::Online => SystemStatus::Damaged,
            SystemStatus::Damaged | SystemStatus::Offline => SystemStatus::Offline,
        }
    }

    /// One tier of repair. Online systems stay online.
    #[must_use]
    pub fn repaired(self) -> SystemStatus {
        match self {
            SystemStatus::Offline => SystemStatus::Damaged,
            SystemStatus::Damaged | SystemStatus::Online => SystemStatus::Online,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SystemStatus::Online => "Online",
            SystemStatus::Damaged => "Damaged",
            SystemStatus::Offline => "Offline",
        }
    }
}

/// Ship locations. A flat set: movement has no adjacency constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Location {
    Bridge,
    Engineering,
    WeaponsBay,
    ScienceLab,
    Teleporter,
    SickBay,
    CommCenter,
    Holodeck,
}

impl Location {
    pub const ALL: [Location; 8] = [
        Location::Bridge,
        Location::Engineering,
        Location::WeaponsBay,
        Location::ScienceLab,
        Location::Teleporter,
        Location::SickBay,
        Location::CommCenter,
        Location::Holodeck,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Location::Bridge => "Bridge",
            Location::Engineering => "Engineering",
            Location::WeaponsBay => "Weapons Bay",
            Location::ScienceLab => "Science Lab",
            Location::Teleporter => "Teleporter",
            Location::SickBay => "Sick Bay",
            Location::CommCenter => "Communications Center",
            Location::Holodeck => "Holodeck",
        }
    }

    /// Resolve an externally supplied location name.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Location> {
        Self::ALL.into_iter().find(|location| location.name() == name)
    }
}

/// Crew skills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    Tactical,
    Engineering,
    Science,
    Medical,
    Leadership,
}

impl Skill {
    pub const ALL: [Skill; 5] = [
        Skill::Tactical,
        Skill::Engineering,
        Skill::Science,
        Skill::Medical,
        Skill::Leadership,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Skill::Tactical => "Tactical",
            Skill::Engineering => "Engineering",
            Skill::Science => "Science",
            Skill::Medical => "Medical",
            Skill::Leadership => "Leadership",
        }
    }
}

/// Crew roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Captain,
    Engineer,
    ScienceOfficer,
    TacticalOfficer,
    MedicalOfficer,
    CommunicationsOfficer,
}

impl Role {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Role::Captain => "Captain",
            Role::Engineer => "Engineer",
            Role::ScienceOfficer => "Science Officer",
            Role::TacticalOfficer => "Tactical Officer",
            Role::MedicalOfficer => "Medical Officer",
            Role::CommunicationsOfficer => "Communications Officer",
        }
    }
}

/// Alert level, monotonically escalating except by explicit rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Yellow,
    Orange,
    Red,
}

impl AlertLevel {
    /// One step up; saturates at Red.
    #[must_use]
    pub fn escalated(self) -> AlertLevel {
        match self {
            AlertLevel::Yellow => AlertLevel::Orange,
            AlertLevel::Orange | AlertLevel::Red => AlertLevel::Red,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AlertLevel::Yellow => "Yellow Alert",
            AlertLevel::Orange => "Orange Alert",
            AlertLevel::Red => "Red Alert",
        }
    }
}

/// An active threat. Created by crisis resolution, destroyed by battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threat {
    pub name: String,
    pub description: String,
    pub difficulty: u8,
}

impl Threat {
    pub fn new(name: &str, description: &str, difficulty: u8) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            difficulty,
        }
    }
}

/// What a crisis card does when resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrisisEffect {
    /// Step one eligible system down a damage tier.
    SystemDamage,
    /// Spawn a threat, or escalate the alert at the threat cap.
    NewThreat,
    /// Every crew member loses an action point (floor 1).
    ActionRestriction,
}

/// A crisis card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisCard {
    pub name: String,
    pub description: String,
    pub effect: CrisisEffect,
    pub severity: u8,
}

impl CrisisCard {
    pub fn new(name: &str, description: &str, effect: CrisisEffect, severity: u8) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            effect,
            severity,
        }
    }

    /// The card synthesized when deck and discard are both empty.
    #[must_use]
    pub fn emergency_alert() -> Self {
        Self::new(
            "Emergency Alert",
            "Ship systems are failing.",
            CrisisEffect::SystemDamage,
            2,
        )
    }
}

/// A crew member template instantiated at setup.
pub struct CrewTemplate {
    pub name: &'static str,
    pub role: Role,
    pub skills: [(Skill, u8); 5],
    pub special_ability: &'static str,
    pub location: Location,
}

/// The six crew templates, in selection order.
pub fn crew_templates() -> Vec<CrewTemplate> {
    vec![
        CrewTemplate {
            name: "Alex Chen",
            role: Role::Engineer,
            skills: [
                (Skill::Engineering, 3),
                (Skill::Tactical, 1),
                (Skill::Science, 2),
                (Skill::Medical, 0),
                (Skill::Leadership, 1),
            ],
            special_ability: "Can repair systems more efficiently",
            location: Location::Engineering,
        },
        CrewTemplate {
            name: "Dr. Maya Patel",
            role: Role::ScienceOfficer,
            skills: [
                (Skill::Engineering, 1),
                (Skill::Tactical, 0),
                (Skill::Science, 3),
                (Skill::Medical, 2),
                (Skill::Leadership, 1),
            ],
            special_ability: "Can analyze threats to find weaknesses",
            location: Location::ScienceLab,
        },
        CrewTemplate {
            name: "Commander Riz Jackson",
            role: Role::TacticalOfficer,
            skills: [
                (Skill::Engineering, 0),
                (Skill::Tactical, 3),
                (Skill::Science, 1),
                (Skill::Medical, 0),
                (Skill::Leadership, 2),
            ],
            special_ability: "Can deal with threats more effectively",
            location: Location::WeaponsBay,
        },
        CrewTemplate {
            name: "Dr. James Wilson",
            role: Role::MedicalOfficer,
            skills: [
                (Skill::Engineering, 0),
                (Skill::Tactical, 0),
                (Skill::Science, 2),
                (Skill::Medical, 3),
                (Skill::Leadership, 1),
            ],
            special_ability: "Can heal and boost crew effectiveness",
            location: Location::SickBay,
        },
        CrewTemplate {
            name: "Lt. Olivia Chen",
            role: Role::CommunicationsOfficer,
            skills: [
                (Skill::Engineering, 1),
                (Skill::Tactical, 1),
                (Skill::Science, 1),
                (Skill::Medical, 0),
                (Skill::Leadership, 3),
            ],
            special_ability: "Can coordinate crew actions efficiently",
            location: Location::CommCenter,
        },
        CrewTemplate {
            name: "Acting Captain Mira Novak",
            role: Role::Captain,
            skills: [
                (Skill::Engineering, 1),
                (Skill::Tactical, 2),
                (Skill::Science, 1),
                (Skill::Medical, 0),
                (Skill::Leadership, 3),
            ],
            special_ability: "Can inspire crew to perform beyond their limits",
            location: Location::Bridge,
        },
    ]
}

/// Threats seeded at setup, in selection order.
pub fn initial_threats() -> Vec<Threat> {
    vec![
        Threat::new("System Cascade Failure", "Ship systems are failing one after another", 3),
        Threat::new("Alien Boarding Party", "Hostile aliens have teleported aboard", 4),
        Threat::new("Energy Drain", "Something is draining the ship's power reserves", 2),
        Threat::new("Computer Malfunction", "Ship's computer is behaving erratically", 3),
    ]
}

/// Threats a `NewThreat` crisis can spawn.
pub fn reinforcement_threats() -> Vec<Threat> {
    vec![
        Threat::new("Alien Saboteur", "An alien has infiltrated the ship", 3),
        Threat::new("Power Fluctuation", "Ship's power is unstable", 2),
        Threat::new("Hull Breach", "The ship's hull has been breached", 4),
        Threat::new("Navigation Error", "Ship's navigation is malfunctioning", 2),
    ]
}

/// The ten-card crisis deck.
pub fn crisis_cards() -> Vec<CrisisCard> {
    vec![
        CrisisCard::new("System Failure", "A critical system has malfunctioned.", CrisisEffect::SystemDamage, 2),
        CrisisCard::new("Alien Boarding", "Hostile aliens have boarded the ship.", CrisisEffect::NewThreat, 3),
        CrisisCard::new("Power Surge", "A power surge has affected ship systems.", CrisisEffect::SystemDamage, 1),
        CrisisCard::new("Communications Interference", "Communications are being jammed.", CrisisEffect::ActionRestriction, 2),
        CrisisCard::new("Hull Breach", "The ship's hull has been breached.", CrisisEffect::SystemDamage, 3),
        CrisisCard::new("Navigation Error", "The ship's navigation is malfunctioning.", CrisisEffect::SystemDamage, 2),
        CrisisCard::new("Alien Attack", "The ship is under attack from alien forces.", CrisisEffect::NewThreat, 3),
        CrisisCard::new("Life Support Failure", "Life support systems are failing.", CrisisEffect::SystemDamage, 3),
        CrisisCard::new("Computer Virus", "Ship's computer has been infected with a virus.", CrisisEffect::ActionRestriction, 2),
        CrisisCard::new("Sensor Malfunction", "Sensors are providing incorrect readings.", CrisisEffect::SystemDamage, 1),
    ]
}

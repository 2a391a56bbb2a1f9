//! Board state for Pandemic.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Deck, GameRng, Terminal};

use super::registry::{CityId, DiseaseColor, DiseaseStatus, EventKind, PlayerRole, WorldMap};

/// Cubes available per color at setup.
pub const CUBES_PER_COLOR: u8 = 24;
/// Research stations in the supply (Atlanta's starting station included).
pub const MAX_STATIONS: usize = 6;
/// Outbreak counter value that loses the game.
pub const OUTBREAK_LIMIT: u8 = 8;
/// Cards a player may hold after drawing.
pub const HAND_LIMIT: usize = 7;
/// Infection-rate track; the index never runs past the end.
pub const INFECTION_RATES: [u8; 7] = [2, 2, 2, 3, 3, 4, 4];
/// City cards of one color needed for a cure (Scientist needs one fewer).
pub const CURE_CARDS: usize = 5;

/// Per-city dynamic state; cubes are indexed by `DiseaseColor::index`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityState {
    pub cubes: [u8; 4],
    pub has_station: bool,
}

impl CityState {
    #[must_use]
    pub fn cubes_of(&self, color: DiseaseColor) -> u8 {
        self.cubes[color.index()]
    }
}

/// A card in the player deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCard {
    City(CityId),
    Event(EventKind),
    Epidemic,
}

/// A card in the infection deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfectionCard(pub CityId);

/// One player: role, position, hand, and received messages.
#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub role: PlayerRole,
    pub location: CityId,
    pub hand: Vec<PlayerCard>,
    pub action_points: u8,
    pub messages: Vector<String>,
}

impl Player {
    /// Position of a city card in the hand, if held.
    #[must_use]
    pub fn card_position(&self, city: CityId) -> Option<usize> {
        self.hand
            .iter()
            .position(|card| matches!(card, PlayerCard::City(id) if *id == city))
    }

    /// Position of an event card in the hand, if held.
    #[must_use]
    pub fn event_position(&self, event: EventKind) -> Option<usize> {
        self.hand
            .iter()
            .position(|card| matches!(card, PlayerCard::Event(kind) if *kind == event))
    }
}

/// The whole Pandemic board.
#[derive(Clone, Debug)]
pub struct BoardState {
    pub map: WorldMap,
    pub cities: Vec<CityState>,
    /// Indexed by `DiseaseColor::index`.
    pub diseases: [DiseaseStatus; 4],
    /// Cubes remaining in the supply, indexed by `DiseaseColor::index`.
    pub supply: [u8; 4],
    pub outbreaks: u8,
    pub infection_rate_index: usize,
    pub player_deck: Deck<PlayerCard>,
    pub infection_deck: Deck<InfectionCard>,
    pub players: Vec<Player>,
    pub current: usize,
    pub ap_baseline: u8,
    /// Set by One Quiet Night; skips (and clears on) the next infection step.
    pub quiet_night: bool,
    pub log: Vector<String>,
    pub rng: GameRng,
}

impl BoardState {
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current]
    }

    #[must_use]
    pub fn city(&self, id: CityId) -> &CityState {
        &self.cities[id.index()]
    }

    pub fn city_mut(&mut self, id: CityId) -> &mut CityState {
        &mut self.cities[id.index()]
    }

    #[must_use]
    pub fn disease_status(&self, color: DiseaseColor) -> DiseaseStatus {
        self.diseases[color.index()]
    }

    pub fn set_disease_status(&mut self, color: DiseaseColor, status: DiseaseStatus) {
        self.diseases[color.index()] = status;
    }

    #[must_use]
    pub fn infection_rate(&self) -> u8 {
        INFECTION_RATES[self.infection_rate_index]
    }

    #[must_use]
    pub fn stations_built(&self) -> usize {
        self.cities.iter().filter(|city| city.has_station).count()
    }

    /// Cubes of one color currently on the board.
    #[must_use]
    pub fn cubes_on_board(&self, color: DiseaseColor) -> u32 {
        self.cities
            .iter()
            .map(|city| u32::from(city.cubes_of(color)))
            .sum()
    }

    /// Append a line to the event log.
    pub fn record(&mut self, entry: String) {
        self.log.push_back(entry);
    }

    /// Display name for a player card.
    #[must_use]
    pub fn card_name(&self, card: &PlayerCard) -> String {
        match card {
            PlayerCard::City(id) => self.map.city(*id).name.clone(),
            PlayerCard::Event(kind) => kind.name().to_string(),
            PlayerCard::Epidemic => "Epidemic".to_string(),
        }
    }

    /// Terminal predicate. Victory is evaluated before every defeat.
    #[must_use]
    pub fn check_terminal(&self) -> Option<Terminal> {
        if self
            .diseases
            .iter()
            .all(|status| *status != DiseaseStatus::Active)
        {
            return Some(Terminal::victory(
                "Victory! All diseases have been cured.".to_string(),
            ));
        }
        if self.outbreaks >= OUTBREAK_LIMIT {
            return Some(Terminal::defeat(
                "Defeat! Too many outbreaks occurred.".to_string(),
            ));
        }
        for color in DiseaseColor::ALL {
            if self.supply[color.index()] == 0
                && self.disease_status(color) != DiseaseStatus::Eradicated
            {
                return Some(Terminal::defeat(format!(
                    "Defeat! Ran out of {} disease cubes.",
                    color.name()
                )));
            }
        }
        if self.player_deck.is_draw_empty() {
            return Some(Terminal::defeat(
                "Defeat! The player deck is empty.".to_string(),
            ));
        }
        None
    }
}

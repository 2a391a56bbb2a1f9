//! Action intents and the action resolver for Pandemic.
//!
//! Only applied actions cost a point (`CostPolicy::ChargeOnSuccess`), so
//! every resolver validates its whole precondition set before touching
//! state: an intent either applies completely or rejects with the state
//! untouched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Outcome;

use super::registry::{DiseaseColor, DiseaseStatus, EventKind, PlayerRole};
use super::state::{BoardState, PlayerCard, CURE_CARDS, MAX_STATIONS};

/// How a move intent travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveMode {
    /// Along an adjacency edge.
    Drive,
    /// Discard the destination's city card.
    DirectFlight,
    /// Discard the current city's card, fly anywhere.
    CharterFlight,
    /// Between two research stations.
    ShuttleFlight,
    /// Operations Expert: from a station anywhere, discarding any city card.
    OperationsMove,
}

/// Which way a knowledge share moves the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShareDirection {
    Give,
    Take,
}

/// One requested player action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PandemicIntent {
    Move {
        destination: String,
        mode: MoveMode,
    },
    /// Treat the named color at the current city.
    Treat { color: String },
    /// Build a research station at the current city.
    BuildStation,
    /// Move a city card between the current player and a named player.
    ShareKnowledge {
        with: String,
        card: String,
        direction: ShareDirection,
    },
    /// Turn in matching city cards at a research station.
    DiscoverCure {
        color: String,
        cards: SmallVec<[String; 5]>,
    },
    PlayEvent {
        event: String,
        city: Option<String>,
        player: Option<String>,
    },
    /// Deliver a message to a same-city player, or to everyone present.
    Communicate {
        to: Option<String>,
        message: String,
    },
    /// End the turn without acting.
    Pass,
    Unknown { action: String },
}

/// Validate and apply one intent.
pub fn resolve(state: &mut BoardState, intent: &PandemicIntent) -> Outcome {
    let outcome = match intent {
        PandemicIntent::Move { destination, mode } => resolve_move(state, destination, *mode),
        PandemicIntent::Treat { color } => resolve_treat(state, color),
        PandemicIntent::BuildStation => resolve_build_station(state),
        PandemicIntent::ShareKnowledge {
            with,
            card,
            direction,
        } => resolve_share(state, with, card, *direction),
        PandemicIntent::DiscoverCure { color, cards } => resolve_cure(state, color, cards),
        PandemicIntent::PlayEvent {
            event,
            city,
            player,
        } => resolve_event(state, event, city.as_deref(), player.as_deref()),
        PandemicIntent::Communicate { to, message } => {
            resolve_communicate(state, to.as_deref(), message)
        }
        PandemicIntent::Pass => Outcome::applied(format!(
            "{} passes.",
            state.current_player().name
        )),
        PandemicIntent::Unknown { action } => {
            Outcome::rejected(format!("Unrecognized action: {action}"))
        }
    };
    state.record(outcome.message.clone());
    outcome
}

fn resolve_move(state: &mut BoardState, destination: &str, mode: MoveMode) -> Outcome {
    let Some(dest) = state.map.lookup(destination) else {
        return Outcome::rejected(format!("Unknown city: {destination}"));
    };
    let player = state.current_player();
    let here = player.location;
    if dest == here {
        return Outcome::rejected(format!("Already in {destination}."));
    }

    // Which card, if any, this mode discards.
    let discard_position = match mode {
        MoveMode::Drive => {
            if !state.map.city(here).neighbors.contains(&dest) {
                return Outcome::rejected(format!(
                    "{} is not connected to {destination}.",
                    state.map.city(here).name
                ));
            }
            None
        }
        MoveMode::DirectFlight => match player.card_position(dest) {
            Some(pos) => Some(pos),
            None => {
                return Outcome::rejected(format!(
                    "Direct flight requires the {destination} city card."
                ))
            }
        },
        MoveMode::CharterFlight => match player.card_position(here) {
            Some(pos) => Some(pos),
            None => {
                return Outcome::rejected(format!(
                    "Charter flight requires the {} city card.",
                    state.map.city(here).name
                ))
            }
        },
        MoveMode::ShuttleFlight => {
            if !state.city(here).has_station || !state.city(dest).has_station {
                return Outcome::rejected(
                    "Shuttle flight requires research stations at both cities.",
                );
            }
            None
        }
        MoveMode::OperationsMove => {
            if player.role != PlayerRole::OperationsExpert {
                return Outcome::rejected("Only the Operations Expert can move this way.");
            }
            if !state.city(here).has_station {
                return Outcome::rejected(
                    "The Operations Expert move starts from a research station.",
                );
            }
            match player
                .hand
                .iter()
                .position(|card| matches!(card, PlayerCard::City(_)))
            {
                Some(pos) => Some(pos),
                None => {
                    return Outcome::rejected(
                        "The Operations Expert move discards a city card.",
                    )
                }
            }
        }
    };

    let name = state.current_player().name.clone();
    let mut note = String::new();
    if let Some(pos) = discard_position {
        let card = state.current_player_mut().hand.remove(pos);
        note = format!(" (discarding {})", state.card_name(&card));
        state.player_deck.discard(card);
    }
    state.current_player_mut().location = dest;
    let mover = state.current;
    medic_auto_clear(state, mover);
    Outcome::applied(format!(
        "{name} moved from {} to {destination}{note}.",
        state.map.city(here).name
    ))
}

fn resolve_treat(state: &mut BoardState, color_name: &str) -> Outcome {
    let Some(color) = DiseaseColor::lookup(color_name) else {
        return Outcome::rejected(format!("Unknown disease color: {color_name}"));
    };
    let here = state.current_player().location;
    let present = state.city(here).cubes_of(color);
    if present == 0 {
        return Outcome::rejected(format!(
            "No {color_name} cubes in {}.",
            state.map.city(here).name
        ));
    }

    let cured = state.disease_status(color) == DiseaseStatus::Cured;
    let removed = if state.current_player().role == PlayerRole::Medic || cured {
        present
    } else {
        1
    };
    state.city_mut(here).cubes[color.index()] -= removed;
    state.supply[color.index()] += removed;
    let name = state.current_player().name.clone();
    let city_name = state.map.city(here).name.clone();
    maybe_eradicate(state, color);
    Outcome::applied(format!(
        "{name} treated {city_name}, removing {removed} {color_name} cube(s)."
    ))
}

fn resolve_build_station(state: &mut BoardState) -> Outcome {
    let here = state.current_player().location;
    if state.city(here).has_station {
        return Outcome::rejected(format!(
            "{} already has a research station.",
            state.map.city(here).name
        ));
    }
    if state.stations_built() >= MAX_STATIONS {
        return Outcome::rejected("All research stations have been built.");
    }
    let free = state.current_player().role == PlayerRole::OperationsExpert;
    if !free {
        let Some(pos) = state.current_player().card_position(here) else {
            return Outcome::rejected(format!(
                "Building here requires the {} city card.",
                state.map.city(here).name
            ));
        };
        let card = state.current_player_mut().hand.remove(pos);
        state.player_deck.discard(card);
    }
    state.city_mut(here).has_station = true;
    Outcome::applied(format!(
        "{} built a research station in {}.",
        state.current_player().name,
        state.map.city(here).name
    ))
}

fn resolve_share(
    state: &mut BoardState,
    with: &str,
    card_name: &str,
    direction: ShareDirection,
) -> Outcome {
    let Some(other_idx) = state.players.iter().position(|p| p.name == with) else {
        return Outcome::rejected(format!("Unknown player: {with}"));
    };
    if other_idx == state.current {
        return Outcome::rejected("Cannot share knowledge with yourself.");
    }
    let Some(card_city) = state.map.lookup(card_name) else {
        return Outcome::rejected(format!("Unknown city card: {card_name}"));
    };
    let here = state.current_player().location;
    if state.players[other_idx].location != here {
        return Outcome::rejected(format!("{with} is not in the same city."));
    }

    let (giver_idx, taker_idx) = match direction {
        ShareDirection::Give => (state.current, other_idx),
        ShareDirection::Take => (other_idx, state.current),
    };
    let Some(pos) = state.players[giver_idx].card_position(card_city) else {
        return Outcome::rejected(format!(
            "{} does not hold the {card_name} card.",
            state.players[giver_idx].name
        ));
    };
    // Only the Researcher may hand off a card that doesn't match the
    // city the players stand in.
    if card_city != here && state.players[giver_idx].role != PlayerRole::Researcher {
        return Outcome::rejected(format!(
            "Sharing {card_name} requires standing in {card_name} (or a Researcher giver)."
        ));
    }

    let card = state.players[giver_idx].hand.remove(pos);
    state.players[taker_idx].hand.push(card);
    Outcome::applied(format!(
        "{} gave the {card_name} card to {}.",
        state.players[giver_idx].name, state.players[taker_idx].name
    ))
}

fn resolve_cure(state: &mut BoardState, color_name: &str, cards: &[String]) -> Outcome {
    let Some(color) = DiseaseColor::lookup(color_name) else {
        return Outcome::rejected(format!("Unknown disease color: {color_name}"));
    };
    if state.disease_status(color) != DiseaseStatus::Active {
        return Outcome::rejected(format!(
            "The {color_name} disease is already cured."
        ));
    }
    let here = state.current_player().location;
    if !state.city(here).has_station {
        return Outcome::rejected("Discovering a cure requires a research station.");
    }
    let required = if state.current_player().role == PlayerRole::Scientist {
        CURE_CARDS - 1
    } else {
        CURE_CARDS
    };
    if cards.len() != required {
        return Outcome::rejected(format!(
            "Curing {color_name} requires exactly {required} matching city cards."
        ));
    }

    // Resolve every named card before removing any.
    let mut positions = Vec::with_capacity(required);
    for card_name in cards {
        let Some(city) = state.map.lookup(card_name) else {
            return Outcome::rejected(format!("Unknown city card: {card_name}"));
        };
        if state.map.city(city).color != color {
            return Outcome::rejected(format!("{card_name} is not a {color_name} city."));
        }
        let Some(pos) = state.current_player().card_position(city) else {
            return Outcome::rejected(format!(
                "{} does not hold the {card_name} card.",
                state.current_player().name
            ));
        };
        if positions.contains(&pos) {
            return Outcome::rejected(format!("{card_name} is listed twice."));
        }
        positions.push(pos);
    }

    positions.sort_unstable_by(|a, b| b.cmp(a));
    for pos in positions {
        let card = state.current_player_mut().hand.remove(pos);
        state.player_deck.discard(card);
    }
    state.set_disease_status(color, DiseaseStatus::Cured);
    let name = state.current_player().name.clone();
    for idx in 0..state.players.len() {
        medic_auto_clear(state, idx);
    }
    maybe_eradicate(state, color);
    Outcome::applied(format!(
        "{name} discovered a cure for the {color_name} disease!"
    ))
}

fn resolve_event(
    state: &mut BoardState,
    event_name: &str,
    city: Option<&str>,
    player: Option<&str>,
) -> Outcome {
    let Some(event) = EventKind::lookup(event_name) else {
        return Outcome::rejected(format!("Unknown event card: {event_name}"));
    };
    if matches!(event, EventKind::Forecast | EventKind::ResilientPopulation) {
        return Outcome::rejected(format!("The {event_name} event is not implemented."));
    }
    let Some(pos) = state.current_player().event_position(event) else {
        return Outcome::rejected(format!(
            "{} does not hold the {event_name} card.",
            state.current_player().name
        ));
    };

    let name = state.current_player().name.clone();
    let outcome = match event {
        EventKind::Airlift => {
            let (Some(city_name), Some(player_name)) = (city, player) else {
                return Outcome::rejected("Airlift names a player and a destination city.");
            };
            let Some(dest) = state.map.lookup(city_name) else {
                return Outcome::rejected(format!("Unknown city: {city_name}"));
            };
            let Some(target_idx) = state.players.iter().position(|p| p.name == player_name)
            else {
                return Outcome::rejected(format!("Unknown player: {player_name}"));
            };
            state.players[target_idx].location = dest;
            medic_auto_clear(state, target_idx);
            Outcome::applied(format!("{name} airlifted {player_name} to {city_name}."))
        }
        EventKind::GovernmentGrant => {
            let Some(city_name) = city else {
                return Outcome::rejected("Government Grant names a city.");
            };
            let Some(dest) = state.map.lookup(city_name) else {
                return Outcome::rejected(format!("Unknown city: {city_name}"));
            };
            if state.city(dest).has_station {
                return Outcome::rejected(format!(
                    "{city_name} already has a research station."
                ));
            }
            if state.stations_built() >= MAX_STATIONS {
                return Outcome::rejected("All research stations have been built.");
            }
            state.city_mut(dest).has_station = true;
            Outcome::applied(format!(
                "{name} played Government Grant: research station built in {city_name}."
            ))
        }
        EventKind::OneQuietNight => {
            state.quiet_night = true;
            Outcome::applied(format!(
                "{name} played One Quiet Night: the next infection step is skipped."
            ))
        }
        EventKind::Forecast | EventKind::ResilientPopulation => unreachable!(),
    };
    let card = state.current_player_mut().hand.remove(pos);
    state.player_deck.discard(card);
    outcome
}

fn resolve_communicate(state: &mut BoardState, to: Option<&str>, message: &str) -> Outcome {
    let here = state.current_player().location;
    let sender = format!(
        "{} ({})",
        state.current_player().name,
        state.current_player().role.name()
    );
    match to {
        Some(receiver_name) => {
            let Some(idx) = state.players.iter().position(|p| p.name == receiver_name)
            else {
                return Outcome::rejected(format!("Unknown player: {receiver_name}"));
            };
            if state.players[idx].location != here {
                return Outcome::rejected(format!(
                    "{receiver_name} is not in the same city."
                ));
            }
            state.players[idx]
                .messages
                .push_back(format!("{sender}: {message}"));
            Outcome::applied(format!(
                "{} sent a message to {receiver_name}.",
                state.current_player().name
            ))
        }
        None => {
            let current = state.current;
            let mut delivered = 0;
            for idx in 0..state.players.len() {
                if idx != current && state.players[idx].location == here {
                    state.players[idx]
                        .messages
                        .push_back(format!("{sender}: {message}"));
                    delivered += 1;
                }
            }
            if delivered == 0 {
                return Outcome::rejected("Nobody else is here to hear the broadcast.");
            }
            Outcome::applied(format!(
                "{} broadcast a message to {delivered} player(s).",
                state.current_player().name
            ))
        }
    }
}

/// A Medic standing in a city clears every cube of each cured color
/// there, at no action cost.
pub(crate) fn medic_auto_clear(state: &mut BoardState, player_idx: usize) {
    if state.players[player_idx].role != PlayerRole::Medic {
        return;
    }
    let here = state.players[player_idx].location;
    for color in DiseaseColor::ALL {
        if state.disease_status(color) != DiseaseStatus::Cured {
            continue;
        }
        let present = state.city(here).cubes_of(color);
        if present == 0 {
            continue;
        }
        state.city_mut(here).cubes[color.index()] = 0;
        state.supply[color.index()] += present;
        state.record(format!(
            "The Medic clears {present} {} cube(s) from {}.",
            color.name(),
            state.map.city(here).name
        ));
        maybe_eradicate(state, color);
    }
}

/// Treating the last cube of a cured color eradicates it.
fn maybe_eradicate(state: &mut BoardState, color: DiseaseColor) {
    if state.disease_status(color) == DiseaseStatus::Cured && state.cubes_on_board(color) == 0 {
        state.set_disease_status(color, DiseaseStatus::Eradicated);
        state.record(format!(
            "The {} disease has been eradicated!",
            color.name()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SimConfig;
    use crate::pandemic::infection::add_cube;
    use crate::pandemic::registry::CityId;
    use crate::pandemic::setup;

    fn state() -> BoardState {
        setup::new_state(&SimConfig::default())
    }

    fn city(state: &BoardState, name: &str) -> CityId {
        state.map.lookup(name).unwrap()
    }

    fn give_card(state: &mut BoardState, player_idx: usize, card: PlayerCard) {
        state.players[player_idx].hand.push(card);
    }

    fn set_role(state: &mut BoardState, player_idx: usize, role: PlayerRole) {
        state.players[player_idx].role = role;
    }

    #[test]
    fn test_drive_requires_adjacency() {
        let mut s = state();
        let ok = resolve(
            &mut s,
            &PandemicIntent::Move {
                destination: "Chicago".into(),
                mode: MoveMode::Drive,
            },
        );
        assert!(ok.applied);
        assert_eq!(s.current_player().location, city(&s, "Chicago"));

        let far = resolve(
            &mut s,
            &PandemicIntent::Move {
                destination: "Tokyo".into(),
                mode: MoveMode::Drive,
            },
        );
        assert!(!far.applied);
        assert_eq!(s.current_player().location, city(&s, "Chicago"));
    }

    #[test]
    fn test_move_unknown_city_rejected() {
        let mut s = state();
        let before = s.current_player().location;
        let outcome = resolve(
            &mut s,
            &PandemicIntent::Move {
                destination: "Gotham".into(),
                mode: MoveMode::Drive,
            },
        );
        assert!(!outcome.applied);
        assert_eq!(s.current_player().location, before);
    }

    #[test]
    fn test_direct_flight_discards_destination_card() {
        let mut s = state();
        let tokyo = city(&s, "Tokyo");
        s.current_player_mut().hand = vec![PlayerCard::City(tokyo)];
        let outcome = resolve(
            &mut s,
            &PandemicIntent::Move {
                destination: "Tokyo".into(),
                mode: MoveMode::DirectFlight,
            },
        );
        assert!(outcome.applied);
        assert_eq!(s.current_player().location, tokyo);
        assert!(s.current_player().hand.is_empty());
        assert_eq!(s.player_deck.discard_len(), 1);
    }

    #[test]
    fn test_charter_flight_discards_current_city_card() {
        let mut s = state();
        let atlanta = city(&s, "Atlanta");
        s.current_player_mut().hand = vec![PlayerCard::City(atlanta)];
        let outcome = resolve(
            &mut s,
            &PandemicIntent::Move {
                destination: "Beijing".into(),
                mode: MoveMode::CharterFlight,
            },
        );
        assert!(outcome.applied);
        assert_eq!(s.current_player().location, city(&s, "Beijing"));
        assert!(s.current_player().hand.is_empty());
    }

    #[test]
    fn test_shuttle_needs_stations_both_ends() {
        let mut s = state();
        let outcome = resolve(
            &mut s,
            &PandemicIntent::Move {
                destination: "Paris".into(),
                mode: MoveMode::ShuttleFlight,
            },
        );
        assert!(!outcome.applied);

        s.city_mut(city(&s, "Paris")).has_station = true;
        let outcome = resolve(
            &mut s,
            &PandemicIntent::Move {
                destination: "Paris".into(),
                mode: MoveMode::ShuttleFlight,
            },
        );
        assert!(outcome.applied);
    }

    #[test]
    fn test_operations_move_from_station() {
        let mut s = state();
        set_role(&mut s, 0, PlayerRole::OperationsExpert);
        let osaka = city(&s, "Osaka");
        s.current_player_mut().hand = vec![PlayerCard::City(osaka)];
        let outcome = resolve(
            &mut s,
            &PandemicIntent::Move {
                destination: "Moscow".into(),
                mode: MoveMode::OperationsMove,
            },
        );
        assert!(outcome.applied);
        assert_eq!(s.current_player().location, city(&s, "Moscow"));
        assert!(s.current_player().hand.is_empty());
    }

    #[test]
    fn test_treat_removes_one_cube() {
        let mut s = state();
        set_role(&mut s, 0, PlayerRole::Dispatcher);
        let atlanta = city(&s, "Atlanta");
        s.city_mut(atlanta).cubes[DiseaseColor::Blue.index()] = 2;
        s.supply[DiseaseColor::Blue.index()] = 20;
        let outcome = resolve(&mut s, &PandemicIntent::Treat { color: "Blue".into() });
        assert!(outcome.applied);
        assert_eq!(s.city(atlanta).cubes_of(DiseaseColor::Blue), 1);
        assert_eq!(s.supply[DiseaseColor::Blue.index()], 21);
    }

    #[test]
    fn test_medic_treats_all_cubes() {
        let mut s = state();
        set_role(&mut s, 0, PlayerRole::Medic);
        let atlanta = city(&s, "Atlanta");
        s.city_mut(atlanta).cubes[DiseaseColor::Blue.index()] = 3;
        s.supply[DiseaseColor::Blue.index()] = 18;
        let outcome = resolve(&mut s, &PandemicIntent::Treat { color: "Blue".into() });
        assert!(outcome.applied);
        assert_eq!(s.city(atlanta).cubes_of(DiseaseColor::Blue), 0);
        assert_eq!(s.supply[DiseaseColor::Blue.index()], 21);
    }

    #[test]
    fn test_treat_with_no_cubes_rejected() {
        let mut s = state();
        let atlanta = city(&s, "Atlanta");
        s.city_mut(atlanta).cubes = [0; 4];
        let outcome = resolve(&mut s, &PandemicIntent::Treat { color: "Red".into() });
        assert!(!outcome.applied);
    }

    #[test]
    fn test_treating_last_cube_of_cured_color_eradicates() {
        let mut s = state();
        // A single red cube anywhere, disease cured.
        for c in &mut s.cities {
            c.cubes = [0; 4];
        }
        s.supply = [24; 4];
        let atlanta = city(&s, "Atlanta");
        s.city_mut(atlanta).cubes[DiseaseColor::Red.index()] = 1;
        s.supply[DiseaseColor::Red.index()] = 23;
        s.set_disease_status(DiseaseColor::Red, DiseaseStatus::Cured);

        let outcome = resolve(&mut s, &PandemicIntent::Treat { color: "Red".into() });
        assert!(outcome.applied);
        assert_eq!(
            s.disease_status(DiseaseColor::Red),
            DiseaseStatus::Eradicated
        );
        // Eradicated colors no longer take cubes.
        add_cube(&mut s, atlanta, DiseaseColor::Red);
        assert_eq!(s.city(atlanta).cubes_of(DiseaseColor::Red), 0);
    }

    #[test]
    fn test_build_station_discards_city_card() {
        let mut s = state();
        let chicago = city(&s, "Chicago");
        s.current_player_mut().location = chicago;
        s.current_player_mut().hand = vec![PlayerCard::City(chicago)];
        let outcome = resolve(&mut s, &PandemicIntent::BuildStation);
        assert!(outcome.applied);
        assert!(s.city(chicago).has_station);
        assert!(s.current_player().hand.is_empty());
    }

    #[test]
    fn test_build_station_duplicate_rejected() {
        let mut s = state();
        let atlanta = city(&s, "Atlanta");
        s.current_player_mut().hand = vec![PlayerCard::City(atlanta)];
        let outcome = resolve(&mut s, &PandemicIntent::BuildStation);
        assert!(!outcome.applied);
        assert_eq!(s.current_player().hand.len(), 1);
    }

    #[test]
    fn test_operations_expert_builds_free() {
        let mut s = state();
        set_role(&mut s, 0, PlayerRole::OperationsExpert);
        let chicago = city(&s, "Chicago");
        s.current_player_mut().location = chicago;
        let hand_before = s.current_player().hand.len();
        let outcome = resolve(&mut s, &PandemicIntent::BuildStation);
        assert!(outcome.applied);
        assert!(s.city(chicago).has_station);
        assert_eq!(s.current_player().hand.len(), hand_before);
    }

    #[test]
    fn test_station_supply_limit() {
        let mut s = state();
        set_role(&mut s, 0, PlayerRole::OperationsExpert);
        let names = ["Chicago", "Paris", "Tokyo", "Cairo", "Lima"];
        for name in names {
            let id = city(&s, name);
            s.city_mut(id).has_station = true;
        }
        assert_eq!(s.stations_built(), MAX_STATIONS);
        s.current_player_mut().location = city(&s, "Moscow");
        let outcome = resolve(&mut s, &PandemicIntent::BuildStation);
        assert!(!outcome.applied);
    }

    #[test]
    fn test_scientist_cures_with_four_cards() {
        let mut s = state();
        set_role(&mut s, 0, PlayerRole::Scientist);
        s.current_player_mut().hand.clear();
        let cards = ["Atlanta", "Chicago", "Montreal", "New York"];
        for name in cards {
            let id = city(&s, name);
            give_card(&mut s, 0, PlayerCard::City(id));
        }
        let outcome = resolve(
            &mut s,
            &PandemicIntent::DiscoverCure {
                color: "Blue".into(),
                cards: cards.iter().map(|c| (*c).to_string()).collect(),
            },
        );
        assert!(outcome.applied);
        assert_eq!(s.disease_status(DiseaseColor::Blue), DiseaseStatus::Cured);
        assert!(s.current_player().hand.is_empty());
        assert_eq!(s.player_deck.discard_len(), 4);
    }

    #[test]
    fn test_cure_needs_five_cards_without_scientist() {
        let mut s = state();
        set_role(&mut s, 0, PlayerRole::Dispatcher);
        s.current_player_mut().hand.clear();
        let cards = ["Atlanta", "Chicago", "Montreal", "New York"];
        for name in cards {
            let id = city(&s, name);
            give_card(&mut s, 0, PlayerCard::City(id));
        }
        let outcome = resolve(
            &mut s,
            &PandemicIntent::DiscoverCure {
                color: "Blue".into(),
                cards: cards.iter().map(|c| (*c).to_string()).collect(),
            },
        );
        assert!(!outcome.applied);
        assert_eq!(s.disease_status(DiseaseColor::Blue), DiseaseStatus::Active);
        assert_eq!(s.current_player().hand.len(), 4);
    }

    #[test]
    fn test_cure_requires_station_and_matching_colors() {
        let mut s = state();
        set_role(&mut s, 0, PlayerRole::Scientist);
        s.current_player_mut().hand.clear();
        let cards = ["Atlanta", "Chicago", "Montreal", "Tokyo"];
        for name in cards {
            let id = city(&s, name);
            give_card(&mut s, 0, PlayerCard::City(id));
        }
        let outcome = resolve(
            &mut s,
            &PandemicIntent::DiscoverCure {
                color: "Blue".into(),
                cards: cards.iter().map(|c| (*c).to_string()).collect(),
            },
        );
        assert!(!outcome.applied);
        assert!(outcome.message.contains("Tokyo"));
        assert_eq!(s.current_player().hand.len(), 4);
    }

    #[test]
    fn test_cure_triggers_medic_auto_clear() {
        let mut s = state();
        set_role(&mut s, 0, PlayerRole::Scientist);
        set_role(&mut s, 1, PlayerRole::Medic);
        let paris = city(&s, "Paris");
        s.players[1].location = paris;
        s.city_mut(paris).cubes[DiseaseColor::Blue.index()] += 2;
        s.supply[DiseaseColor::Blue.index()] -= 2;

        s.current_player_mut().hand.clear();
        let cards = ["Atlanta", "Chicago", "Montreal", "New York"];
        for name in cards {
            let id = city(&s, name);
            give_card(&mut s, 0, PlayerCard::City(id));
        }
        let outcome = resolve(
            &mut s,
            &PandemicIntent::DiscoverCure {
                color: "Blue".into(),
                cards: cards.iter().map(|c| (*c).to_string()).collect(),
            },
        );
        assert!(outcome.applied);
        assert_eq!(s.city(paris).cubes_of(DiseaseColor::Blue), 0);
    }

    #[test]
    fn test_share_requires_matching_city() {
        let mut s = state();
        set_role(&mut s, 0, PlayerRole::Dispatcher);
        let tokyo = city(&s, "Tokyo");
        s.players[0].hand = vec![PlayerCard::City(tokyo)];
        let other = s.players[1].name.clone();
        let outcome = resolve(
            &mut s,
            &PandemicIntent::ShareKnowledge {
                with: other,
                card: "Tokyo".into(),
                direction: ShareDirection::Give,
            },
        );
        assert!(!outcome.applied);
        assert_eq!(s.players[0].hand.len(), 1);
    }

    #[test]
    fn test_share_current_city_card() {
        let mut s = state();
        set_role(&mut s, 0, PlayerRole::Dispatcher);
        let atlanta = city(&s, "Atlanta");
        s.players[0].hand = vec![PlayerCard::City(atlanta)];
        s.players[1].hand.clear();
        let other = s.players[1].name.clone();
        let outcome = resolve(
            &mut s,
            &PandemicIntent::ShareKnowledge {
                with: other,
                card: "Atlanta".into(),
                direction: ShareDirection::Give,
            },
        );
        assert!(outcome.applied);
        assert!(s.players[0].hand.is_empty());
        assert_eq!(s.players[1].hand.len(), 1);
    }

    #[test]
    fn test_researcher_bypass_both_directions() {
        let mut s = state();
        let tokyo = city(&s, "Tokyo");

        // Researcher gives any card.
        set_role(&mut s, 0, PlayerRole::Researcher);
        set_role(&mut s, 1, PlayerRole::Dispatcher);
        s.players[0].hand = vec![PlayerCard::City(tokyo)];
        s.players[1].hand.clear();
        let other = s.players[1].name.clone();
        let outcome = resolve(
            &mut s,
            &PandemicIntent::ShareKnowledge {
                with: other.clone(),
                card: "Tokyo".into(),
                direction: ShareDirection::Give,
            },
        );
        assert!(outcome.applied);
        assert_eq!(s.players[1].hand.len(), 1);

        // Taking from a Researcher holder also bypasses the city match.
        set_role(&mut s, 1, PlayerRole::Researcher);
        let outcome = resolve(
            &mut s,
            &PandemicIntent::ShareKnowledge {
                with: other,
                card: "Tokyo".into(),
                direction: ShareDirection::Take,
            },
        );
        assert!(outcome.applied);
        assert_eq!(s.players[0].hand.len(), 1);
        assert!(s.players[1].hand.is_empty());
    }

    #[test]
    fn test_quiet_night_event() {
        let mut s = state();
        s.current_player_mut().hand = vec![PlayerCard::Event(EventKind::OneQuietNight)];
        let outcome = resolve(
            &mut s,
            &PandemicIntent::PlayEvent {
                event: "One Quiet Night".into(),
                city: None,
                player: None,
            },
        );
        assert!(outcome.applied);
        assert!(s.quiet_night);
        assert!(s.current_player().hand.is_empty());
    }

    #[test]
    fn test_airlift_moves_named_player() {
        let mut s = state();
        s.current_player_mut().hand = vec![PlayerCard::Event(EventKind::Airlift)];
        let target = s.players[1].name.clone();
        let outcome = resolve(
            &mut s,
            &PandemicIntent::PlayEvent {
                event: "Airlift".into(),
                city: Some("Tokyo".into()),
                player: Some(target),
            },
        );
        assert!(outcome.applied);
        assert_eq!(s.players[1].location, city(&s, "Tokyo"));
    }

    #[test]
    fn test_forecast_rejected_and_card_kept() {
        let mut s = state();
        s.current_player_mut().hand = vec![PlayerCard::Event(EventKind::Forecast)];
        let outcome = resolve(
            &mut s,
            &PandemicIntent::PlayEvent {
                event: "Forecast".into(),
                city: None,
                player: None,
            },
        );
        assert!(!outcome.applied);
        assert_eq!(s.current_player().hand.len(), 1);
    }

    #[test]
    fn test_communicate_same_city() {
        let mut s = state();
        let other = s.players[1].name.clone();
        let outcome = resolve(
            &mut s,
            &PandemicIntent::Communicate {
                to: Some(other),
                message: "Cure blue first.".into(),
            },
        );
        assert!(outcome.applied);
        assert_eq!(s.players[1].messages.len(), 1);
    }

    #[test]
    fn test_communicate_requires_co_location() {
        let mut s = state();
        s.players[1].location = city(&s, "Tokyo");
        let other = s.players[1].name.clone();
        let outcome = resolve(
            &mut s,
            &PandemicIntent::Communicate {
                to: Some(other),
                message: "hello?".into(),
            },
        );
        assert!(!outcome.applied);
        assert!(s.players[1].messages.is_empty());
    }

    #[test]
    fn test_medic_arrival_clears_cured_cubes() {
        let mut s = state();
        set_role(&mut s, 0, PlayerRole::Medic);
        s.set_disease_status(DiseaseColor::Blue, DiseaseStatus::Cured);
        let chicago = city(&s, "Chicago");
        for c in &mut s.cities {
            c.cubes = [0; 4];
        }
        s.supply = [24; 4];
        s.city_mut(chicago).cubes[DiseaseColor::Blue.index()] = 2;
        s.supply[DiseaseColor::Blue.index()] = 22;
        let supply_before = s.supply[DiseaseColor::Blue.index()];

        let outcome = resolve(
            &mut s,
            &PandemicIntent::Move {
                destination: "Chicago".into(),
                mode: MoveMode::Drive,
            },
        );
        assert!(outcome.applied);
        assert_eq!(s.city(chicago).cubes_of(DiseaseColor::Blue), 0);
        assert_eq!(s.supply[DiseaseColor::Blue.index()], supply_before + 2);
    }
}

//! Board construction for Pandemic.
//!
//! Player counts are clamped to 2-4. Difficulty sets the number of
//! Epidemic cards shuffled into the player deck (4/5/6). Initial hands
//! are dealt before the Epidemic cards go in, so nobody starts holding
//! one.

use tracing::debug;

use crate::core::{Deck, Difficulty, GameRng, SimConfig};

use super::registry::{DiseaseStatus, EventKind, PlayerRole, WorldMap};
use super::state::{BoardState, CityState, InfectionCard, Player, PlayerCard, CUBES_PER_COLOR};

/// Build a fresh board from the simulation config.
#[must_use]
pub fn new_state(config: &SimConfig) -> BoardState {
    let player_count = config.actors.clamp(2, 4);
    let epidemic_count = match config.difficulty {
        Difficulty::Easy => 4,
        Difficulty::Normal => 5,
        Difficulty::Hard => 6,
    };
    let mut rng = GameRng::new(config.seed);

    let map = WorldMap::standard();
    let mut cities = vec![CityState::default(); map.len()];
    let atlanta = map.lookup("Atlanta").expect("Atlanta is on the standard map");
    cities[atlanta.index()].has_station = true;

    let mut roles: Vec<PlayerRole> = PlayerRole::ALL.to_vec();
    rng.shuffle(&mut roles);
    let players: Vec<Player> = roles
        .into_iter()
        .take(player_count)
        .enumerate()
        .map(|(idx, role)| Player {
            name: format!("Player {}", idx + 1),
            role,
            location: atlanta,
            hand: Vec::new(),
            action_points: 4,
            messages: im::Vector::new(),
        })
        .collect();

    let mut infection_deck = Deck::new(map.ids().map(InfectionCard).collect());
    infection_deck.shuffle(&mut rng);

    let mut state = BoardState {
        cities,
        diseases: [DiseaseStatus::Active; 4],
        supply: [CUBES_PER_COLOR; 4],
        outbreaks: 0,
        infection_rate_index: 0,
        player_deck: Deck::new(Vec::new()),
        infection_deck,
        players,
        current: 0,
        ap_baseline: 4,
        quiet_night: false,
        log: im::Vector::new(),
        rng,
        map,
    };

    initial_infections(&mut state);
    build_player_deck(&mut state, player_count, epidemic_count);
    debug!(
        players = player_count,
        epidemics = epidemic_count,
        "board set up"
    );
    state.record(format!(
        "Game begins with {player_count} players and {epidemic_count} epidemic cards."
    ));
    state
}

/// Three cities get 3 cubes, three get 2, three get 1, all of their own
/// color. Fresh cities cannot outbreak here, so cube placement is direct.
fn initial_infections(state: &mut BoardState) {
    for cubes in [3u8, 2, 1] {
        for _ in 0..3 {
            let Some(card) = state.infection_deck.draw() else {
                return;
            };
            let color = state.map.city(card.0).color;
            let city = &mut state.cities[card.0.index()];
            city.cubes[color.index()] += cubes;
            state.supply[color.index()] -= cubes;
            state.record(format!(
                "{} starts with {} {} cube(s).",
                state.map.city(card.0).name,
                cubes,
                color.name()
            ));
            state.infection_deck.discard(card);
        }
    }
}

/// Deal hands from the shuffled city+event cards, then split the rest
/// into piles, shuffle one Epidemic into each, and stack them.
fn build_player_deck(state: &mut BoardState, player_count: usize, epidemic_count: usize) {
    let mut cards: Vec<PlayerCard> = state.map.ids().map(PlayerCard::City).collect();
    cards.extend(EventKind::ALL.into_iter().map(PlayerCard::Event));
    state.rng.shuffle(&mut cards);

    let per_player = match player_count {
        2 => 4,
        3 => 3,
        _ => 2,
    };
    for player in &mut state.players {
        for _ in 0..per_player {
            if let Some(card) = cards.pop() {
                player.hand.push(card);
            }
        }
    }

    let pile_size = cards.len() / epidemic_count;
    let mut draw_pile = Vec::with_capacity(cards.len() + epidemic_count);
    for pile_idx in 0..epidemic_count {
        let start = pile_idx * pile_size;
        let end = if pile_idx + 1 == epidemic_count {
            cards.len()
        } else {
            start + pile_size
        };
        let mut pile: Vec<PlayerCard> = cards[start..end].to_vec();
        pile.push(PlayerCard::Epidemic);
        state.rng.shuffle(&mut pile);
        draw_pile.extend(pile);
    }
    state.player_deck = Deck::new(draw_pile);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pandemic::registry::DiseaseColor;

    #[test]
    fn test_default_setup_counts() {
        let state = new_state(&SimConfig::default());
        assert_eq!(state.players.len(), 2);
        assert_eq!(state.current, 0);
        assert_eq!(state.infection_rate(), 2);
        assert_eq!(state.outbreaks, 0);
        for player in &state.players {
            assert_eq!(player.hand.len(), 4);
            assert_eq!(player.action_points, 4);
            assert_eq!(state.map.city(player.location).name, "Atlanta");
        }
    }

    #[test]
    fn test_atlanta_starts_with_station() {
        let state = new_state(&SimConfig::default());
        let atlanta = state.map.lookup("Atlanta").unwrap();
        assert!(state.city(atlanta).has_station);
        assert_eq!(state.stations_built(), 1);
    }

    #[test]
    fn test_epidemic_count_by_difficulty() {
        for (difficulty, expected) in [
            (Difficulty::Easy, 4),
            (Difficulty::Normal, 5),
            (Difficulty::Hard, 6),
        ] {
            let config = SimConfig::default().with_difficulty(difficulty);
            let state = new_state(&config);
            let epidemics = state
                .player_deck
                .draw_pile()
                .iter()
                .filter(|card| matches!(card, PlayerCard::Epidemic))
                .count();
            assert_eq!(epidemics, expected);
        }
    }

    #[test]
    fn test_nobody_dealt_an_epidemic() {
        for actors in 2..=4 {
            let config = SimConfig::default().with_actors(actors);
            let state = new_state(&config);
            for player in &state.players {
                assert!(!player.hand.contains(&PlayerCard::Epidemic));
            }
        }
    }

    #[test]
    fn test_deal_size_by_player_count() {
        for (actors, per_player) in [(2usize, 4usize), (3, 3), (4, 2)] {
            let config = SimConfig::default().with_actors(actors);
            let state = new_state(&config);
            assert_eq!(state.players.len(), actors);
            for player in &state.players {
                assert_eq!(player.hand.len(), per_player);
            }
        }
    }

    #[test]
    fn test_player_count_clamped() {
        assert_eq!(new_state(&SimConfig::default().with_actors(1)).players.len(), 2);
        assert_eq!(new_state(&SimConfig::default().with_actors(9)).players.len(), 4);
    }

    #[test]
    fn test_roles_are_distinct() {
        let state = new_state(&SimConfig::default().with_actors(4));
        let mut roles: Vec<PlayerRole> = state.players.iter().map(|p| p.role).collect();
        roles.sort();
        roles.dedup();
        assert_eq!(roles.len(), 4);
    }

    #[test]
    fn test_initial_infections_place_eighteen_cubes() {
        let state = new_state(&SimConfig::default());
        let on_board: u32 = DiseaseColor::ALL
            .into_iter()
            .map(|color| state.cubes_on_board(color))
            .sum();
        assert_eq!(on_board, 18);
        assert_eq!(state.infection_deck.discard_len(), 9);
        assert_eq!(state.infection_deck.draw_len(), 48 - 9);
    }

    #[test]
    fn test_deck_holds_every_city_card_once() {
        let state = new_state(&SimConfig::default());
        let mut city_cards = 0;
        for card in state.player_deck.draw_pile() {
            if matches!(card, PlayerCard::City(_)) {
                city_cards += 1;
            }
        }
        for player in &state.players {
            for card in &player.hand {
                if matches!(card, PlayerCard::City(_)) {
                    city_cards += 1;
                }
            }
        }
        assert_eq!(city_cards, 48);
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = new_state(&SimConfig::default().with_seed(7));
        let b = new_state(&SimConfig::default().with_seed(7));
        assert_eq!(a.cities, b.cities);
        for (pa, pb) in a.players.iter().zip(&b.players) {
            assert_eq!(pa.role, pb.role);
            assert_eq!(pa.hand, pb.hand);
        }
    }
}

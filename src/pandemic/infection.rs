//! Cube placement, outbreak cascades, epidemics, and the per-turn draw
//! and infection steps.
//!
//! All cube additions funnel through [`add_cube`], the one routine that
//! knows about eradication, supply limits, and outbreak chains. A chain
//! carries a visited set keyed by city, so a cycle in the map can never
//! cascade through the same city twice.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use super::registry::{CityId, DiseaseColor, DiseaseStatus};
use super::state::{BoardState, PlayerCard, HAND_LIMIT, INFECTION_RATES, OUTBREAK_LIMIT};

/// Add one cube of `color` to `city`, cascading outbreaks as needed.
///
/// Eradicated colors and an exhausted supply add nothing; the supply
/// case is already terminal, and the checker reports it.
pub fn add_cube(state: &mut BoardState, city: CityId, color: DiseaseColor) {
    let mut visited = FxHashSet::default();
    add_cube_chained(state, city, color, &mut visited);
}

fn add_cube_chained(
    state: &mut BoardState,
    city: CityId,
    color: DiseaseColor,
    visited: &mut FxHashSet<CityId>,
) {
    if state.disease_status(color) == DiseaseStatus::Eradicated {
        return;
    }
    if state.supply[color.index()] == 0 {
        return;
    }
    if state.city(city).cubes_of(color) >= 3 {
        outbreak(state, city, color, visited);
    } else {
        state.city_mut(city).cubes[color.index()] += 1;
        state.supply[color.index()] -= 1;
    }
}

/// The 4th cube: bump the counter and spread one cube to each neighbor.
fn outbreak(
    state: &mut BoardState,
    city: CityId,
    color: DiseaseColor,
    visited: &mut FxHashSet<CityId>,
) {
    if !visited.insert(city) {
        return;
    }
    state.outbreaks = (state.outbreaks + 1).min(OUTBREAK_LIMIT);
    warn!(
        city = %state.map.city(city).name,
        color = color.name(),
        count = state.outbreaks,
        "outbreak"
    );
    state.record(format!(
        "Outbreak in {}! ({}/{})",
        state.map.city(city).name,
        state.outbreaks,
        OUTBREAK_LIMIT
    ));
    if state.outbreaks >= OUTBREAK_LIMIT {
        return;
    }
    let neighbors = state.map.city(city).neighbors.clone();
    for neighbor in neighbors {
        if visited.contains(&neighbor) {
            continue;
        }
        add_cube_chained(state, neighbor, color, visited);
        if state.outbreaks >= OUTBREAK_LIMIT {
            return;
        }
    }
}

/// Step (b) of the turn: draw exactly 2 player cards.
///
/// Epidemics resolve immediately; other cards join the hand, and a hand
/// over the limit discards its oldest card. Early-exits the moment the
/// board turns terminal.
pub fn draw_player_cards(state: &mut BoardState) {
    for _ in 0..2 {
        let Some(card) = state.player_deck.draw() else {
            return;
        };
        match card {
            PlayerCard::Epidemic => {
                resolve_epidemic(state);
                state.player_deck.discard(PlayerCard::Epidemic);
            }
            card => {
                let name = state.card_name(&card);
                let player_name = state.current_player().name.clone();
                state.record(format!("{player_name} drew {name}."));
                let player = state.current_player_mut();
                player.hand.push(card);
                if player.hand.len() > HAND_LIMIT {
                    let discarded = player.hand.remove(0);
                    let discarded_name = state.card_name(&discarded);
                    state.player_deck.discard(discarded);
                    state.record(format!(
                        "{player_name} discards {discarded_name} (hand limit reached)."
                    ));
                }
            }
        }
        if state.check_terminal().is_some() {
            return;
        }
    }
}

/// Increase the rate, infect the bottom infection card's city with 3
/// cubes, then intensify (shuffle the infection discard onto the top of
/// the deck).
fn resolve_epidemic(state: &mut BoardState) {
    state.infection_rate_index =
        (state.infection_rate_index + 1).min(INFECTION_RATES.len() - 1);
    debug!(rate = state.infection_rate(), "epidemic");
    state.record("EPIDEMIC!".to_string());

    if let Some(card) = state.infection_deck.draw_bottom() {
        let color = state.map.city(card.0).color;
        state.record(format!("Epidemic strikes {}!", state.map.city(card.0).name));
        for _ in 0..3 {
            add_cube(state, card.0, color);
        }
        state.infection_deck.discard(card);
    }

    state.infection_deck.intensify(&mut state.rng);
}

/// Step (c) of the turn: draw infection-rate cards and infect each city
/// with one cube of its own color. One Quiet Night skips the whole step.
pub fn infect_cities(state: &mut BoardState) {
    if state.quiet_night {
        state.quiet_night = false;
        state.record("One Quiet Night: the infection step is skipped.".to_string());
        return;
    }
    for _ in 0..state.infection_rate() {
        let Some(card) = state.infection_deck.draw_reshuffling(&mut state.rng) else {
            break;
        };
        let color = state.map.city(card.0).color;
        state.record(format!(
            "Infecting {} with the {} disease.",
            state.map.city(card.0).name,
            color.name()
        ));
        add_cube(state, card.0, color);
        state.infection_deck.discard(card);
        if state.check_terminal().is_some() {
            return;
        }
    }
}

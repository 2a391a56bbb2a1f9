//! Ordered card decks with a paired discard pile.
//!
//! The top of the draw pile is the end of the vec. Cards only move between
//! the draw pile, the discard pile, and the caller, so
//! `draw_len() + discard_len()` plus whatever the caller holds is constant
//! across any sequence of operations — except the documented
//! `draw_or_synthesize` escape valve, which mints a replacement card when
//! both piles are empty.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// A draw pile plus its discard pile.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck<T> {
    draw_pile: Vec<T>,
    discard_pile: Vec<T>,
}

impl<T> Deck<T> {
    /// Create a deck from an ordered pile (last element = top).
    #[must_use]
    pub fn new(cards: Vec<T>) -> Self {
        Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
        }
    }

    /// Shuffle the draw pile.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.draw_pile);
    }

    /// Draw the top card. Does not touch the discard pile.
    pub fn draw(&mut self) -> Option<T> {
        self.draw_pile.pop()
    }

    /// Draw the bottom card of the draw pile.
    pub fn draw_bottom(&mut self) -> Option<T> {
        if self.draw_pile.is_empty() {
            None
        } else {
            Some(self.draw_pile.remove(0))
        }
    }

    /// Draw the top card, reshuffling the discard pile into an empty draw
    /// pile first. Returns `None` only when both piles are empty.
    pub fn draw_reshuffling(&mut self, rng: &mut GameRng) -> Option<T> {
        if self.draw_pile.is_empty() && !self.discard_pile.is_empty() {
            tracing::debug!(cards = self.discard_pile.len(), "reshuffling discard into deck");
            std::mem::swap(&mut self.draw_pile, &mut self.discard_pile);
            rng.shuffle(&mut self.draw_pile);
        }
        self.draw_pile.pop()
    }

    /// Draw with the escape valve: when both piles are empty, synthesize a
    /// default card instead of failing.
    pub fn draw_or_synthesize(&mut self, rng: &mut GameRng, default: impl FnOnce() -> T) -> T {
        match self.draw_reshuffling(rng) {
            Some(card) => card,
            None => {
                tracing::debug!("deck and discard empty, synthesizing default card");
                default()
            }
        }
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: T) {
        self.discard_pile.push(card);
    }

    /// Shuffle the discard pile and stack it on top of the draw pile.
    ///
    /// The epidemic "intensify" step: discarded cards come back soon.
    pub fn intensify(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.discard_pile);
        self.draw_pile.append(&mut self.discard_pile);
    }

    /// Cards remaining in the draw pile.
    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Total cards across both piles.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    /// True when the draw pile is empty (the discard pile may not be).
    #[must_use]
    pub fn is_draw_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    /// The draw pile, bottom first.
    #[must_use]
    pub fn draw_pile(&self) -> &[T] {
        &self.draw_pile
    }

    /// The discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[T] {
        &self.discard_pile
    }
}

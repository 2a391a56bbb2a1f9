//! Deterministic random number generation.
//!
//! Every random draw in the engine routes through one `GameRng` owned by
//! the game state, so a whole run replays exactly from a seed and a fixed
//! intent sequence.
//!
//! ## Canonical picks
//!
//! Picking "one of several eligible" systems, threats, or skills must not
//! depend on map iteration order. `choose_sorted_by_key` sorts the
//! candidates into a canonical order first and only then draws the index,
//! which is the single determinism contract all resolvers use.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG shared by a whole run.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One uniform draw in `[0, 1)`. Battle rolls use exactly one of these.
    pub fn roll(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Pick uniformly from `items` after sorting them into canonical order.
    ///
    /// Returns `None` if `items` is empty. The sort key decides the
    /// canonical order; callers pass a display name or similar stable key.
    pub fn choose_sorted_by_key<T, K, F>(&mut self, items: &[T], key: F) -> Option<T>
    where
        T: Clone,
        K: Ord,
        F: Fn(&T) -> K,
    {
        if items.is_empty() {
            return None;
        }
        let mut sorted: Vec<T> = items.to_vec();
        sorted.sort_by(|a, b| key(a).cmp(&key(b)));
        let idx = self.inner.gen_range(0..sorted.len());
        Some(sorted.swap_remove(idx))
    }

    /// Pick uniformly from naturally ordered candidates.
    pub fn choose_sorted<T: Clone + Ord>(&mut self, items: &[T]) -> Option<T> {
        self.choose_sorted_by_key(items, |item| item.clone())
    }
}

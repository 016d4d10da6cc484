//! Deterministic random number generation for pile building.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical piles
//! - **Injectable**: Sessions shuffle through `PileShuffler`, so tests can deal
//!   a fixed order
//!
//! ```
//! use orchard::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left: Vec<usize> = (0..18).collect();
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Source of the permutation used to deal a new pile.
///
/// Invoked once per `start_game` with the catalog indices in order;
/// implementations permute the slice in place.
pub trait PileShuffler {
    /// Permute `indices` in place.
    fn shuffle_indices(&mut self, indices: &mut [usize]);
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

impl PileShuffler for GameRng {
    fn shuffle_indices(&mut self, indices: &mut [usize]) {
        self.shuffle(indices);
    }
}

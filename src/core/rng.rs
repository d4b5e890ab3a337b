//! Deterministic random number generation for card pools.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Draw-order stable**: `pick_distinct_indices` consumes the stream in a
//!   fixed order, so pools generated from a seed never change
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use asmrandle::core::GameRng;
//!
//! let mut a = GameRng::new(20250101);
//! let mut b = GameRng::new(20250101);
//!
//! assert_eq!(a.pick_distinct_indices(50, 2), b.pick_distinct_indices(50, 2));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Deterministic RNG seeded by a single integer.
///
/// Uses ChaCha8 for speed while keeping a platform-independent stream.
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

    /// The seed this generator was constructed from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next draw, uniformly distributed in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Draw `k` distinct indices from `[0, n)` without replacement.
    ///
    /// Each draw picks `floor(next() * remaining)` from the indices not yet
    /// drawn and swap-removes it. The returned order is the draw order.
    ///
    /// # Panics
    ///
    /// Panics if `k > n`.
    pub fn pick_distinct_indices(&mut self, n: usize, k: usize) -> SmallVec<[usize; 2]> {
        assert!(k <= n, "cannot draw {k} distinct indices from {n}");

        let mut remaining: Vec<usize> = (0..n).collect();
        let mut picked = SmallVec::new();

        for _ in 0..k {
            let slot = ((self.next() * remaining.len() as f64) as usize).min(remaining.len() - 1);
            picked.push(remaining.swap_remove(slot));
        }

        picked
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

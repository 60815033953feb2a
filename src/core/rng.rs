//! Deterministic random number generation for board construction.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Explicit**: Every construction call receives its RNG; there is no
//!   process-global seed, so repeated or concurrent runs never interfere
//! - **Context streams**: Independent sequences for different purposes
//!   (dealing the primary board vs. deriving the Duet partner board)
//!
//! ```
//! use codenames::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng1.sample_indices(25, 9), rng2.sample_indices(25, 9));
//! ```

use std::hash::{Hash, Hasher};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// Seeded source of board randomness.
///
/// Remembers its seed so a dealt board can be logged and dealt again.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// Used when the caller asks for a random board without a seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive a stream keyed by `context` from this RNG's seed.
    ///
    /// Derivation ignores how much of this stream was already consumed, so
    /// the Duet partner board depends on the seed alone.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    pub fn shuffle<T>(&mut self, cards: &mut [T]) {
        cards.shuffle(&mut self.inner);
    }

    /// Pick one item uniformly, `None` on an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// Pick `amount` distinct indices from `0..len`, in random order.
    ///
    /// Panics if `amount > len`; callers validate sizes first.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, len, amount).into_vec()
    }
}

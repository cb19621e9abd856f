//! Deterministic random number generation for dealing decks.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical deal
//! - **Unbiased**: Shuffles are Fisher–Yates, every permutation equally likely
//! - **Without replacement**: Catalog selection never repeats an item
//!
//! ## Usage
//!
//! ```
//! use magic_memory::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = vec![1, 1, 2, 2];
//! rng.shuffle(&mut deck);
//!
//! let mut again = GameRng::new(42);
//! let mut same = vec![1, 1, 2, 2];
//! again.shuffle(&mut same);
//! assert_eq!(deck, same);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used by the deck builder.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness.
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

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place (Fisher–Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Pick `amount` distinct indices out of `0..len`, in random order.
    ///
    /// Panics if `amount > len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, len, amount).into_vec()
    }
}

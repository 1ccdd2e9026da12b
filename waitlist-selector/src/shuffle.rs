//! Shuffle strategies for sampling low-confidence candidates.
//!
//! Selection only needs a permutation, so the random source sits behind the
//! [`Shuffler`] trait. Production callers use [`ThreadRngShuffler`]; tests and
//! reproducible runs use [`SeededShuffler`] or [`PreserveOrder`].

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Permute a slice in place.
///
/// Implementations must be `Send + Sync` so a ranker can be shared across
/// threads.
pub trait Shuffler: Send + Sync {
    /// Reorder `items`.
    fn shuffle<T>(&self, items: &mut [T]);
}

/// Uniform shuffle driven by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngShuffler;

impl Shuffler for ThreadRngShuffler {
    fn shuffle<T>(&self, items: &mut [T]) {
        items.shuffle(&mut rand::thread_rng());
    }
}

/// Uniform shuffle that repeats for the same seed.
///
/// A fresh `ChaCha8` stream is seeded on every call, so the same input always
/// yields the same permutation.
///
/// # Examples
///
/// ```
/// use waitlist_selector::{SeededShuffler, Shuffler};
///
/// let shuffler = SeededShuffler::new(7);
/// let mut first = [1, 2, 3, 4, 5];
/// let mut second = first;
/// shuffler.shuffle(&mut first);
/// shuffler.shuffle(&mut second);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededShuffler {
    seed: u64,
}

impl SeededShuffler {
    /// Create a shuffler for `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed driving the permutation.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle<T>(&self, items: &mut [T]) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        items.shuffle(&mut rng);
    }
}

/// Identity permutation.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreserveOrder;

impl Shuffler for PreserveOrder {
    fn shuffle<T>(&self, _items: &mut [T]) {}
}

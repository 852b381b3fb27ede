//! Deterministic random number generation for deck shuffles.
//!
//! Every shuffle in a game goes through one `GameRng`, so a game built from
//! a seed replays identically.
//!
//! ```
//! use warzone::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut x = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut y = x.clone();
//! a.shuffle(&mut x);
//! b.shuffle(&mut y);
//! assert_eq!(x, y);
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable, forkable RNG.
///
/// Uses ChaCha8 so that a seed produces the same permutation on every
/// platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent, deterministic RNG for a follow-up game.
    ///
    /// The n-th fork of a given seed is always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Shuffle a slice in place (uniform Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_permutation() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut a: Vec<u32> = (0..52).collect();
        let mut b = a.clone();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let mut a: Vec<u32> = (0..52).collect();
        let mut b = a.clone();
        GameRng::new(1).shuffle(&mut a);
        GameRng::new(2).shuffle(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();
        assert_eq!(forked1.seed(), forked2.seed());
        assert_ne!(forked1.seed(), 42);

        // Successive forks differ
        let again = rng1.fork();
        assert_ne!(again.seed(), forked1.seed());
    }
}

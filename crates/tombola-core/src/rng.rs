//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests and replays,
//! a seeded or scripted implementation is injected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate an index in `[0, len)`, uniformly distributed.
    ///
    /// Callers never pass `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Production RNG backed by `rand`'s `StdRng`.
#[derive(Debug)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Create an RNG with a fixed seed, for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl DeterministicRng for StdRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Shuffles `items` in place (Fisher-Yates), drawing indices from `rng`.
pub fn shuffle<T>(rng: &mut dyn DeterministicRng, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the lowest index.
    struct ZeroRng;

    impl DeterministicRng for ZeroRng {
        fn next_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = StdRandom::seeded(42);
        let mut b = StdRandom::seeded(42);
        let left: Vec<usize> = (0..32).map(|_| a.next_index(100)).collect();
        let right: Vec<usize> = (0..32).map(|_| b.next_index(100)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_next_index_stays_in_range() {
        let mut rng = StdRandom::seeded(7);
        for len in 1..50 {
            assert!(rng.next_index(len) < len);
        }
    }

    #[test]
    fn test_shuffle_with_zero_rng_rotates_deterministically() {
        // With j = 0 every step swaps position i with the head.
        let mut items = vec![1, 2, 3, 4];
        shuffle(&mut ZeroRng, &mut items);
        assert_eq!(items, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut rng = StdRandom::seeded(3);
        let mut items = vec![5, 1, 5, 2, 9, 9, 0];
        shuffle(&mut rng, &mut items);
        items.sort_unstable();
        assert_eq!(items, vec![0, 1, 2, 5, 5, 9, 9]);
    }

    #[test]
    fn test_shuffle_empty_and_single_are_noops() {
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut ZeroRng, &mut empty);
        assert!(empty.is_empty());

        let mut single = vec!['x'];
        shuffle(&mut ZeroRng, &mut single);
        assert_eq!(single, vec!['x']);
    }
}

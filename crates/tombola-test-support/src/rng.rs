//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use tombola_core::rng::DeterministicRng;

/// A no-op RNG that always returns index `0`. Suitable for tests that do
/// not depend on specific random values.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// An RNG that returns values from a predetermined sequence, reduced modulo
/// the requested length. Panics if the sequence is exhausted. Used in tests
/// that need specific, repeatable picks.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<usize>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, index: 0 }
    }
}

impl DeterministicRng for SequenceRng {
    fn next_index(&mut self, len: usize) -> usize {
        let val = self.values[self.index];
        self.index += 1;
        val % len
    }
}

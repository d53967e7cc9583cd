//! Ring-buffer tombola.

use std::collections::VecDeque;
use std::fmt;

use tombola_core::error::TombolaError;
use tombola_core::rng::{DeterministicRng, StdRandom};
use tombola_core::tombola::Tombola;
use tracing::{debug, trace};

/// A tombola stored in a `VecDeque`.
///
/// Only `load` and `pick` are implemented here; `loaded` and `inspect` come
/// from the trait's drain-and-reload defaults.
pub struct RingTombola<T> {
    ring: VecDeque<T>,
    rng: Box<dyn DeterministicRng>,
}

impl<T> RingTombola<T> {
    /// Creates an empty ring seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(Box::new(StdRandom::default()))
    }

    /// Creates an empty ring drawing from `rng`.
    #[must_use]
    pub fn with_rng(rng: Box<dyn DeterministicRng>) -> Self {
        Self::with_capacity(0, rng)
    }

    /// Creates an empty ring with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize, rng: Box<dyn DeterministicRng>) -> Self {
        Self {
            ring: VecDeque::with_capacity(capacity),
            rng,
        }
    }

    /// Number of items in the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` if the ring is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }
}

impl<T> Default for RingTombola<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingTombola<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingTombola")
            .field("ring", &self.ring)
            .finish_non_exhaustive()
    }
}

impl<T> Tombola<T> for RingTombola<T> {
    fn load(&mut self, items: Vec<T>) {
        debug!(count = items.len(), "loading ring tombola");
        self.ring.extend(items);
    }

    fn pick(&mut self) -> Result<T, TombolaError> {
        if self.ring.is_empty() {
            return Err(TombolaError::EmptyContainer);
        }
        let position = self.rng.next_index(self.ring.len());
        let item = self
            .ring
            .swap_remove_back(position)
            .ok_or(TombolaError::EmptyContainer)?;
        trace!(position, remaining = self.ring.len(), "picked from ring tombola");
        Ok(item)
    }
}

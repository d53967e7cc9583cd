//! Bingo cage: reshuffles on every load and picks from the end.

use std::fmt;

use tombola_core::error::TombolaError;
use tombola_core::rng::{DeterministicRng, StdRandom, shuffle};
use tombola_core::tombola::Tombola;
use tracing::{debug, trace};

/// A container that keeps its items in uniformly shuffled order.
///
/// `load` reshuffles the whole cage, so `pick` can simply pop the last
/// item.
pub struct BingoCage<T> {
    items: Vec<T>,
    rng: Box<dyn DeterministicRng>,
}

impl<T> BingoCage<T> {
    /// Creates an empty cage seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(Box::new(StdRandom::default()))
    }

    /// Creates an empty cage drawing from `rng`.
    #[must_use]
    pub fn with_rng(rng: Box<dyn DeterministicRng>) -> Self {
        Self {
            items: Vec::new(),
            rng,
        }
    }

    /// Number of items in the cage.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the cage is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for BingoCage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for BingoCage<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut cage = Self::new();
        cage.load(iter.into_iter().collect());
        cage
    }
}

impl<T: fmt::Debug> fmt::Debug for BingoCage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BingoCage")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<T> Tombola<T> for BingoCage<T> {
    fn load(&mut self, items: Vec<T>) {
        debug!(count = items.len(), "loading bingo cage");
        self.items.extend(items);
        shuffle(self.rng.as_mut(), &mut self.items);
    }

    fn pick(&mut self) -> Result<T, TombolaError> {
        let item = self.items.pop().ok_or(TombolaError::EmptyContainer)?;
        trace!(remaining = self.items.len(), "picked from bingo cage");
        Ok(item)
    }

    fn loaded(&mut self) -> bool {
        !self.items.is_empty()
    }
}

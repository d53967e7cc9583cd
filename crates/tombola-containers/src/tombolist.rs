//! A list that is also a tombola.
//!
//! `TomboList` behaves like a plain slice for reading (indexing, iteration,
//! `len`) while honoring the `Tombola` contract for writes.

use std::fmt;
use std::ops::Deref;

use tombola_core::error::TombolaError;
use tombola_core::order::try_sorted;
use tombola_core::rng::{DeterministicRng, StdRandom};
use tombola_core::tombola::Tombola;
use tracing::{debug, trace};

/// List-backed tombola with read access to its storage.
pub struct TomboList<T> {
    items: Vec<T>,
    rng: Box<dyn DeterministicRng>,
}

impl<T> TomboList<T> {
    /// Creates an empty list seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(Box::new(StdRandom::default()))
    }

    /// Creates an empty list drawing from `rng`.
    #[must_use]
    pub fn with_rng(rng: Box<dyn DeterministicRng>) -> Self {
        Self {
            items: Vec::new(),
            rng,
        }
    }

    /// Views the current items in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for TomboList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for TomboList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Extend<T> for TomboList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for TomboList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for TomboList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a TomboList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for TomboList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T> Tombola<T> for TomboList<T> {
    fn load(&mut self, items: Vec<T>) {
        debug!(count = items.len(), "loading tombolist");
        self.extend(items);
    }

    fn pick(&mut self) -> Result<T, TombolaError> {
        if self.items.is_empty() {
            return Err(TombolaError::EmptyContainer);
        }
        let position = self.rng.next_index(self.items.len());
        trace!(position, "picked from tombolist");
        Ok(self.items.swap_remove(position))
    }

    fn loaded(&mut self) -> bool {
        !self.items.is_empty()
    }

    fn inspect(&mut self) -> Result<Vec<T>, TombolaError>
    where
        T: PartialOrd + Clone,
    {
        try_sorted(&self.items)
    }
}

//! Lottery blower: picks a random position and swap-removes it.

use std::fmt;

use tombola_core::error::TombolaError;
use tombola_core::order::try_sorted;
use tombola_core::rng::{DeterministicRng, StdRandom};
use tombola_core::tombola::Tombola;
use tracing::{debug, trace};

/// A container that leaves items where they land and draws a random index
/// on each pick.
pub struct LotteryBlower<T> {
    balls: Vec<T>,
    rng: Box<dyn DeterministicRng>,
}

impl<T> LotteryBlower<T> {
    /// Creates an empty blower seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(Box::new(StdRandom::default()))
    }

    /// Creates an empty blower drawing from `rng`.
    #[must_use]
    pub fn with_rng(rng: Box<dyn DeterministicRng>) -> Self {
        Self {
            balls: Vec::new(),
            rng,
        }
    }

    /// Number of balls in the blower.
    #[must_use]
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    /// Returns `true` if the blower is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }
}

impl<T> Default for LotteryBlower<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LotteryBlower<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LotteryBlower")
            .field("balls", &self.balls)
            .finish_non_exhaustive()
    }
}

impl<T> Tombola<T> for LotteryBlower<T> {
    fn load(&mut self, items: Vec<T>) {
        debug!(count = items.len(), "loading lottery blower");
        self.balls.extend(items);
    }

    fn pick(&mut self) -> Result<T, TombolaError> {
        if self.balls.is_empty() {
            return Err(TombolaError::EmptyContainer);
        }
        let position = self.rng.next_index(self.balls.len());
        let ball = self.balls.swap_remove(position);
        trace!(position, remaining = self.balls.len(), "picked from lottery blower");
        Ok(ball)
    }

    fn loaded(&mut self) -> bool {
        !self.balls.is_empty()
    }

    fn inspect(&mut self) -> Result<Vec<T>, TombolaError>
    where
        T: PartialOrd + Clone,
    {
        try_sorted(&self.balls)
    }
}

//! The randomized container protocol.

use tracing::debug;

use crate::error::TombolaError;
use crate::order::try_sorted;

/// A bag of items that hands them back in random order.
///
/// Implementors supply `load` and `pick`. `loaded` and `inspect` are built
/// on those two alone, so any variant gets them for free; variants with
/// direct access to their storage may override them with cheaper versions
/// that honor the same contract.
pub trait Tombola<T> {
    /// Adds every item to the container. An empty `Vec` is a no-op.
    fn load(&mut self, items: Vec<T>);

    /// Removes and returns one item chosen uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns `TombolaError::EmptyContainer` if the container holds no
    /// items; the container is left unchanged.
    fn pick(&mut self) -> Result<T, TombolaError>;

    /// Returns `true` if the container holds at least one item.
    ///
    /// The default picks one item and loads it back: the multiset is
    /// unchanged, though its internal arrangement may not be.
    fn loaded(&mut self) -> bool {
        match self.pick() {
            Ok(item) => {
                self.load(vec![item]);
                true
            }
            Err(_) => false,
        }
    }

    /// Returns the held items in non-decreasing order without changing
    /// which items the container holds.
    ///
    /// The default drains the container with `pick`, sorts a copy, then
    /// loads the drained items back. The reload happens even when sorting
    /// fails or a comparison panics.
    ///
    /// # Errors
    ///
    /// Returns `TombolaError::ItemsNotComparable` if the items have no
    /// total order.
    fn inspect(&mut self) -> Result<Vec<T>, TombolaError>
    where
        T: PartialOrd + Clone,
    {
        let mut drained = Vec::new();
        while let Ok(item) = self.pick() {
            drained.push(item);
        }
        debug!(count = drained.len(), "drained container for inspection");

        let guard = ReloadOnDrop {
            container: self,
            items: drained,
        };
        try_sorted(&guard.items)
    }
}

/// Loads the drained items back into the container when dropped, including
/// while unwinding from a panicking comparison.
struct ReloadOnDrop<'a, T, C: Tombola<T> + ?Sized> {
    container: &'a mut C,
    items: Vec<T>,
}

impl<T, C: Tombola<T> + ?Sized> Drop for ReloadOnDrop<'_, T, C> {
    fn drop(&mut self) {
        self.container.load(std::mem::take(&mut self.items));
    }
}

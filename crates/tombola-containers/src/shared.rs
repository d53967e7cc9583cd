//! Mutex-guarded tombola handle for use across threads.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tombola_core::error::TombolaError;
use tombola_core::tombola::Tombola;

type Inner<T> = Box<dyn Tombola<T> + Send>;

/// A cloneable handle to a tombola shared between threads.
///
/// Each operation holds the lock for its whole duration. This matters for
/// the default `inspect`, whose drain-and-reload must not interleave with
/// another caller's `pick`.
pub struct SharedTombola<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> SharedTombola<T> {
    /// Wraps `container` for shared use.
    #[must_use]
    pub fn new<C>(container: C) -> Self
    where
        C: Tombola<T> + Send + 'static,
    {
        Self::from_boxed(Box::new(container))
    }

    /// Wraps an already boxed container.
    #[must_use]
    pub fn from_boxed(container: Inner<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(container)),
        }
    }

    // `inspect` reloads drained items while unwinding, so a comparison that
    // panicked in another holder leaves the contents intact.
    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Clone for SharedTombola<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for SharedTombola<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedTombola")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}

impl<T> Tombola<T> for SharedTombola<T> {
    fn load(&mut self, items: Vec<T>) {
        self.lock().load(items);
    }

    fn pick(&mut self) -> Result<T, TombolaError> {
        self.lock().pick()
    }

    fn loaded(&mut self) -> bool {
        self.lock().loaded()
    }

    fn inspect(&mut self) -> Result<Vec<T>, TombolaError>
    where
        T: PartialOrd + Clone,
    {
        self.lock().inspect()
    }
}

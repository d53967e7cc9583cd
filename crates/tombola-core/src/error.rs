//! Container error types.

use thiserror::Error;

/// Errors returned by `Tombola` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TombolaError {
    /// `pick` was called on a container holding no items.
    #[error("pick from empty container")]
    EmptyContainer,

    /// `inspect` met items without a defined order.
    #[error("container items are not comparable")]
    ItemsNotComparable,
}

//! Shared test doubles and contract checks for Tombola containers.

mod conformance;
mod rng;

pub use conformance::{assert_pick_frequency, assert_tombola_contract};
pub use rng::{MockRng, SequenceRng};

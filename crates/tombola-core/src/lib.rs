//! Tombola Core — the randomized container protocol.
//!
//! This crate defines the `Tombola` trait every container variant
//! implements, the error type its operations return, and the random
//! number abstraction variants draw from. It contains no storage code.

pub mod error;
pub mod order;
pub mod rng;
pub mod tombola;

//! Tombola container variants.
//!
//! Every variant implements `tombola_core::tombola::Tombola` and differs
//! only in how it stores items and how it chooses the next one to hand out.
//! All of them draw randomness from an injected `DeterministicRng`.

pub mod bingo;
pub mod kind;
pub mod lottery;
pub mod ring;
pub mod shared;
pub mod tombolist;

pub use bingo::BingoCage;
pub use kind::{ContainerKind, UnknownContainerKind};
pub use lottery::LotteryBlower;
pub use ring::RingTombola;
pub use shared::SharedTombola;
pub use tombolist::TomboList;

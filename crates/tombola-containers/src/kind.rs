//! Selecting a container variant by name.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tombola_core::rng::DeterministicRng;
use tombola_core::tombola::Tombola;

use crate::{BingoCage, LotteryBlower, RingTombola, TomboList};

/// The shipped container variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// `BingoCage`: shuffle on load, pop on pick.
    Bingo,
    /// `LotteryBlower`: random index, swap-remove.
    Lottery,
    /// `TomboList`: list-like storage.
    TomboList,
    /// `RingTombola`: ring buffer using the trait defaults.
    Ring,
}

/// A container name that matches no variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown container kind: {0} (expected one of: bingo, lottery, tombolist, ring)")]
pub struct UnknownContainerKind(pub String);

impl ContainerKind {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [Self::Bingo, Self::Lottery, Self::TomboList, Self::Ring];

    /// The name accepted by `FromStr`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bingo => "bingo",
            Self::Lottery => "lottery",
            Self::TomboList => "tombolist",
            Self::Ring => "ring",
        }
    }

    /// Builds an empty container of this kind drawing from `rng`.
    #[must_use]
    pub fn build<T>(self, rng: Box<dyn DeterministicRng>) -> Box<dyn Tombola<T> + Send>
    where
        T: Send + 'static,
    {
        match self {
            Self::Bingo => Box::new(BingoCage::with_rng(rng)),
            Self::Lottery => Box::new(LotteryBlower::with_rng(rng)),
            Self::TomboList => Box::new(TomboList::with_rng(rng)),
            Self::Ring => Box::new(RingTombola::with_rng(rng)),
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerKind {
    type Err = UnknownContainerKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| UnknownContainerKind(s.to_owned()))
    }
}

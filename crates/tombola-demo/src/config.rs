//! Demo configuration, read from the environment.

use tombola_containers::ContainerKind;
use tombola_core::rng::{DeterministicRng, StdRandom};

use crate::error::AppError;

/// Container kind used when `TOMBOLA_KIND` is unset.
pub const DEFAULT_KIND: ContainerKind = ContainerKind::Bingo;
/// Items loaded when `TOMBOLA_ITEMS` is unset.
pub const DEFAULT_ITEMS: &str = "1,2,3,4,5,6";
/// Frequency trials run when `TOMBOLA_TRIALS` is unset.
pub const DEFAULT_TRIALS: u32 = 1000;

/// Settings for one demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Which container variant to exercise.
    pub kind: ContainerKind,
    /// Fixed RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Items loaded into the container.
    pub items: Vec<i64>,
    /// Number of single-pick rounds for the frequency table.
    pub trials: u32,
}

impl DemoConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any variable is present but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind = match lookup("TOMBOLA_KIND") {
            Some(raw) => raw
                .parse::<ContainerKind>()
                .map_err(|e| AppError::Config(format!("TOMBOLA_KIND: {e}")))?,
            None => DEFAULT_KIND,
        };

        let seed = lookup("TOMBOLA_SEED")
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|e| {
                    AppError::Config(format!("TOMBOLA_SEED must be a valid u64: {e}"))
                })
            })
            .transpose()?;

        let raw_items = lookup("TOMBOLA_ITEMS").unwrap_or_else(|| DEFAULT_ITEMS.to_owned());
        let items = parse_items(&raw_items)?;

        let trials = match lookup("TOMBOLA_TRIALS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                AppError::Config(format!("TOMBOLA_TRIALS must be a valid u32: {e}"))
            })?,
            None => DEFAULT_TRIALS,
        };

        Ok(Self {
            kind,
            seed,
            items,
            trials,
        })
    }

    /// Builds the RNG this configuration asks for.
    #[must_use]
    pub fn rng(&self) -> Box<dyn DeterministicRng> {
        match self.seed {
            Some(seed) => Box::new(StdRandom::seeded(seed)),
            None => Box::new(StdRandom::from_entropy()),
        }
    }
}

fn parse_items(raw: &str) -> Result<Vec<i64>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry.parse::<i64>().map_err(|e| {
                AppError::Config(format!("TOMBOLA_ITEMS entry {entry:?} is not an integer: {e}"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DemoConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.kind, ContainerKind::Bingo);
        assert_eq!(config.seed, None);
        assert_eq!(config.items, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(config.trials, 1000);
    }

    #[test]
    fn test_reads_every_variable() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            ("TOMBOLA_KIND", "ring"),
            ("TOMBOLA_SEED", " 99 "),
            ("TOMBOLA_ITEMS", "7, -2, 7,"),
            ("TOMBOLA_TRIALS", "10"),
        ]))
        .unwrap();

        assert_eq!(config.kind, ContainerKind::Ring);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.items, vec![7, -2, 7]);
        assert_eq!(config.trials, 10);
    }

    #[test]
    fn test_empty_item_list_is_allowed() {
        let config = DemoConfig::from_lookup(lookup_from(&[("TOMBOLA_ITEMS", "")])).unwrap();
        assert!(config.items.is_empty());
    }

    #[test]
    fn test_unknown_kind_is_config_error() {
        let err = DemoConfig::from_lookup(lookup_from(&[("TOMBOLA_KIND", "urn")])).unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("unknown container kind")));
    }

    #[test]
    fn test_bad_seed_is_config_error() {
        let err = DemoConfig::from_lookup(lookup_from(&[("TOMBOLA_SEED", "-1")])).unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.starts_with("TOMBOLA_SEED")));
    }

    #[test]
    fn test_bad_item_is_config_error() {
        let err =
            DemoConfig::from_lookup(lookup_from(&[("TOMBOLA_ITEMS", "1,two,3")])).unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("\"two\"")));
    }

    #[test]
    fn test_bad_trials_is_config_error() {
        let err = DemoConfig::from_lookup(lookup_from(&[("TOMBOLA_TRIALS", "many")])).unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.starts_with("TOMBOLA_TRIALS")));
    }
}

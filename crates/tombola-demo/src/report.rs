//! Demo run: load, inspect, drain, and measure pick frequencies.

use std::collections::BTreeMap;

use serde::Serialize;
use tombola_core::tombola::Tombola;
use tracing::{debug, info, instrument};

use crate::config::DemoConfig;
use crate::error::AppError;

/// Everything one demo run observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    /// Name of the container variant.
    pub kind: String,
    /// `loaded()` right after the initial load.
    pub loaded: bool,
    /// Sorted snapshot returned by `inspect()`.
    pub inspected: Vec<i64>,
    /// Items in the order `pick()` handed them out.
    pub drained: Vec<i64>,
    /// Number of single-pick rounds behind `frequencies`.
    pub trials: u32,
    /// How often each item came out first in a freshly loaded container.
    pub frequencies: BTreeMap<i64, u32>,
}

impl DemoReport {
    /// Encodes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs the demo described by `config`.
///
/// # Errors
///
/// Returns `AppError::Tombola` if a container operation fails.
#[instrument(skip(config), fields(kind = %config.kind))]
pub fn run(config: &DemoConfig) -> Result<DemoReport, AppError> {
    let mut container = config.kind.build::<i64>(config.rng());

    container.load(config.items.clone());
    let loaded = container.loaded();
    let inspected = container.inspect()?;
    info!(count = inspected.len(), loaded, "inspected container");

    let drained = drain(container.as_mut());
    debug!(count = drained.len(), "drained container");

    let frequencies = pick_frequencies(container.as_mut(), &config.items, config.trials)?;
    info!(trials = config.trials, distinct = frequencies.len(), "measured pick frequencies");

    Ok(DemoReport {
        kind: config.kind.to_string(),
        loaded,
        inspected,
        drained,
        trials: config.trials,
        frequencies,
    })
}

fn drain(container: &mut dyn Tombola<i64>) -> Vec<i64> {
    let mut drained = Vec::new();
    while let Ok(item) = container.pick() {
        drained.push(item);
    }
    drained
}

fn pick_frequencies(
    container: &mut dyn Tombola<i64>,
    items: &[i64],
    trials: u32,
) -> Result<BTreeMap<i64, u32>, AppError> {
    let mut frequencies = BTreeMap::new();
    if items.is_empty() {
        return Ok(frequencies);
    }

    for _ in 0..trials {
        container.load(items.to_vec());
        let first = container.pick()?;
        *frequencies.entry(first).or_insert(0) += 1;
        drain(container);
    }

    Ok(frequencies)
}

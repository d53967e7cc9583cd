//! Tombola demo entry point.

use std::error::Error;

use tombola_demo::config::DemoConfig;
use tombola_demo::report;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber. Logs go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Tombola demo");

    // Read configuration from environment.
    let config = DemoConfig::from_env()?;
    tracing::info!(
        kind = %config.kind,
        items = config.items.len(),
        trials = config.trials,
        seeded = config.seed.is_some(),
        "configuration loaded"
    );

    let report = report::run(&config)?;
    println!("{}", report.to_json()?);

    Ok(())
}

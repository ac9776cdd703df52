//! Arena client binary.
//!
//! Runs one session for the default player against the standard roster and
//! narrates it on stdout.

use anyhow::Result;
use arena_client::{Client, ClientConfig, logging};

fn main() -> Result<()> {
    let _guard = logging::setup_logging()?;

    let config = ClientConfig::default();
    tracing::info!("Starting arena client for {}", config.player_name);

    let mut client = Client::builder()
        .config(config)
        .output(std::io::stdout())
        .build()?;

    let summary = client.run()?;
    tracing::info!(
        "Client finished: {} with {} HP left",
        summary.outcome,
        summary.player_health
    );

    Ok(())
}

//! Console client for the arena.
//!
//! # Architecture
//!
//! ```text
//! Client (composition root)
//!   ├─→ SessionManager (runtime: session lifecycle, diagnostics)
//!   └─→ Narrator (presentation: one text line per combat event)
//! ```
//!
//! The client owns no game rules. It builds a session through the runtime,
//! hands it a narrator as the event sink, and reports the summary.

mod builder;
pub mod config;
pub mod format;
pub mod logging;
pub mod narrator;

pub use builder::ClientBuilder;
pub use config::ClientConfig;
pub use narrator::Narrator;

use std::io::Write;

use anyhow::{Context, Result};
use runtime::{SessionManager, SessionSummary};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects configuration and the output writer
/// 2. `Client::run()` starts one session and narrates it to the writer
/// 3. The session is discarded when the run returns
pub struct Client<W: Write> {
    config: ClientConfig,
    manager: SessionManager,
    output: W,
}

impl Client<std::io::Stdout> {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder<std::io::Stdout> {
        ClientBuilder::new()
    }
}

impl<W: Write> Client<W> {
    /// Play one session to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be set up or the narration
    /// cannot be written.
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut narrator = Narrator::new(&mut self.output);

        let summary = self
            .manager
            .start_new_game(&self.config.player_name, &mut narrator)
            .context("failed to start a new game")?;

        narrator
            .finish()
            .context("failed to write session narration")?
            .flush()
            .context("failed to flush session narration")?;

        Ok(summary)
    }

    /// Consume the client and return its output writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

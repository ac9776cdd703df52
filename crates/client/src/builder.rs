//! Client builder.

use std::io::Write;

use anyhow::{Context, Result};
use runtime::SessionManager;

use crate::{Client, ClientConfig};

/// Builder for constructing a Client.
///
/// The configuration falls back to [`ClientConfig::default`]; the output
/// writer is required.
pub struct ClientBuilder<W> {
    config: Option<ClientConfig>,
    output: Option<W>,
}

impl<W> Default for ClientBuilder<W> {
    fn default() -> Self {
        Self {
            config: None,
            output: None,
        }
    }
}

impl<W: Write> ClientBuilder<W> {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the client configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the writer that receives the narration (required).
    ///
    /// Switching writer type re-types the builder, so any writer can be
    /// plugged in after `Client::builder()`.
    pub fn output<O: Write>(self, output: O) -> ClientBuilder<O> {
        ClientBuilder {
            config: self.config,
            output: Some(output),
        }
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if no output writer was set.
    pub fn build(self) -> Result<Client<W>> {
        let output = self
            .output
            .context("Output is required. Use .output() to set it.")?;

        Ok(Client {
            config: self.config.unwrap_or_default(),
            manager: SessionManager::new(),
            output,
        })
    }
}

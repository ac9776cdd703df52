//! Unified error types surfaced by the runtime API.
//!
//! Combat outcomes are never errors; only failures to set a session up are.
use game_core::{ConfigError, ErrorSeverity, GameError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid session configuration")]
    InvalidConfig(#[from] ConfigError),
}

impl RuntimeError {
    /// Severity of the underlying game error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::InvalidConfig(err) => err.severity(),
        }
    }

    /// Stable identifier of the underlying game error.
    pub fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::InvalidConfig(err) => err.error_code(),
        }
    }
}

//! Common error infrastructure for game-core.
//!
//! Combat itself never fails: defeat and missing items are ordinary outcomes
//! reported through events. Errors only arise when a session is built from a
//! configuration that breaks the rules' invariants (see [`crate::ConfigError`]).

/// Severity level of an error, used for categorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: a combatant with zero attack power, a potion that heals nothing
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
        }
    }
}

/// Common trait for all game-core errors.
///
/// Use `#[derive(thiserror::Error)]` for the Display/Error impl.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

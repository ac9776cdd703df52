//! Runtime orchestration for combat sessions.
//!
//! This crate owns the lifecycle of a [`game_core::CombatSession`]: it builds
//! the session, runs it to completion, reports diagnostics through `tracing`,
//! and discards it. Consumers embed [`SessionManager`] and supply an
//! [`game_core::EventSink`] to present what happened.
//!
//! Modules are organized by responsibility:
//! - [`manager`] hosts the session manager and its summary type
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] provides sink adapters layered over the core event stream
pub mod api;
pub mod events;
pub mod manager;

pub use api::{Result, RuntimeError};
pub use events::TracingSink;
pub use manager::{SessionManager, SessionSummary};

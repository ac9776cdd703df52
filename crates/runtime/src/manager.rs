//! Session lifecycle management.
//!
//! [`SessionManager`] owns at most one active [`CombatSession`]. Starting a
//! game builds the session, runs it to completion, and drops it again, so the
//! manager is idle between calls. Exclusive `&mut self` access is what keeps
//! two sessions from ever running at once.

use game_core::{CombatSession, EventSink, GameError, SessionConfig, SessionOutcome};

use crate::api::Result;
use crate::events::TracingSink;

/// What a finished session looked like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub player: String,
    pub outcome: SessionOutcome,
    pub enemies_defeated: usize,
    pub enemies_total: usize,
    pub rounds: u32,
    pub player_health: u32,
}

impl SessionSummary {
    fn from_session(session: &CombatSession, outcome: SessionOutcome) -> Self {
        Self {
            player: session.player().name().to_string(),
            outcome,
            enemies_defeated: session.enemies_defeated(),
            enemies_total: session.enemies().len(),
            rounds: session.rounds(),
            player_health: session.player().health(),
        }
    }
}

/// Owns the single active combat session.
#[derive(Debug, Default)]
pub struct SessionManager {
    current: Option<CombatSession>,
    completed: u32,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a session is being run.
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Number of sessions run to completion by this manager.
    pub fn completed(&self) -> u32 {
        self.completed
    }

    /// Start a new game against the standard roster and run it to completion.
    pub fn start_new_game(
        &mut self,
        player_name: &str,
        sink: &mut impl EventSink,
    ) -> Result<SessionSummary> {
        self.start_with_config(&SessionConfig::standard(player_name), sink)
    }

    /// Start a new game from a caller-provided configuration.
    pub fn start_with_config(
        &mut self,
        config: &SessionConfig,
        sink: &mut impl EventSink,
    ) -> Result<SessionSummary> {
        let session = CombatSession::from_config(config).inspect_err(|err| {
            tracing::error!(
                "Rejected session configuration ({} {}): {}",
                err.severity().as_str(),
                err.error_code(),
                err
            );
        })?;

        tracing::info!(
            "Starting session for {} against {} enemies",
            config.player.name,
            config.enemies.len()
        );

        let session = self.current.insert(session);
        let mut traced = TracingSink::new(sink);
        let outcome = session.run(&mut traced);
        let summary = SessionSummary::from_session(session, outcome);

        tracing::debug!("Session emitted {} events", traced.emitted());

        // Discard the finished session.
        self.current = None;
        self.completed += 1;

        tracing::info!(
            "Session finished: {} after {} rounds ({}/{} enemies defeated)",
            summary.outcome,
            summary.rounds,
            summary.enemies_defeated,
            summary.enemies_total
        );

        Ok(summary)
    }
}

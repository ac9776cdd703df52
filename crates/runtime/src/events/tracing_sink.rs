//! Event sink that records every combat event through `tracing`.

use game_core::{CombatEvent, EventSink};

/// Forwards each event to an inner sink after logging it.
///
/// Lifecycle milestones (encounters, session end) are logged at `info`,
/// individual strikes and item use at `debug`.
pub struct TracingSink<S> {
    inner: S,
    emitted: usize,
}

impl<S: EventSink> TracingSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, emitted: 0 }
    }

    /// Number of events forwarded so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl<S: EventSink> EventSink for TracingSink<S> {
    fn emit(&mut self, event: CombatEvent) {
        match &event {
            CombatEvent::EncounterStarted { enemy, index } => {
                tracing::info!(enemy = %enemy, index, "encounter started");
            }
            CombatEvent::Attacked {
                attacker,
                attacker_kind,
                target,
                damage,
                target_health,
            } => {
                tracing::debug!(
                    "{} ({}) hit {} for {}, {} HP left",
                    attacker,
                    attacker_kind,
                    target,
                    damage,
                    target_health
                );
            }
            CombatEvent::Defeated { name, kind } => {
                tracing::debug!("{} ({}) defeated", name, kind);
            }
            CombatEvent::EncounterWon {
                enemy,
                player_health,
            } => {
                tracing::info!(enemy = %enemy, player_health, "encounter won");
            }
            CombatEvent::ItemUsed(effect) => {
                tracing::debug!("item used: {:?}", effect);
            }
            CombatEvent::ItemMissing { player, item_name } => {
                tracing::debug!("{} asked for missing item '{}'", player, item_name);
            }
            CombatEvent::SessionEnded { player, outcome } => {
                tracing::info!(player = %player, outcome = %outcome, "session ended");
            }
        }

        self.emitted += 1;
        self.inner.emit(event);
    }
}

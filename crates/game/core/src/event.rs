//! Combat events.
//!
//! Events are the only output of the rules. A session emits them in the exact
//! order things happen; an [`EventSink`] decides what to do with them
//! (collect, log, narrate).

use crate::combat::{AttackReport, CombatantKind};
use crate::item::ItemEffect;
use crate::session::SessionOutcome;

/// High-level occurrences during a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombatEvent {
    /// The player engaged the next enemy in the roster.
    EncounterStarted { enemy: String, index: usize },

    /// One combatant struck another.
    Attacked {
        attacker: String,
        attacker_kind: CombatantKind,
        target: String,
        damage: u32,
        target_health: u32,
    },

    /// A combatant's health reached 0.
    Defeated { name: String, kind: CombatantKind },

    /// The current enemy was defeated and the player survived.
    EncounterWon { enemy: String, player_health: u32 },

    /// The player used an item.
    ItemUsed(ItemEffect),

    /// The player asked for an item they do not hold.
    ItemMissing { player: String, item_name: String },

    /// The session is over.
    SessionEnded {
        player: String,
        outcome: SessionOutcome,
    },
}

impl CombatEvent {
    /// Events produced by a single attack: the strike, then the defeat if the
    /// strike was lethal.
    pub fn from_attack(report: AttackReport) -> impl Iterator<Item = CombatEvent> {
        let defeated = report.target_defeated.then(|| CombatEvent::Defeated {
            name: report.target.clone(),
            kind: report.target_kind,
        });
        let attacked = CombatEvent::Attacked {
            attacker: report.attacker,
            attacker_kind: report.attacker_kind,
            target: report.target,
            damage: report.damage,
            target_health: report.target_health,
        };

        std::iter::once(attacked).chain(defeated)
    }
}

/// Consumer of combat events.
pub trait EventSink {
    fn emit(&mut self, event: CombatEvent);
}

impl EventSink for Vec<CombatEvent> {
    fn emit(&mut self, event: CombatEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: CombatEvent) {
        (**self).emit(event);
    }
}

//! Text rendering of combat events.

use game_core::{CombatEvent, ItemEffect, SessionOutcome};

/// Render an event as the line shown to the player.
///
/// Returns `None` for events that produce no line of their own. A won
/// encounter renders as an empty line, separating it from the next fight.
pub fn describe(event: &CombatEvent) -> Option<String> {
    let line = match event {
        CombatEvent::EncounterStarted { .. } => return None,
        CombatEvent::Attacked {
            attacker,
            attacker_kind,
            target,
            damage,
            ..
        } => format!("{attacker} ({attacker_kind}) attacks {target} for {damage} HP!"),
        CombatEvent::Defeated { name, .. } => format!("{name} has been defeated!"),
        CombatEvent::EncounterWon { .. } => String::new(),
        CombatEvent::ItemUsed(ItemEffect::Healed {
            item,
            target,
            requested,
            ..
        }) => format!("{target} uses {item}, restoring {requested} HP!"),
        CombatEvent::ItemMissing { player, .. } => {
            format!("{player}, you don't have that item!")
        }
        CombatEvent::SessionEnded { player, outcome } => match outcome {
            SessionOutcome::Victory => format!("{player}, you won!"),
            SessionOutcome::Defeat => format!("{player}, you lost!"),
        },
    };

    Some(line)
}

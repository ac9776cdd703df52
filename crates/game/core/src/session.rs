//! Combat session state machine.
//!
//! A session pits one player against an ordered roster of enemies:
//!
//! ```text
//! for enemy in roster:
//!     while player alive && enemy alive:
//!         player attacks enemy
//!         if enemy alive: enemy attacks player
//!     if player dead: stop
//! outcome = player alive ? Victory : Defeat
//! ```
//!
//! The player always strikes first in every round. That first-strike
//! advantage decides close fights and must not be reordered.

use crate::combat::Combatant;
use crate::config::{ConfigError, SessionConfig};
use crate::event::{CombatEvent, EventSink};
use crate::inventory::{Inventory, ItemUse};
use crate::item::Item;

/// Final result of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SessionOutcome {
    Victory,
    Defeat,
}

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Ready,
    Finished(SessionOutcome),
}

/// One playthrough: a player, the enemies in fight order, and an inventory.
#[derive(Clone, Debug)]
pub struct CombatSession {
    player: Combatant,
    enemies: Vec<Combatant>,
    inventory: Inventory,
    phase: SessionPhase,
    rounds: u32,
}

impl CombatSession {
    /// Build a session with the standard roster and starting inventory.
    pub fn new(player_name: impl Into<String>) -> Self {
        let config = SessionConfig::standard(player_name);
        Self::build(&config)
    }

    /// Build a session from a caller-provided configuration.
    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &SessionConfig) -> Self {
        let player = Combatant::player(
            config.player.name.clone(),
            config.player.health,
            config.player.attack_power,
        );
        let enemies = config
            .enemies
            .iter()
            .map(|spec| Combatant::enemy(spec.name.clone(), spec.health, spec.attack_power))
            .collect();
        let inventory = config
            .items
            .iter()
            .map(|spec| Item::new(spec.name.clone(), spec.kind))
            .collect();

        Self {
            player,
            enemies,
            inventory,
            phase: SessionPhase::Ready,
            rounds: 0,
        }
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemies(&self) -> &[Combatant] {
        &self.enemies
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<SessionOutcome> {
        match self.phase {
            SessionPhase::Ready => None,
            SessionPhase::Finished(outcome) => Some(outcome),
        }
    }

    /// Number of rounds fought so far (one round per player attack).
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Enemies whose health has reached 0.
    pub fn enemies_defeated(&self) -> usize {
        self.enemies.iter().filter(|enemy| !enemy.is_alive()).count()
    }

    /// Fight the whole roster and report the outcome.
    ///
    /// A finished session is not replayed: the stored outcome is returned and
    /// nothing is emitted.
    pub fn run(&mut self, sink: &mut impl EventSink) -> SessionOutcome {
        if let SessionPhase::Finished(outcome) = self.phase {
            return outcome;
        }

        for index in 0..self.enemies.len() {
            self.fight(index, sink);
            if !self.player.is_alive() {
                break;
            }
        }

        let outcome = if self.player.is_alive() {
            SessionOutcome::Victory
        } else {
            SessionOutcome::Defeat
        };
        self.phase = SessionPhase::Finished(outcome);

        sink.emit(CombatEvent::SessionEnded {
            player: self.player.name().to_string(),
            outcome,
        });
        outcome
    }

    /// Let the player use an item from the session inventory.
    pub fn use_item(&mut self, item_name: &str, sink: &mut impl EventSink) -> ItemUse {
        let result = self.inventory.use_item(&mut self.player, item_name);

        let event = match &result {
            ItemUse::Used(effect) => CombatEvent::ItemUsed(effect.clone()),
            ItemUse::NotFound { player, item_name } => CombatEvent::ItemMissing {
                player: player.clone(),
                item_name: item_name.clone(),
            },
        };
        sink.emit(event);

        result
    }

    fn fight(&mut self, index: usize, sink: &mut impl EventSink) {
        let enemy = &mut self.enemies[index];

        sink.emit(CombatEvent::EncounterStarted {
            enemy: enemy.name().to_string(),
            index,
        });

        while self.player.is_alive() && enemy.is_alive() {
            self.rounds += 1;

            for event in CombatEvent::from_attack(self.player.attack(enemy)) {
                sink.emit(event);
            }

            if enemy.is_alive() {
                for event in CombatEvent::from_attack(enemy.attack(&mut self.player)) {
                    sink.emit(event);
                }
            }
        }

        if self.player.is_alive() {
            sink.emit(CombatEvent::EncounterWon {
                enemy: enemy.name().to_string(),
                player_health: self.player.health(),
            });
        }
    }
}

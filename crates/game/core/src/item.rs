//! Usable items.
//!
//! # Design: Base + Kind Pattern
//!
//! - [`Item`] holds the fields every item has (its display name)
//! - [`ItemKind`] holds variant-specific data and decides what `use_on` does
//!
//! The set of kinds is closed, so dispatch is a `match` rather than a trait
//! object.

use crate::combat::Combatant;

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Restores health to the player.
    HealingPotion { heal_amount: u32 },
}

/// An item the player can use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    name: String,
    kind: ItemKind,
}

/// What happened when an item was used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemEffect {
    Healed {
        item: String,
        target: String,
        /// Heal amount printed on the potion.
        requested: u32,
        /// HP actually restored after capping at max health.
        restored: u32,
        health_after: u32,
    },
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn healing_potion(name: impl Into<String>, heal_amount: u32) -> Self {
        Self::new(name, ItemKind::HealingPotion { heal_amount })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Apply this item's effect to `player`.
    pub fn use_on(&self, player: &mut Combatant) -> ItemEffect {
        match self.kind {
            ItemKind::HealingPotion { heal_amount } => {
                let restored = player.heal(heal_amount);
                ItemEffect::Healed {
                    item: self.name.clone(),
                    target: player.name().to_string(),
                    requested: heal_amount,
                    restored,
                    health_after: player.health(),
                }
            }
        }
    }
}

//! Inventory system for the player.
//!
//! Items are stored in acquisition order and looked up by exact name. Using an
//! item applies its effect and leaves it in place; asking for an item that is
//! not there is a notification, not an error.

use crate::combat::Combatant;
use crate::item::{Item, ItemEffect};

/// Outcome of [`Inventory::use_item`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemUse {
    /// The first matching item was applied.
    Used(ItemEffect),
    /// No item with that name is held.
    NotFound { player: String, item_name: String },
}

/// Ordered collection of owned items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Use the first item named `item_name` (case-sensitive) on `player`.
    ///
    /// Only the first match is applied, even when several items share the
    /// name. The inventory itself is left unchanged, so the same item can be
    /// used again.
    pub fn use_item(&self, player: &mut Combatant, item_name: &str) -> ItemUse {
        match self.items.iter().find(|item| item.name() == item_name) {
            Some(item) => ItemUse::Used(item.use_on(player)),
            None => ItemUse::NotFound {
                player: player.name().to_string(),
                item_name: item_name.to_string(),
            },
        }
    }

    pub fn contains(&self, item_name: &str) -> bool {
        self.items.iter().any(|item| item.name() == item_name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

//! Session configuration and the standard duel-ladder roster.

use crate::error::{ErrorSeverity, GameError};
use crate::item::ItemKind;

/// Game configuration constants.
///
/// These are the hard-coded values of the standard session. They are grouped
/// here so [`SessionConfig::standard`] and tests agree on a single source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== player =====
    pub const PLAYER_HEALTH: u32 = 100;
    pub const PLAYER_ATTACK: u32 = 20;
    pub const DEFAULT_PLAYER_NAME: &'static str = "😎";

    // ===== enemy roster, in fight order: (name, health, attack) =====
    pub const ENEMY_ROSTER: [(&'static str, u32, u32); 3] =
        [("🤬", 30, 10), ("😤", 50, 15), ("🥶", 100, 25)];

    // ===== starting inventory: (name, heal amount) =====
    pub const STARTING_POTIONS: [(&'static str, u32); 2] =
        [("Minor Restoration", 20), ("Major Restoration", 50)];
}

/// Blueprint for a combatant created at session start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantSpec {
    pub name: String,
    pub health: u32,
    pub attack_power: u32,
}

impl CombatantSpec {
    pub fn new(name: impl Into<String>, health: u32, attack_power: u32) -> Self {
        Self {
            name: name.into(),
            health,
            attack_power,
        }
    }
}

/// Blueprint for an item placed in the starting inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSpec {
    pub name: String,
    pub kind: ItemKind,
}

impl ItemSpec {
    pub fn healing_potion(name: impl Into<String>, heal_amount: u32) -> Self {
        Self {
            name: name.into(),
            kind: ItemKind::HealingPotion { heal_amount },
        }
    }
}

/// Everything needed to build a [`crate::CombatSession`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub player: CombatantSpec,
    /// Enemies in the order they are fought.
    pub enemies: Vec<CombatantSpec>,
    pub items: Vec<ItemSpec>,
}

impl SessionConfig {
    /// The fixed roster: three enemies and two healing potions.
    pub fn standard(player_name: impl Into<String>) -> Self {
        Self {
            player: CombatantSpec::new(
                player_name,
                GameConfig::PLAYER_HEALTH,
                GameConfig::PLAYER_ATTACK,
            ),
            enemies: GameConfig::ENEMY_ROSTER
                .iter()
                .map(|&(name, health, attack)| CombatantSpec::new(name, health, attack))
                .collect(),
            items: GameConfig::STARTING_POTIONS
                .iter()
                .map(|&(name, heal)| ItemSpec::healing_potion(name, heal))
                .collect(),
        }
    }

    /// Check the invariants the combat loop relies on.
    ///
    /// Every combatant must start alive with positive attack power, which
    /// bounds each encounter, and every potion must heal something.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for spec in std::iter::once(&self.player).chain(&self.enemies) {
            if spec.health == 0 {
                return Err(ConfigError::ZeroHealth {
                    name: spec.name.clone(),
                });
            }
            if spec.attack_power == 0 {
                return Err(ConfigError::ZeroAttackPower {
                    name: spec.name.clone(),
                });
            }
        }

        for item in &self.items {
            match item.kind {
                ItemKind::HealingPotion { heal_amount: 0 } => {
                    return Err(ConfigError::ZeroHealAmount {
                        item: item.name.clone(),
                    });
                }
                ItemKind::HealingPotion { .. } => {}
            }
        }

        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::standard(GameConfig::DEFAULT_PLAYER_NAME)
    }
}

/// Errors raised when a session configuration breaks a rule invariant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("combatant '{name}' must start with positive health")]
    ZeroHealth { name: String },

    #[error("combatant '{name}' must have positive attack power")]
    ZeroAttackPower { name: String },

    #[error("healing item '{item}' must heal a positive amount")]
    ZeroHealAmount { item: String },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroHealth { .. } => "CONFIG_ZERO_HEALTH",
            Self::ZeroAttackPower { .. } => "CONFIG_ZERO_ATTACK_POWER",
            Self::ZeroHealAmount { .. } => "CONFIG_ZERO_HEAL_AMOUNT",
        }
    }
}

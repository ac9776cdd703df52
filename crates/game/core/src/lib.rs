//! Deterministic combat rules shared across the runtime and clients.
//!
//! `game-core` defines the canonical rules of a duel-ladder session: a player
//! fights an ordered roster of enemies, always striking first, and may use
//! healing items from an inventory. All state mutation flows through
//! [`session::CombatSession`], and every observable step is reported as a
//! [`event::CombatEvent`] so callers decide how (or whether) to present it.
pub mod combat;
pub mod config;
pub mod error;
pub mod event;
pub mod inventory;
pub mod item;
pub mod session;

pub use combat::{AttackReport, Combatant, CombatantKind, DamageReport, apply_damage};
pub use config::{CombatantSpec, ConfigError, GameConfig, ItemSpec, SessionConfig};
pub use error::{ErrorSeverity, GameError};
pub use event::{CombatEvent, EventSink};
pub use inventory::{Inventory, ItemUse};
pub use item::{Item, ItemEffect, ItemKind};
pub use session::{CombatSession, SessionOutcome, SessionPhase};

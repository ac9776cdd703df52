//! Combat resolution system.
//!
//! This module provides the combatant model and the pure functions used to
//! resolve attacks between combatants. All combat logic is deterministic.
//!
//! # Core Functions
//!
//! - `Combatant::attack`: strike a target for the attacker's full attack power
//! - `Combatant::take_damage`: HP reduction (clamped to 0), reporting defeat once
//! - `Combatant::heal`: HP restoration capped at the starting maximum
//! - `apply_damage`: saturating HP arithmetic shared by the above

pub mod combatant;
pub mod damage;

pub use combatant::{AttackReport, Combatant, CombatantKind, DamageReport};
pub use damage::{apply_damage, apply_healing};

//! Combatants: anything with health and an attack value.

use super::damage::{apply_damage, apply_healing};

/// Role of a combatant in a session.
///
/// Player and enemy share identical mechanics; the kind only changes how the
/// combatant is labelled when its actions are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CombatantKind {
    Player,
    Enemy,
}

/// A participant in combat.
///
/// Health is unsigned and only ever changed through [`Combatant::take_damage`]
/// and [`Combatant::heal`], so it can never go negative and never exceeds the
/// value the combatant started with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    name: String,
    kind: CombatantKind,
    health: u32,
    max_health: u32,
    attack_power: u32,
}

/// Result of a single `take_damage` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageReport {
    pub hp_before: u32,
    pub hp_after: u32,
    /// True only on the call that brought health to 0.
    pub defeated: bool,
}

/// Result of one combatant attacking another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub attacker: String,
    pub attacker_kind: CombatantKind,
    pub target: String,
    pub target_kind: CombatantKind,
    pub damage: u32,
    pub target_health: u32,
    pub target_defeated: bool,
}

impl Combatant {
    pub fn new(
        name: impl Into<String>,
        kind: CombatantKind,
        health: u32,
        attack_power: u32,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            health,
            max_health: health,
            attack_power,
        }
    }

    pub fn player(name: impl Into<String>, health: u32, attack_power: u32) -> Self {
        Self::new(name, CombatantKind::Player, health, attack_power)
    }

    pub fn enemy(name: impl Into<String>, health: u32, attack_power: u32) -> Self {
        Self::new(name, CombatantKind::Enemy, health, attack_power)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CombatantKind {
        self.kind
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Strike `target` for this combatant's full attack power.
    pub fn attack(&self, target: &mut Combatant) -> AttackReport {
        let damage = target.take_damage(self.attack_power);

        AttackReport {
            attacker: self.name.clone(),
            attacker_kind: self.kind,
            target: target.name.clone(),
            target_kind: target.kind,
            damage: self.attack_power,
            target_health: damage.hp_after,
            target_defeated: damage.defeated,
        }
    }

    /// Subtract `amount` from health, clamping at 0.
    ///
    /// Damage to a combatant already at 0 leaves it at 0 and does not report
    /// a second defeat.
    pub fn take_damage(&mut self, amount: u32) -> DamageReport {
        let hp_before = self.health;
        self.health = apply_damage(hp_before, amount);

        DamageReport {
            hp_before,
            hp_after: self.health,
            defeated: hp_before > 0 && self.health == 0,
        }
    }

    /// Restore up to `amount` HP without exceeding the starting health.
    ///
    /// Defeated combatants stay defeated. Returns the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }

        let before = self.health;
        self.health = apply_healing(before, amount, self.max_health);
        self.health - before
    }
}

//! Stats derivation: maps the upgrade list to a `PlayerStats` snapshot.
//!
//! Pure and idempotent — deriving twice from the same upgrades yields
//! bit-identical output. Current health/shield are carried forward by the
//! caller and clamped to the (possibly changed) maxima.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BASE_PROJECTILE_COUNT, BASE_REGEN_PER_SEC, MIN_EMP_COOLDOWN_SECS, MIN_MAX_HEALTH,
};
use crate::upgrades::{Upgrade, UpgradeId};

/// Derived combat statistics. Immutable snapshot except for the current
/// `health`/`shield`, which the simulation mutates between derivations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub damage: f64,
    /// Attacks per second.
    pub attack_speed: f64,
    pub range: f64,
    /// Percentage 0-100.
    pub crit_chance: f64,
    /// Damage multiplier on crit.
    pub crit_factor: f64,
    /// Percent bonus per 10 units of target distance.
    pub damage_per_meter: f64,
    pub projectile_count: u32,
    pub health: f64,
    pub max_health: f64,
    /// Hp per second.
    pub regen: f64,
    /// Flat damage reduction.
    pub armor: f64,
    /// Percentage 0-100.
    pub dodge: f64,
    pub shield: f64,
    pub max_shield: f64,
    pub emp_damage: f64,
    /// Full cooldown in seconds.
    pub emp_cooldown: f64,
}

fn value_of(upgrades: &[Upgrade], id: UpgradeId) -> f64 {
    upgrades
        .iter()
        .find(|u| u.id == id)
        .map(|u| u.effective_value())
        .unwrap_or(0.0)
}

fn or_default(value: f64, default: f64) -> f64 {
    if value == 0.0 {
        default
    } else {
        value
    }
}

/// Derive a `PlayerStats` snapshot from the upgrade list.
///
/// With `carry: None` health and shield start at their maxima; otherwise
/// the carried `(health, shield)` pair is clamped to the new maxima, so a
/// capacity increase heals and a decrease never leaves an overfull bar.
pub fn derive_stats(upgrades: &[Upgrade], carry: Option<(f64, f64)>) -> PlayerStats {
    let max_health = or_default(value_of(upgrades, UpgradeId::MaxHealth), 100.0).max(MIN_MAX_HEALTH);
    let max_shield = value_of(upgrades, UpgradeId::MaxShield);

    let (health, shield) = match carry {
        Some((hp, sh)) => (hp.min(max_health), sh.min(max_shield)),
        None => (max_health, max_shield),
    };

    let multi_shot = value_of(upgrades, UpgradeId::MultiShot);

    PlayerStats {
        damage: or_default(value_of(upgrades, UpgradeId::Damage), 5.0),
        attack_speed: or_default(value_of(upgrades, UpgradeId::AttackSpeed), 1.0),
        range: or_default(value_of(upgrades, UpgradeId::Range), 150.0),
        crit_chance: value_of(upgrades, UpgradeId::CritChance),
        crit_factor: or_default(value_of(upgrades, UpgradeId::CritFactor), 1.0),
        damage_per_meter: value_of(upgrades, UpgradeId::DamagePerMeter),
        projectile_count: BASE_PROJECTILE_COUNT + multi_shot as u32,
        health,
        max_health,
        regen: BASE_REGEN_PER_SEC + value_of(upgrades, UpgradeId::Regen),
        armor: value_of(upgrades, UpgradeId::Armor),
        dodge: value_of(upgrades, UpgradeId::Dodge),
        shield,
        max_shield,
        emp_damage: or_default(value_of(upgrades, UpgradeId::EmpDamage), 50.0),
        emp_cooldown: or_default(value_of(upgrades, UpgradeId::EmpCooldown), 30.0)
            .max(MIN_EMP_COOLDOWN_SECS),
    }
}

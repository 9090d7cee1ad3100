//! Upgrade definitions: the fourteen purchasable axes, their cost and
//! value curves, and the per-axis design limits.

use serde::{Deserialize, Serialize};

use crate::enums::UpgradeCategory;

/// Stable key for an upgrade axis. The serialized form matches the save
/// records produced by earlier builds, so old profiles load unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeId {
    #[serde(rename = "dmg")]
    Damage,
    #[serde(rename = "atk_spd")]
    AttackSpeed,
    #[serde(rename = "range")]
    Range,
    #[serde(rename = "multi_shot")]
    MultiShot,
    #[serde(rename = "crit_chn")]
    CritChance,
    #[serde(rename = "crit_fac")]
    CritFactor,
    #[serde(rename = "dmg_mtr")]
    DamagePerMeter,
    #[serde(rename = "hp")]
    MaxHealth,
    #[serde(rename = "max_shield")]
    MaxShield,
    #[serde(rename = "regen")]
    Regen,
    #[serde(rename = "armor")]
    Armor,
    #[serde(rename = "dodge")]
    Dodge,
    #[serde(rename = "emp_dmg")]
    EmpDamage,
    #[serde(rename = "emp_cdr")]
    EmpCooldown,
}

impl UpgradeId {
    /// All axes, in display order.
    pub const ALL: [UpgradeId; 14] = [
        UpgradeId::Damage,
        UpgradeId::AttackSpeed,
        UpgradeId::Range,
        UpgradeId::MultiShot,
        UpgradeId::CritChance,
        UpgradeId::CritFactor,
        UpgradeId::DamagePerMeter,
        UpgradeId::MaxHealth,
        UpgradeId::MaxShield,
        UpgradeId::Regen,
        UpgradeId::Armor,
        UpgradeId::Dodge,
        UpgradeId::EmpDamage,
        UpgradeId::EmpCooldown,
    ];

    /// Design limits for the derived value of this axis, `(min, max)`.
    /// Axes without a cap return infinite bounds.
    pub fn value_limits(self) -> (f64, f64) {
        match self {
            UpgradeId::Range => (50.0, 450.0),
            UpgradeId::CritChance => (0.0, 50.0),
            UpgradeId::CritFactor => (1.0, 6.0),
            UpgradeId::MultiShot => (0.0, 15.0),
            UpgradeId::Regen => (0.0, 50.0),
            UpgradeId::Armor => (0.0, 200.0),
            UpgradeId::Dodge => (0.0, 90.0),
            UpgradeId::MaxShield => (0.0, 2000.0),
            UpgradeId::DamagePerMeter => (0.0, 200.0),
            UpgradeId::EmpDamage => (0.0, 5000.0),
            UpgradeId::EmpCooldown => (1.0, 120.0),
            _ => (f64::NEG_INFINITY, f64::INFINITY),
        }
    }
}

/// One purchasable upgrade axis and its current level. The serialized
/// field names follow the legacy save-record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upgrade {
    pub id: UpgradeId,
    pub name: String,
    #[serde(rename = "type")]
    pub category: UpgradeCategory,
    pub base_cost: f64,
    pub cost_multiplier: f64,
    pub base_value: f64,
    pub value_per_level: f64,
    pub level: u32,
    /// Display unit for the host UI ("%", "/s", "x", "m", or empty).
    pub unit: String,
    pub description: String,
}

impl Upgrade {
    /// Cost of the next level: `floor(base * multiplier^level)`.
    pub fn next_cost(&self) -> f64 {
        (self.base_cost * self.cost_multiplier.powi(self.level as i32)).floor()
    }

    /// Effective value at the current level. Locked axes (level 0)
    /// contribute nothing; unlocked values are clamped to the axis limits.
    pub fn effective_value(&self) -> f64 {
        if self.level == 0 {
            return 0.0;
        }
        let raw = self.base_value + self.value_per_level * (self.level - 1) as f64;
        let (min, max) = self.id.value_limits();
        raw.clamp(min, max)
    }
}

fn upgrade(
    id: UpgradeId,
    name: &str,
    category: UpgradeCategory,
    base_cost: f64,
    cost_multiplier: f64,
    base_value: f64,
    value_per_level: f64,
    level: u32,
    unit: &str,
    description: &str,
) -> Upgrade {
    Upgrade {
        id,
        name: name.to_string(),
        category,
        base_cost,
        cost_multiplier,
        base_value,
        value_per_level,
        level,
        unit: unit.to_string(),
        description: description.to_string(),
    }
}

/// The initial upgrade table for a fresh profile.
pub fn initial_upgrades() -> Vec<Upgrade> {
    use UpgradeCategory::*;
    use UpgradeId::*;

    vec![
        upgrade(Damage, "Damage", Attack, 10.0, 1.4, 5.0, 2.0, 1, "", "Base damage per hit"),
        upgrade(AttackSpeed, "Attack Speed", Attack, 15.0, 1.5, 1.0, 0.1, 1, "/s", "Attacks per second"),
        upgrade(Range, "Range", Attack, 20.0, 1.3, 150.0, 10.0, 1, "m", "Maximum attack distance"),
        upgrade(MultiShot, "Projectiles", Attack, 500.0, 2.0, 3.0, 1.0, 0, "x", "Simultaneous targets"),
        upgrade(CritChance, "Crit Chance", Attack, 100.0, 1.5, 2.0, 0.5, 0, "%", "Chance of a critical hit"),
        upgrade(CritFactor, "Crit Factor", Attack, 150.0, 1.6, 1.1, 0.1, 0, "x", "Damage multiplier on crit"),
        upgrade(DamagePerMeter, "Damage/Meter", Attack, 200.0, 1.6, 1.0, 0.5, 0, "%", "Bonus damage by distance"),
        upgrade(MaxHealth, "Health", Defense, 10.0, 1.3, 100.0, 20.0, 1, "", "Maximum hit points"),
        upgrade(MaxShield, "Energy Shield", Defense, 150.0, 1.5, 20.0, 10.0, 0, "", "Regenerating damage buffer"),
        upgrade(Regen, "Regeneration", Defense, 50.0, 1.4, 1.0, 0.5, 0, "/s", "Health restored per second"),
        upgrade(Armor, "Armor", Defense, 75.0, 1.5, 1.0, 1.0, 0, "", "Flat damage reduction"),
        upgrade(Dodge, "Dodge", Defense, 100.0, 1.6, 5.0, 0.5, 0, "%", "Chance to avoid a hit"),
        upgrade(EmpDamage, "EMP Damage", Utility, 300.0, 1.5, 50.0, 25.0, 1, "", "Shockwave damage"),
        upgrade(EmpCooldown, "EMP Recharge", Utility, 400.0, 1.5, 30.0, -2.0, 1, "s", "Shockwave cooldown"),
    ]
}

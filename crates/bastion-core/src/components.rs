//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;

/// Marks an entity as an enemy converging on the center.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks an entity as a projectile fired by the auto-weapon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Combat state of an enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyState {
    /// Unique per spawn. Projectiles and the shockwave hit-set refer to
    /// enemies by this id, never by entity handle.
    pub unit_id: u32,
    pub kind: EnemyKind,
    pub hp: f64,
    pub max_hp: f64,
    /// Movement speed (units/s).
    pub speed: f64,
    /// Melee damage.
    pub damage: f64,
    /// Body radius (units).
    pub radius: f64,
    /// Remaining stun in seconds. While positive, movement and melee are
    /// suppressed; death checks are not.
    pub stun_timer: f64,
    /// Marked during the tick; the entity is despawned only by the
    /// end-of-tick cleanup pass, so iteration order stays stable.
    pub dead: bool,
}

/// Flight state of a projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileState {
    pub id: u32,
    /// Weak reference to the target enemy, resolved by unit_id each tick.
    /// A vanished or dead target discards the projectile without effect.
    pub target_id: u32,
    /// Travel speed (units/s).
    pub speed: f64,
    pub damage: f64,
    pub crit: bool,
    /// Marked on impact or target loss; despawned by cleanup.
    pub spent: bool,
}

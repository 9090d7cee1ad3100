//! Events emitted by the simulation for the host's audio/visual feedback.
//!
//! Events are transient: drained into each snapshot and never replayed.
//! The simulation does not depend on whether the host renders them.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, RejectReason};

/// One tick's worth of cosmetic and feedback triggers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile connected with an enemy.
    EnemyHit { unit_id: u32, damage: f64, crit: bool },
    /// An enemy died; rewards have been credited.
    EnemyKilled { unit_id: u32, kind: EnemyKind, cash: f64, score: f64 },
    /// An enemy was caught by the shockwave ring.
    EnemyStunned { unit_id: u32 },
    /// The player dodged a melee strike.
    Dodged,
    /// The shield soaked an entire melee strike.
    ShieldAbsorbed { amount: f64 },
    /// The shield was depleted by a strike that spilled into health.
    ShieldBroken,
    /// The player lost health.
    PlayerHit { damage: f64 },
    /// A wave finished; rewards have been credited.
    WaveCompleted { wave: u32, cash: f64, score: f64, gems: u32 },
    /// The shockwave ability was activated.
    AbilityFired,
    /// The run ended.
    GameOver { wave: u32, score: f64 },
    /// A command was rejected (see the reason). Never fatal.
    CommandRejected { reason: RejectReason },
}

//! Game state snapshot — the complete visible state handed to the host
//! once per tick, after the tick completes. Read-only by contract.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, GamePhase, GameSpeed};
use crate::events::GameEvent;
use crate::stats::PlayerStats;
use crate::types::{Position, SimTime};

/// Complete per-tick state for the rendering/UI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub speed: GameSpeed,
    pub stats: PlayerStats,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub wave: u32,
    /// Wave completion progress, 0-100.
    pub wave_progress_pct: f64,
    pub cash: f64,
    pub gems: u32,
    pub score: f64,
    /// Seconds until the shockwave ability is ready again.
    pub ability_cooldown_secs: f64,
    pub is_game_over: bool,
    /// Events accumulated since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// A live enemy on the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub unit_id: u32,
    pub kind: EnemyKind,
    pub position: Position,
    pub hp: f64,
    pub max_hp: f64,
    pub radius: f64,
    /// Remaining stun in seconds (0 when not stunned).
    pub stun_remaining_secs: f64,
}

/// A live projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Position,
    pub target_id: u32,
    pub crit: bool,
}

//! Snapshot system: builds the complete read-only state for the host.
//!
//! Never modifies the world. Runs after the tick completes, so the views
//! only contain live (compacted) entities.

use hecs::World;

use bastion_core::components::{Enemy, EnemyState, Projectile, ProjectileState};
use bastion_core::enums::{GamePhase, GameSpeed};
use bastion_core::events::GameEvent;
use bastion_core::state::{EnemyView, GameStateSnapshot, ProjectileView};
use bastion_core::stats::PlayerStats;
use bastion_core::types::{Position, SimTime};

use crate::economy::EconomyState;
use crate::systems::wave_spawner::WaveState;

/// Build a complete snapshot of the current state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    speed: GameSpeed,
    stats: &PlayerStats,
    wave: &WaveState,
    economy: &EconomyState,
    ability_cooldown_secs: f64,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        speed,
        stats: stats.clone(),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        wave: wave.wave,
        wave_progress_pct: wave.progress_pct(),
        cash: economy.cash,
        gems: economy.gems,
        score: economy.score,
        ability_cooldown_secs,
        is_game_over: phase == GamePhase::GameOver,
        events,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &EnemyState)>()
        .iter()
        .filter(|(_, (_, _, state))| !state.dead)
        .map(|(_, (_, pos, state))| EnemyView {
            unit_id: state.unit_id,
            kind: state.kind,
            position: *pos,
            hp: state.hp,
            max_hp: state.max_hp,
            radius: state.radius,
            stun_remaining_secs: state.stun_timer,
        })
        .collect();

    enemies.sort_by_key(|e| e.unit_id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &ProjectileState)>()
        .iter()
        .filter(|(_, (_, _, state))| !state.spent)
        .map(|(_, (_, pos, state))| ProjectileView {
            id: state.id,
            position: *pos,
            target_id: state.target_id,
            crit: state.crit,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}

//! Entity spawn factories for populating the simulation world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bastion_core::components::{Enemy, EnemyState};
use bastion_core::constants::*;
use bastion_core::enums::EnemyKind;
use bastion_core::types::Position;

/// Roll the enemy kind for a regular spawn. Tanks and speedsters are
/// gated by wave thresholds and take the top slices of the roll.
pub fn roll_enemy_kind(rng: &mut ChaCha8Rng, wave: u32) -> EnemyKind {
    let roll: f64 = rng.gen();
    if wave >= TANK_UNLOCK_WAVE && roll > 0.8 {
        EnemyKind::Tank
    } else if wave >= SPEEDSTER_UNLOCK_WAVE && roll > 0.7 {
        EnemyKind::Speedster
    } else {
        EnemyKind::Standard
    }
}

/// Spawn a single enemy at a uniformly random angle just beyond the
/// arena edge, scaled for the given wave.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: u32,
    kind: EnemyKind,
    next_unit_id: &mut u32,
) -> hecs::Entity {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let position = Position::new(SPAWN_RADIUS * angle.cos(), SPAWN_RADIUS * angle.sin());

    let difficulty = 1.0 + wave as f64 * DIFFICULTY_STEP;
    let hp = ENEMY_BASE_HP * difficulty * kind.hp_mult();
    let speed = rng.gen_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX)
        * (1.0 + wave as f64 * SPEED_SCALE_STEP)
        * kind.speed_mult();

    let unit_id = *next_unit_id;
    *next_unit_id += 1;

    world.spawn((
        Enemy,
        position,
        EnemyState {
            unit_id,
            kind,
            hp,
            max_hp: hp,
            speed,
            damage: ENEMY_BASE_DAMAGE * difficulty * kind.damage_mult(),
            radius: kind.radius(),
            stun_timer: 0.0,
            dead: false,
        },
    ))
}

/// Spawn an enemy at an exact position with fixed combat parameters
/// (for tests that need deterministic placement).
#[cfg(test)]
pub fn spawn_enemy_at(
    world: &mut World,
    position: Position,
    kind: EnemyKind,
    hp: f64,
    speed: f64,
    damage: f64,
    next_unit_id: &mut u32,
) -> hecs::Entity {
    let unit_id = *next_unit_id;
    *next_unit_id += 1;

    world.spawn((
        Enemy,
        position,
        EnemyState {
            unit_id,
            kind,
            hp,
            max_hp: hp,
            speed,
            damage,
            radius: kind.radius(),
            stun_timer: 0.0,
            dead: false,
        },
    ))
}

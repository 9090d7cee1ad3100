//! Projectile advance and impact resolution.
//!
//! Projectiles track their target by unit id, looked up each tick; a
//! target that despawned or died discards the projectile without effect
//! — absence is a normal outcome, not an error.

use std::collections::HashMap;

use hecs::World;

use bastion_core::components::{Enemy, EnemyState, Projectile, ProjectileState};
use bastion_core::constants::PROJECTILE_SPEED;
use bastion_core::events::GameEvent;
use bastion_core::stats::PlayerStats;
use bastion_core::types::Position;

use crate::economy::{self, EconomyState};

/// Advance all projectiles and resolve impacts.
pub fn run(
    world: &mut World,
    stats: &PlayerStats,
    economy: &mut EconomyState,
    wave: u32,
    events: &mut Vec<GameEvent>,
    dt: f64,
) {
    // unit_id -> entity for all live enemies.
    let enemy_index: HashMap<u32, hecs::Entity> = {
        let mut query = world.query::<(&Enemy, &EnemyState)>();
        query
            .iter()
            .filter(|(_, (_, state))| !state.dead)
            .map(|(entity, (_, state))| (state.unit_id, entity))
            .collect()
    };

    // (entity, target_id, damage, crit) of every in-flight projectile.
    let in_flight: Vec<(hecs::Entity, u32, f64, bool)> = {
        let mut query = world.query::<(&Projectile, &ProjectileState)>();
        query
            .iter()
            .filter(|(_, (_, state))| !state.spent)
            .map(|(entity, (_, state))| (entity, state.target_id, state.damage, state.crit))
            .collect()
    };

    for (proj_entity, target_id, damage, crit) in in_flight {
        let Some(&target_entity) = enemy_index.get(&target_id) else {
            discard(world, proj_entity);
            continue;
        };

        let (target_pos, target_radius) = {
            let pos = match world.get::<&Position>(target_entity).map(|p| *p) {
                Ok(p) => p,
                Err(_) => {
                    discard(world, proj_entity);
                    continue;
                }
            };
            let radius = world
                .get::<&EnemyState>(target_entity)
                .map(|s| s.radius)
                .unwrap_or(0.0);
            (pos, radius)
        };

        let proj_pos = match world.get::<&Position>(proj_entity) {
            Ok(p) => *p,
            Err(_) => continue,
        };

        // Hit when the remaining gap is inside this tick's travel plus
        // the target body.
        let step = PROJECTILE_SPEED * dt;
        let threshold = step + target_radius;
        if proj_pos.distance_sq_to(&target_pos) < threshold * threshold {
            impact(
                world,
                target_entity,
                target_id,
                damage,
                crit,
                stats,
                economy,
                wave,
                events,
            );
            discard(world, proj_entity);
        } else if let Ok(mut pos) = world.get::<&mut Position>(proj_entity) {
            pos.step_toward(&target_pos, step);
        }
    }
}

/// Apply impact damage with the distance bonus, and credit the kill if
/// the target dies.
#[allow(clippy::too_many_arguments)]
fn impact(
    world: &mut World,
    target_entity: hecs::Entity,
    target_id: u32,
    damage: f64,
    crit: bool,
    stats: &PlayerStats,
    economy: &mut EconomyState,
    wave: u32,
    events: &mut Vec<GameEvent>,
) {
    let mut killed: Option<bastion_core::enums::EnemyKind> = None;

    if let Ok(mut state) = world.get::<&mut EnemyState>(target_entity) {
        let dist_from_center = world
            .get::<&Position>(target_entity)
            .map(|p| p.distance_from_center())
            .unwrap_or(0.0);
        let bonus = 1.0 + (dist_from_center / 10.0) * (stats.damage_per_meter / 100.0);
        let final_damage = damage * bonus;

        state.hp -= final_damage;
        events.push(GameEvent::EnemyHit {
            unit_id: target_id,
            damage: final_damage,
            crit,
        });

        if state.hp <= 0.0 && !state.dead {
            state.dead = true;
            killed = Some(state.kind);
        }
    }

    if let Some(kind) = killed {
        let (cash, score) = economy::kill_reward(wave, kind.reward_mult());
        economy.credit(cash, score);
        events.push(GameEvent::EnemyKilled {
            unit_id: target_id,
            kind,
            cash,
            score,
        });
    }
}

fn discard(world: &mut World, proj_entity: hecs::Entity) {
    if let Ok(mut state) = world.get::<&mut ProjectileState>(proj_entity) {
        state.spent = true;
    }
}

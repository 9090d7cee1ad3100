//! Cleanup system: compacts dead enemies and spent projectiles.
//!
//! Runs last in the tick, so every other system iterates a structurally
//! stable world. Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use bastion_core::components::{EnemyState, ProjectileState};

/// Despawn everything marked dead or spent during this tick.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, state) in world.query_mut::<&EnemyState>() {
        if state.dead {
            despawn_buffer.push(entity);
        }
    }

    for (entity, state) in world.query_mut::<&ProjectileState>() {
        if state.spent {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

//! Shockwave (EMP) ability: an expanding ring that damages and stuns.
//!
//! Each enemy can be hit at most once per activation — the hit-set keeps
//! the ring from touching the same unit twice even if the band
//! re-overlaps it on a later tick.

use std::collections::HashSet;

use hecs::World;

use bastion_core::components::{Enemy, EnemyState};
use bastion_core::constants::*;
use bastion_core::events::GameEvent;
use bastion_core::stats::PlayerStats;
use bastion_core::types::Position;

use crate::economy::{self, EconomyState};

/// Singleton ability state owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct ShockwaveState {
    pub active: bool,
    /// Current ring radius (units).
    pub radius: f64,
    /// Units already struck during this activation.
    pub hit_ids: HashSet<u32>,
}

impl ShockwaveState {
    /// Activate the ring: reset the radius to the seed value and forget
    /// everything hit by the previous activation.
    pub fn trigger(&mut self) {
        self.active = true;
        self.radius = SHOCKWAVE_SEED_RADIUS;
        self.hit_ids.clear();
    }
}

/// Expand the ring and strike enemies in the band.
pub fn run(
    world: &mut World,
    shockwave: &mut ShockwaveState,
    stats: &PlayerStats,
    economy: &mut EconomyState,
    wave: u32,
    events: &mut Vec<GameEvent>,
    dt: f64,
) {
    if !shockwave.active {
        return;
    }

    shockwave.radius += SHOCKWAVE_EXPANSION_RATE * dt;

    for (_entity, (_enemy, pos, state)) in
        world.query_mut::<(&Enemy, &Position, &mut EnemyState)>()
    {
        if state.dead || shockwave.hit_ids.contains(&state.unit_id) {
            continue;
        }

        let dist = pos.distance_from_center();
        if (dist - shockwave.radius).abs() < SHOCKWAVE_BAND_HALF_WIDTH {
            shockwave.hit_ids.insert(state.unit_id);

            state.hp -= stats.emp_damage;
            state.stun_timer = STUN_DURATION_SECS;
            events.push(GameEvent::EnemyStunned {
                unit_id: state.unit_id,
            });

            if state.hp <= 0.0 {
                state.dead = true;
                // Ring kills pay the flat reward, no kind multiplier.
                let (cash, score) = economy::kill_reward(wave, 1.0);
                economy.credit(cash, score);
                events.push(GameEvent::EnemyKilled {
                    unit_id: state.unit_id,
                    kind: state.kind,
                    cash,
                    score,
                });
            }
        }
    }

    if shockwave.radius > SHOCKWAVE_MAX_RADIUS {
        shockwave.active = false;
    }
}

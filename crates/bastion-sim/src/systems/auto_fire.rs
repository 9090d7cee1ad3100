//! Auto-weapon fire: target acquisition and projectile spawning.
//!
//! The weapon is gated by a cooldown of `1 / attack_speed` simulated
//! seconds. It fires only when at least one live enemy is in range, so
//! an expired cooldown carries over and the first eligible target is
//! engaged immediately.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bastion_core::components::{Enemy, EnemyState, Projectile, ProjectileState};
use bastion_core::constants::PROJECTILE_SPEED;
use bastion_core::stats::PlayerStats;
use bastion_core::types::Position;

/// Run target acquisition and fire if the cooldown has elapsed.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    stats: &PlayerStats,
    shot_timer: &mut f64,
    next_unit_id: &mut u32,
    dt: f64,
) {
    *shot_timer += dt;
    let cooldown = 1.0 / stats.attack_speed;
    if *shot_timer < cooldown {
        return;
    }

    // Nearest distinct enemies within range, by squared distance.
    let range_sq = stats.range * stats.range;
    let mut targets: Vec<(u32, f64)> = {
        let mut query = world.query::<(&Enemy, &Position, &EnemyState)>();
        query
            .iter()
            .filter(|(_, (_, _, state))| !state.dead)
            .filter_map(|(_, (_, pos, state))| {
                let dist_sq = pos.distance_sq_to(&Position::default());
                (dist_sq <= range_sq).then_some((state.unit_id, dist_sq))
            })
            .collect()
    };
    if targets.is_empty() {
        return;
    }

    targets.sort_by(|a, b| a.1.total_cmp(&b.1));
    targets.truncate(stats.projectile_count as usize);

    // One projectile per selected enemy; each rolls its crit
    // independently. Crit 0 never triggers, crit 100 always does.
    for (target_id, _) in targets {
        let crit = rng.gen::<f64>() * 100.0 < stats.crit_chance;
        let damage = stats.damage * if crit { stats.crit_factor } else { 1.0 };

        let id = *next_unit_id;
        *next_unit_id += 1;

        world.spawn((
            Projectile,
            Position::default(),
            ProjectileState {
                id,
                target_id,
                speed: PROJECTILE_SPEED,
                damage,
                crit,
                spent: false,
            },
        ));
    }

    *shot_timer = 0.0;
}

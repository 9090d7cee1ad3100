//! Enemy approach and contact resolution.
//!
//! Each non-stunned enemy moves straight toward the arena center at its
//! own speed. Inside contact range it executes one melee strike and —
//! unless it is a boss — is consumed by the attack.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bastion_core::components::{Enemy, EnemyState};
use bastion_core::constants::CONTACT_RADIUS;
use bastion_core::enums::EnemyKind;
use bastion_core::events::GameEvent;
use bastion_core::stats::PlayerStats;
use bastion_core::types::Position;

/// Advance all enemies for one tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    stats: &mut PlayerStats,
    events: &mut Vec<GameEvent>,
    dt: f64,
) {
    let center = Position::default();

    for (_entity, (_enemy, pos, state)) in
        world.query_mut::<(&Enemy, &mut Position, &mut EnemyState)>()
    {
        if state.dead {
            continue;
        }

        // Stun suppresses movement and melee, not death checks.
        if state.stun_timer > 0.0 {
            state.stun_timer = (state.stun_timer - dt).max(0.0);
            continue;
        }

        let contact = CONTACT_RADIUS + state.kind.contact_bonus();
        if pos.distance_from_center() > contact {
            pos.step_toward(&center, state.speed * dt);
        } else {
            resolve_melee(rng, stats, state.damage, events);
            if state.kind != EnemyKind::Boss {
                state.dead = true;
            }
        }
    }
}

/// Resolve one melee strike against the player, in strict order:
/// dodge roll, armor reduction, shield absorption, health.
pub fn resolve_melee(
    rng: &mut ChaCha8Rng,
    stats: &mut PlayerStats,
    enemy_damage: f64,
    events: &mut Vec<GameEvent>,
) {
    // A miss consumes no further steps. Dodge 0 never triggers,
    // dodge 100 always does.
    let roll: f64 = rng.gen::<f64>() * 100.0;
    if roll < stats.dodge {
        events.push(GameEvent::Dodged);
        return;
    }

    let raw = (enemy_damage - stats.armor).max(1.0);

    // Shield absorbs before health, regardless of magnitude.
    let mut to_health = raw;
    if stats.shield > 0.0 {
        if stats.shield >= raw {
            stats.shield -= raw;
            events.push(GameEvent::ShieldAbsorbed { amount: raw });
            return;
        }
        to_health = raw - stats.shield;
        stats.shield = 0.0;
        events.push(GameEvent::ShieldBroken);
    }

    stats.health -= to_health;
    events.push(GameEvent::PlayerHit { damage: to_health });
}

//! Health regeneration and shield recharge.
//!
//! Runs on a slower simulated-time cadence than the main tick, so the
//! recovery rate is independent of the host frame rate and speed setting.

use bastion_core::constants::{RECOVERY_CADENCE_SECS, SHIELD_RECHARGE_FRACTION};
use bastion_core::stats::PlayerStats;

/// Accumulate `dt` and apply one recovery step per elapsed cadence.
pub fn run(stats: &mut PlayerStats, accumulator: &mut f64, dt: f64) {
    *accumulator += dt;
    while *accumulator >= RECOVERY_CADENCE_SECS {
        *accumulator -= RECOVERY_CADENCE_SECS;

        if stats.shield < stats.max_shield {
            let gain = stats.max_shield * SHIELD_RECHARGE_FRACTION * RECOVERY_CADENCE_SECS;
            stats.shield = (stats.shield + gain).min(stats.max_shield);
        }
        if stats.health < stats.max_health {
            let gain = stats.regen * RECOVERY_CADENCE_SECS;
            stats.health = (stats.health + gain).min(stats.max_health);
        }
    }
}

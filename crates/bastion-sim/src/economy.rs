//! Currency, score and upgrade purchase handling.

use bastion_core::constants::*;
use bastion_core::enums::RejectReason;
use bastion_core::events::GameEvent;
use bastion_core::profile::PlayerProfile;
use bastion_core::stats::{derive_stats, PlayerStats};
use bastion_core::upgrades::{Upgrade, UpgradeId};

/// Running currency and score totals. Monotonically adjusted by reward
/// events and purchase costs; never negative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EconomyState {
    pub cash: f64,
    pub gems: u32,
    pub score: f64,
}

impl EconomyState {
    pub fn from_profile(profile: &PlayerProfile) -> Self {
        Self {
            cash: profile.cash,
            gems: profile.gems,
            score: profile.score,
        }
    }

    /// Credit a cash/score reward.
    pub fn credit(&mut self, cash: f64, score: f64) {
        self.cash += cash;
        self.score += score;
    }
}

/// Cash and score paid for a kill on the given wave, before the enemy
/// kind multiplier.
pub fn kill_reward(wave: u32, mult: f64) -> (f64, f64) {
    let cash = (KILL_CASH_BASE + wave as f64 * KILL_CASH_PER_WAVE) * mult;
    let score = wave as f64 * KILL_SCORE_PER_WAVE * mult;
    (cash, score)
}

/// Cash, score and gems paid for completing the given wave. Every
/// milestone wave pays a premium-currency bonus.
pub fn wave_reward(wave: u32) -> (f64, f64, u32) {
    let cash = WAVE_CASH_BASE + wave as f64 * WAVE_CASH_PER_WAVE;
    let score = wave as f64 * WAVE_SCORE_PER_WAVE;
    let mut gems = WAVE_GEM_REWARD;
    if wave % MILESTONE_WAVE_INTERVAL == 0 {
        gems += MILESTONE_GEM_BONUS;
    }
    (cash, score, gems)
}

/// Attempt to buy the next level of an upgrade axis.
///
/// Rejections (insufficient cash, or a purchase with no observable effect
/// on the derived stats) leave all state untouched and emit a feedback
/// event. On success the level increments, cash drops by the cost, and
/// any max-health/max-shield increase heals the current bars before the
/// stats are re-derived.
pub fn purchase(
    upgrades: &mut Vec<Upgrade>,
    economy: &mut EconomyState,
    stats: &mut PlayerStats,
    id: UpgradeId,
    events: &mut Vec<GameEvent>,
) -> bool {
    let Some(idx) = upgrades.iter().position(|u| u.id == id) else {
        events.push(GameEvent::CommandRejected {
            reason: RejectReason::NoEffect,
        });
        return false;
    };

    let cost = upgrades[idx].next_cost();
    if economy.cash < cost {
        events.push(GameEvent::CommandRejected {
            reason: RejectReason::InsufficientCash,
        });
        return false;
    }

    // Simulate the purchase before committing: a level that changes no
    // derived stat (a capped axis) is rejected instead of charged.
    let before = derive_stats(upgrades, None);
    let mut trial = upgrades.clone();
    trial[idx].level += 1;
    let after = derive_stats(&trial, None);
    if after == before {
        events.push(GameEvent::CommandRejected {
            reason: RejectReason::NoEffect,
        });
        return false;
    }

    upgrades[idx].level += 1;
    economy.cash -= cost;

    // Heal by the capacity increase so the bars don't look freshly
    // damaged after buying Health or Energy Shield.
    let mut health = stats.health;
    let mut shield = stats.shield;
    if after.max_health > before.max_health {
        health += after.max_health - before.max_health;
    }
    if after.max_shield > before.max_shield {
        shield += after.max_shield - before.max_shield;
    }
    *stats = derive_stats(upgrades, Some((health, shield)));
    true
}

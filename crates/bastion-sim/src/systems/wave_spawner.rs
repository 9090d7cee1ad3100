//! Wave scheduling: wave timer, completion rewards, and spawn cadence.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use bastion_core::components::{Enemy, EnemyState};
use bastion_core::constants::*;
use bastion_core::enums::EnemyKind;
use bastion_core::events::GameEvent;

use crate::economy::{self, EconomyState};
use crate::world_setup;

/// Per-run wave state owned by the engine.
#[derive(Debug, Clone)]
pub struct WaveState {
    /// Current wave number (>= 1).
    pub wave: u32,
    /// Seconds into the current wave.
    pub wave_timer: f64,
    /// Counts down to the next spawn event.
    pub spawn_timer: f64,
    /// Enemies spawned so far this wave.
    pub spawned_this_wave: u32,
    /// Expected total spawns for this wave at full cadence.
    pub expected_this_wave: u32,
}

impl WaveState {
    pub fn new(wave: u32) -> Self {
        let wave = wave.max(1);
        Self {
            wave,
            wave_timer: 0.0,
            spawn_timer: 0.0,
            spawned_this_wave: 0,
            expected_this_wave: expected_spawns(wave),
        }
    }

    /// Restart the timers for a fresh run without losing the wave number.
    pub fn reset_timers(&mut self) {
        self.wave_timer = 0.0;
        self.spawn_timer = 0.0;
        self.spawned_this_wave = 0;
        self.expected_this_wave = expected_spawns(self.wave);
    }

    /// Wave completion progress, 0-100.
    pub fn progress_pct(&self) -> f64 {
        (self.wave_timer / WAVE_DURATION_SECS) * 100.0
    }
}

/// Seconds between spawn events on the given wave. Floored so the
/// cadence never degenerates to zero.
pub fn spawn_interval(wave: u32) -> f64 {
    (SPAWN_INTERVAL_BASE - wave as f64 * SPAWN_INTERVAL_STEP).max(SPAWN_INTERVAL_MIN)
}

/// Enemies per spawn event on the given wave.
pub fn spawn_count(wave: u32) -> u32 {
    1 + wave / 5
}

/// Expected total spawns for a wave at full cadence.
pub fn expected_spawns(wave: u32) -> u32 {
    (WAVE_DURATION_SECS / spawn_interval(wave)).floor() as u32 * spawn_count(wave)
}

/// Advance the wave timer, hand out completion rewards, and run the
/// spawn cadence.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave_state: &mut WaveState,
    economy: &mut EconomyState,
    events: &mut Vec<GameEvent>,
    next_unit_id: &mut u32,
    dt: f64,
) {
    // Wave completion.
    wave_state.wave_timer += dt;
    if wave_state.wave_timer >= WAVE_DURATION_SECS {
        let completed = wave_state.wave;
        let (cash, score, gems) = economy::wave_reward(completed);
        economy.credit(cash, score);
        economy.gems += gems;
        events.push(GameEvent::WaveCompleted {
            wave: completed,
            cash,
            score,
            gems,
        });

        wave_state.wave += 1;
        wave_state.wave_timer = 0.0;
        wave_state.spawned_this_wave = 0;
        wave_state.expected_this_wave = expected_spawns(wave_state.wave);

        // Milestone waves open with a boss, on top of the normal cadence.
        if wave_state.wave % MILESTONE_WAVE_INTERVAL == 0 {
            world_setup::spawn_enemy(world, rng, wave_state.wave, EnemyKind::Boss, next_unit_id);
        }
    }

    // Spawn cadence. The timer resets even when the population cap
    // suppresses the spawn, bounding per-tick cost.
    wave_state.spawn_timer -= dt;
    if wave_state.spawn_timer <= 0.0 {
        if live_enemy_count(world) < MAX_LIVE_ENEMIES {
            let count = spawn_count(wave_state.wave);
            for _ in 0..count {
                let kind = world_setup::roll_enemy_kind(rng, wave_state.wave);
                world_setup::spawn_enemy(world, rng, wave_state.wave, kind, next_unit_id);
            }
            wave_state.spawned_this_wave += count;
        }
        wave_state.spawn_timer = spawn_interval(wave_state.wave);
    }
}

fn live_enemy_count(world: &World) -> usize {
    let mut query = world.query::<(&Enemy, &EnemyState)>();
    query.iter().filter(|(_, (_, state))| !state.dead).count()
}

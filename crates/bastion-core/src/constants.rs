//! Simulation constants and tuning parameters.

/// Nominal host frame rate (Hz). The host drives one simulation step per
/// rendered frame; the engine itself accepts any clamped delta.
pub const FRAME_RATE: u32 = 60;

/// Upper clamp on per-step delta time in seconds. Protects against large
/// catch-up jumps after a stall (e.g. the host tab being backgrounded).
pub const MAX_FRAME_DT: f64 = 0.1;

// --- Arena ---

/// Half-extent of the square arena, measured from the center (units).
pub const ARENA_HALF_EXTENT: f64 = 400.0;

/// Radial distance from the center at which enemies spawn — just beyond
/// the arena edge, so no collision-free placement is needed.
pub const SPAWN_RADIUS: f64 = ARENA_HALF_EXTENT + 50.0;

// --- Waves ---

/// Duration of one wave in seconds of simulated time.
pub const WAVE_DURATION_SECS: f64 = 30.0;

/// Hard cap on live enemies. Spawn events are suppressed (but the spawn
/// timer still resets) once the population reaches this bound.
pub const MAX_LIVE_ENEMIES: usize = 25;

/// Spawn interval curve: `max(MIN, BASE - wave * STEP)` seconds.
pub const SPAWN_INTERVAL_BASE: f64 = 2.0;
pub const SPAWN_INTERVAL_STEP: f64 = 0.05;
pub const SPAWN_INTERVAL_MIN: f64 = 0.2;

/// Enemy hp/damage difficulty multiplier: `1 + wave * DIFFICULTY_STEP`.
pub const DIFFICULTY_STEP: f64 = 0.2;

/// Enemy speed scale per wave: `1 + wave * SPEED_SCALE_STEP`.
pub const SPEED_SCALE_STEP: f64 = 0.05;

/// Wave number at which tank spawns unlock.
pub const TANK_UNLOCK_WAVE: u32 = 8;

/// Wave number at which speedster spawns unlock.
pub const SPEEDSTER_UNLOCK_WAVE: u32 = 5;

/// Every Nth wave opens with a boss and pays a premium-currency bonus.
pub const MILESTONE_WAVE_INTERVAL: u32 = 10;

// --- Enemies ---

/// Base hit points before difficulty and kind multipliers.
pub const ENEMY_BASE_HP: f64 = 20.0;

/// Base melee damage before difficulty and kind multipliers.
pub const ENEMY_BASE_DAMAGE: f64 = 2.0;

/// Per-spawn speed roll bounds (units/s) before wave and kind scaling.
pub const ENEMY_SPEED_MIN: f64 = 30.0;
pub const ENEMY_SPEED_MAX: f64 = 60.0;

/// Distance from the center at which an enemy stops and strikes.
pub const CONTACT_RADIUS: f64 = 30.0;

/// Extra contact reach for boss enemies.
pub const BOSS_CONTACT_BONUS: f64 = 20.0;

// --- Combat ---

/// Projectile travel speed (units/s).
pub const PROJECTILE_SPEED: f64 = 720.0;

/// Stun applied by the shockwave (seconds).
pub const STUN_DURATION_SECS: f64 = 3.0;

// --- Shockwave ---

/// Ring radius at the moment of activation.
pub const SHOCKWAVE_SEED_RADIUS: f64 = 10.0;

/// Ring expansion rate (units/s).
pub const SHOCKWAVE_EXPANSION_RATE: f64 = 900.0;

/// Half-width of the band around the ring within which enemies are hit.
pub const SHOCKWAVE_BAND_HALF_WIDTH: f64 = 20.0;

/// The ring deactivates once its radius exceeds the arena's far extent.
pub const SHOCKWAVE_MAX_RADIUS: f64 = 800.0;

// --- Recovery ---

/// Regen and shield recharge apply on this simulated-time cadence,
/// slower than the main step.
pub const RECOVERY_CADENCE_SECS: f64 = 0.2;

/// Health regeneration always present, before upgrades (hp/s).
pub const BASE_REGEN_PER_SEC: f64 = 0.3;

/// Shield recharge rate as a fraction of max shield per second.
pub const SHIELD_RECHARGE_FRACTION: f64 = 0.05;

// --- Stat floors ---

/// Max health never derives below this.
pub const MIN_MAX_HEALTH: f64 = 10.0;

/// Ability cooldown never derives below this (seconds).
pub const MIN_EMP_COOLDOWN_SECS: f64 = 5.0;

/// The auto-weapon always fires at least this many simultaneous shots.
pub const BASE_PROJECTILE_COUNT: u32 = 3;

// --- Economy ---

/// Cash a fresh profile starts with.
pub const STARTING_CASH: f64 = 150.0;

/// Kill reward: `(KILL_CASH_BASE + wave * KILL_CASH_PER_WAVE) * kind mult`.
pub const KILL_CASH_BASE: f64 = 10.0;
pub const KILL_CASH_PER_WAVE: f64 = 5.0;

/// Kill score: `wave * KILL_SCORE_PER_WAVE * kind mult`.
pub const KILL_SCORE_PER_WAVE: f64 = 10.0;

/// Wave completion cash: `WAVE_CASH_BASE + wave * WAVE_CASH_PER_WAVE`.
pub const WAVE_CASH_BASE: f64 = 100.0;
pub const WAVE_CASH_PER_WAVE: f64 = 100.0;

/// Wave completion score: `wave * WAVE_SCORE_PER_WAVE`.
pub const WAVE_SCORE_PER_WAVE: f64 = 500.0;

/// Gems granted on every wave completion.
pub const WAVE_GEM_REWARD: u32 = 1;

/// Extra gems granted on milestone (every 10th) wave completions.
pub const MILESTONE_GEM_BONUS: u32 = 5;

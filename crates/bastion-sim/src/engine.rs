//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, all run state (stats,
//! economy, wave, shockwave), processes player commands at tick
//! boundaries, and sequences the systems. Completely headless, enabling
//! deterministic testing: all gameplay randomness flows through one
//! seeded generator.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bastion_core::commands::PlayerCommand;
use bastion_core::constants::MAX_FRAME_DT;
use bastion_core::enums::{GamePhase, GameSpeed, RejectReason};
use bastion_core::events::GameEvent;
use bastion_core::profile::PlayerProfile;
use bastion_core::state::GameStateSnapshot;
use bastion_core::stats::{derive_stats, PlayerStats};
use bastion_core::types::SimTime;
use bastion_core::upgrades::{initial_upgrades, Upgrade};

use crate::economy::{self, EconomyState};
use crate::systems;
use crate::systems::shockwave::ShockwaveState;
use crate::systems::wave_spawner::WaveState;

/// Configuration for creating a new engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same run.
    pub seed: u64,
    /// Initial speed setting.
    pub speed: GameSpeed,
    /// Upgrade list and economy snapshot from the persistence layer.
    pub profile: PlayerProfile,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            speed: GameSpeed::Normal,
            profile: PlayerProfile::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all run state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    speed: GameSpeed,
    rng: ChaCha8Rng,
    next_unit_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,

    upgrades: Vec<Upgrade>,
    stats: PlayerStats,
    economy: EconomyState,
    wave: WaveState,
    shockwave: ShockwaveState,

    /// Seconds until the shockwave ability is ready.
    emp_timer: f64,
    /// Simulated seconds since the auto-weapon last fired. Starts at
    /// infinity so the first eligible target is engaged immediately.
    shot_timer: f64,
    /// Simulated-time accumulator for the slow recovery cadence.
    recovery_accum: f64,
}

impl SimulationEngine {
    /// Create a new engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let profile = config.profile.sanitized();
        let stats = derive_stats(&profile.upgrades, None);
        let economy = EconomyState::from_profile(&profile);
        let wave = WaveState::new(profile.wave);

        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            speed: config.speed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_unit_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            upgrades: profile.upgrades,
            stats,
            economy,
            wave,
            shockwave: ShockwaveState::default(),
            emp_timer: 0.0,
            shot_timer: f64::INFINITY,
            recovery_accum: 0.0,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one host frame and return the snapshot.
    ///
    /// `frame_dt` is the host's measured frame time in seconds; it is
    /// clamped to avoid catch-up jumps after a stall, then scaled by the
    /// selected speed before reaching any system. While paused or on the
    /// menu/game-over screens, commands are still processed but nothing
    /// advances.
    pub fn advance(&mut self, frame_dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let dt = frame_dt.clamp(0.0, MAX_FRAME_DT) * self.speed.factor();
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.speed,
            &self.stats,
            &self.wave,
            &self.economy,
            self.emp_timer,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn speed(&self) -> GameSpeed {
        self.speed
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn economy(&self) -> &EconomyState {
        &self.economy
    }

    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    /// Export the persistent progression for the host to store.
    pub fn profile(&self) -> PlayerProfile {
        PlayerProfile {
            upgrades: self.upgrades.clone(),
            cash: self.economy.cash,
            gems: self.economy.gems,
            score: self.economy.score,
            wave: self.wave.wave,
        }
    }

    /// Spawn an enemy at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(
        &mut self,
        position: bastion_core::types::Position,
        kind: bastion_core::enums::EnemyKind,
        hp: f64,
        speed: f64,
        damage: f64,
    ) -> hecs::Entity {
        crate::world_setup::spawn_enemy_at(
            &mut self.world,
            position,
            kind,
            hp,
            speed,
            damage,
            &mut self.next_unit_id,
        )
    }

    /// Overwrite the cash balance (for tests).
    #[cfg(test)]
    pub fn set_cash(&mut self, cash: f64) {
        self.economy.cash = cash;
    }

    /// Get a read-only reference to the shockwave state (for tests).
    #[cfg(test)]
    pub fn shockwave(&self) -> &ShockwaveState {
        &self.shockwave
    }

    /// Remaining ability cooldown in seconds (for tests).
    #[cfg(test)]
    pub fn ability_cooldown(&self) -> f64 {
        self.emp_timer
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if self.phase == GamePhase::MainMenu {
                    self.start_run();
                } else {
                    self.reject(RejectReason::NotRunning);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetSpeed { speed } => {
                self.speed = speed;
            }
            PlayerCommand::TriggerAbility => {
                if self.phase != GamePhase::Active {
                    self.reject(RejectReason::NotRunning);
                } else if self.emp_timer > 0.0 {
                    self.reject(RejectReason::AbilityNotReady);
                } else {
                    self.shockwave.trigger();
                    self.emp_timer = self.stats.emp_cooldown;
                    self.events.push(GameEvent::AbilityFired);
                }
            }
            PlayerCommand::Purchase { upgrade } => {
                if self.phase == GamePhase::GameOver {
                    self.reject(RejectReason::NotRunning);
                } else {
                    economy::purchase(
                        &mut self.upgrades,
                        &mut self.economy,
                        &mut self.stats,
                        upgrade,
                        &mut self.events,
                    );
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.phase != GamePhase::MainMenu {
                    self.stop_run();
                    self.phase = GamePhase::MainMenu;
                }
            }
            PlayerCommand::ResetRun => {
                self.stop_run();
                self.upgrades = initial_upgrades();
                self.stats = derive_stats(&self.upgrades, None);
                self.economy.cash = bastion_core::constants::STARTING_CASH;
                self.economy.score = 0.0;
                // Gems are the premium currency and survive a reset.
                self.wave = WaveState::new(1);
                self.phase = GamePhase::MainMenu;
            }
        }
    }

    /// Begin a run at the current progression wave with full bars.
    fn start_run(&mut self) {
        self.clear_entities();
        self.wave.reset_timers();
        self.stats = derive_stats(&self.upgrades, None);
        self.emp_timer = 0.0;
        self.shot_timer = f64::INFINITY;
        self.recovery_accum = 0.0;
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
    }

    /// Stop a run: live entities go away, economy and upgrades stay.
    fn stop_run(&mut self) {
        self.clear_entities();
        self.wave.reset_timers();
        self.emp_timer = 0.0;
        self.shot_timer = f64::INFINITY;
        self.recovery_accum = 0.0;
    }

    fn clear_entities(&mut self) {
        self.world.clear();
        self.shockwave = ShockwaveState::default();
    }

    fn reject(&mut self, reason: RejectReason) {
        self.events.push(GameEvent::CommandRejected { reason });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Ability cooldown decay
        self.emp_timer = (self.emp_timer - dt).max(0.0);
        // 2. Regen and shield recharge (slow cadence)
        systems::recovery::run(&mut self.stats, &mut self.recovery_accum, dt);
        // 3-4. Wave timer, completion rewards, spawn cadence
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.wave,
            &mut self.economy,
            &mut self.events,
            &mut self.next_unit_id,
            dt,
        );
        // 5. Enemy approach and contact strikes
        systems::movement::run(
            &mut self.world,
            &mut self.rng,
            &mut self.stats,
            &mut self.events,
            dt,
        );
        if self.stats.health <= 0.0 {
            self.game_over();
            return;
        }
        // 6. Auto-weapon fire and target acquisition
        systems::auto_fire::run(
            &mut self.world,
            &mut self.rng,
            &self.stats,
            &mut self.shot_timer,
            &mut self.next_unit_id,
            dt,
        );
        // 7. Projectile advance and impact
        systems::projectile::run(
            &mut self.world,
            &self.stats,
            &mut self.economy,
            self.wave.wave,
            &mut self.events,
            dt,
        );
        // 8. Shockwave expansion and hits
        systems::shockwave::run(
            &mut self.world,
            &mut self.shockwave,
            &self.stats,
            &mut self.economy,
            self.wave.wave,
            &mut self.events,
            dt,
        );
        // 9. Dead-entity compaction
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// The terminal state of a run: a normal outcome, not an error.
    fn game_over(&mut self) {
        self.events.push(GameEvent::GameOver {
            wave: self.wave.wave,
            score: self.economy.score,
        });
        self.clear_entities();
        self.phase = GamePhase::GameOver;
    }
}

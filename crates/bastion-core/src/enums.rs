//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy variant. Each kind carries a fixed multiplier table applied on
/// top of the per-wave difficulty scaling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline attacker.
    #[default]
    Standard,
    /// Fast and fragile; pays an increased reward.
    Speedster,
    /// Slow, heavily armored bruiser.
    Tank,
    /// Persistent threat: larger contact reach, never self-destructs
    /// on a melee hit.
    Boss,
}

impl EnemyKind {
    /// Hit point multiplier.
    pub fn hp_mult(self) -> f64 {
        match self {
            EnemyKind::Standard => 1.0,
            EnemyKind::Speedster => 0.5,
            EnemyKind::Tank => 4.0,
            EnemyKind::Boss => 20.0,
        }
    }

    /// Movement speed multiplier.
    pub fn speed_mult(self) -> f64 {
        match self {
            EnemyKind::Standard => 1.0,
            EnemyKind::Speedster => 1.8,
            EnemyKind::Tank => 0.6,
            EnemyKind::Boss => 0.4,
        }
    }

    /// Melee damage multiplier.
    pub fn damage_mult(self) -> f64 {
        match self {
            EnemyKind::Standard | EnemyKind::Speedster => 1.0,
            EnemyKind::Tank => 2.0,
            EnemyKind::Boss => 4.0,
        }
    }

    /// Body radius (units).
    pub fn radius(self) -> f64 {
        match self {
            EnemyKind::Standard => 12.0,
            EnemyKind::Speedster => 9.0,
            EnemyKind::Tank => 18.0,
            EnemyKind::Boss => 28.0,
        }
    }

    /// Cash/score reward multiplier on a weapon kill.
    pub fn reward_mult(self) -> f64 {
        match self {
            EnemyKind::Standard => 1.0,
            EnemyKind::Speedster => 1.5,
            EnemyKind::Tank => 3.0,
            EnemyKind::Boss => 10.0,
        }
    }

    /// Extra reach added to the contact radius.
    pub fn contact_bonus(self) -> f64 {
        match self {
            EnemyKind::Boss => crate::constants::BOSS_CONTACT_BONUS,
            _ => 0.0,
        }
    }
}

/// Upgrade category, for grouping in the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeCategory {
    Attack,
    Defense,
    Utility,
}

/// Simulation speed setting selectable by the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameSpeed {
    #[default]
    Normal,
    Faster,
    Double,
}

impl GameSpeed {
    /// Multiplier applied to delta time before it reaches the systems.
    pub fn factor(self) -> f64 {
        match self {
            GameSpeed::Normal => 1.0,
            GameSpeed::Faster => 1.5,
            GameSpeed::Double => 2.0,
        }
    }
}

/// Top-level engine phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Terminal state of a run. A normal outcome, not an error; the host
    /// may keep polling until ReturnToMenu or ResetRun.
    GameOver,
}

/// Why a player command was rejected. Rejections never abort the
/// simulation; they surface as feedback events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Purchase cost exceeds available cash.
    InsufficientCash,
    /// The purchase would not change any derived stat (capped/maxed).
    NoEffect,
    /// The ability is still on cooldown.
    AbilityNotReady,
    /// The command requires an active, unpaused run.
    NotRunning,
}

//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Invalid
//! commands never abort the engine — they no-op and emit a feedback event.

use serde::{Deserialize, Serialize};

use crate::enums::GameSpeed;
use crate::upgrades::UpgradeId;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Buy the next level of an upgrade axis.
    Purchase { upgrade: UpgradeId },
    /// Fire the shockwave ability.
    TriggerAbility,
    /// Select the simulation speed multiplier.
    SetSpeed { speed: GameSpeed },
    /// Pause the simulation (timers freeze, state is kept).
    Pause,
    /// Resume from pause.
    Resume,
    /// Start a wave run from the menu.
    StartRun,
    /// Stop the run and return to the menu. Live entities are cleared;
    /// economy and upgrades are preserved.
    ReturnToMenu,
    /// Reset the run progression: upgrades, cash, score and wave return
    /// to their initial values. Gems (premium currency) are kept.
    ResetRun,
}

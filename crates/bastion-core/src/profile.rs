//! Seed profile consumed from the persistence layer.
//!
//! The simulation never reads or writes storage itself; the host hands it
//! a `PlayerProfile` when creating an engine. Malformed or missing fields
//! fall back to documented defaults field-by-field — a broken save never
//! aborts initialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::STARTING_CASH;
use crate::upgrades::{initial_upgrades, Upgrade};

/// Upgrade list and economy snapshot used to seed a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub upgrades: Vec<Upgrade>,
    pub cash: f64,
    pub gems: u32,
    pub score: f64,
    pub wave: u32,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            upgrades: initial_upgrades(),
            cash: STARTING_CASH,
            gems: 0,
            score: 0.0,
            wave: 1,
        }
    }
}

impl PlayerProfile {
    /// Build a profile from an untrusted JSON record. Each field is read
    /// independently; whatever fails to parse falls back to its default.
    pub fn from_json(value: &Value) -> Self {
        let defaults = Self::default();

        let upgrades = value
            .get("upgrades")
            .and_then(|v| serde_json::from_value::<Vec<Upgrade>>(v.clone()).ok())
            .map(sanitize_upgrades)
            .unwrap_or(defaults.upgrades);

        Self {
            upgrades,
            cash: read_f64(value, "cash").unwrap_or(defaults.cash).max(0.0),
            gems: read_u64(value, "gems")
                .unwrap_or(defaults.gems as u64)
                .min(u32::MAX as u64) as u32,
            score: read_f64(value, "score").unwrap_or(defaults.score).max(0.0),
            wave: read_u64(value, "wave")
                .unwrap_or(defaults.wave as u64)
                .clamp(1, u32::MAX as u64) as u32,
        }
    }

    /// Re-apply the sanitizer to an already-typed profile (e.g. one built
    /// by hand in host code).
    pub fn sanitized(mut self) -> Self {
        self.upgrades = sanitize_upgrades(self.upgrades);
        self.cash = self.cash.max(0.0);
        self.score = self.score.max(0.0);
        self.wave = self.wave.max(1);
        self
    }
}

fn read_f64(value: &Value, key: &str) -> Option<f64> {
    value.get(key).and_then(Value::as_f64).filter(|v| v.is_finite())
}

fn read_u64(value: &Value, key: &str) -> Option<u64> {
    value.get(key).and_then(Value::as_u64)
}

/// Rebuild the canonical upgrade table, keeping only the levels from the
/// loaded list. Duplicate entries keep the first occurrence; axes missing
/// from the save are back-filled at their initial level. Curve parameters
/// always come from the canonical table, so a tampered or stale record
/// cannot smuggle in altered costs or values.
fn sanitize_upgrades(loaded: Vec<Upgrade>) -> Vec<Upgrade> {
    let mut table = initial_upgrades();
    for slot in &mut table {
        if let Some(saved) = loaded.iter().find(|u| u.id == slot.id) {
            slot.level = saved.level;
        }
    }
    table
}

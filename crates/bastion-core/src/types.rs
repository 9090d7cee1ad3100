//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in arena space (abstract units).
/// The arena is centered on the origin; the player sits at (0, 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.distance_sq_to(other).sqrt()
    }

    /// Squared distance to another position (no square root).
    pub fn distance_sq_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Distance from the arena center.
    pub fn distance_from_center(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Step toward a target by `step` units. If the remaining distance is
    /// zero the position is left unchanged (guards the normalization).
    pub fn step_toward(&mut self, target: &Position, step: f64) {
        let dx = target.x - self.x;
        let dy = target.y - self.y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist > 0.0 {
            self.x += dx / dist * step;
            self.y += dy / dist * step;
        }
    }
}

/// Simulation time tracking.
///
/// Ticks advance with a variable (clamped, speed-scaled) delta, so
/// `elapsed_secs` is simulated time, not tick count times a constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed simulation steps.
    pub tick: u64,
    /// Elapsed simulated time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one step of `dt` simulated seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

//! Simulation engine for BASTION.
//!
//! Owns the hecs ECS world, advances all systems in a fixed per-tick
//! order with a clamped, speed-scaled delta time, and produces
//! GameStateSnapshots for the host.

pub mod economy;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use bastion_core as core;
pub use engine::SimulationEngine;

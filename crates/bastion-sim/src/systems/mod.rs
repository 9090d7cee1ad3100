//! Systems that operate on the simulation state each tick.
//!
//! Systems are free functions over `&mut World` plus whatever engine
//! state they need. They run in the fixed order defined by the engine;
//! none of them despawns an entity — death and impact only mark, and
//! `cleanup` compacts at the end of the tick.

pub mod auto_fire;
pub mod cleanup;
pub mod movement;
pub mod projectile;
pub mod recovery;
pub mod shockwave;
pub mod snapshot;
pub mod wave_spawner;

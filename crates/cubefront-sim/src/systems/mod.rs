//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only)
//! plus whatever engine state they touch. Per-entity state lives in components;
//! the player rig and round state live on the engine.

pub mod animation;
pub mod cleanup;
pub mod enemy;
pub mod hud;
pub mod player;
pub mod projectile;
pub mod round;
pub mod snapshot;
pub mod spawner;
pub mod timed;
pub mod voxels;
pub mod weapon;

//! Simulation engine for CUBEFRONT.
//!
//! Owns the hecs ECS world, runs systems once per host frame,
//! and produces GameStateSnapshots for the host.

pub mod collision;
pub mod engine;
pub mod input;
pub mod rig;
pub mod systems;
pub mod timers;
pub mod world_setup;

pub use cubefront_core as core;
pub use engine::{SimConfig, SimulationEngine};

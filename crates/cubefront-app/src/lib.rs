//! CUBEFRONT headless runner.
//!
//! This crate wires the simulation engine to a fixed-rate game loop thread,
//! an autopilot input driver and the command-line entry point.

pub mod autopilot;
pub mod game_loop;
pub mod logging;
pub mod session;
pub mod state;

pub use cubefront_core as core;

//! Enemy AI for CUBEFRONT.
//!
//! Implements the enemy lifecycle state machine and the pursuit/separation
//! steering math. Everything here operates on plain data; the simulation
//! crate applies the results to the ECS world.

pub mod fsm;
pub mod steering;

pub use cubefront_core as core;

#[cfg(test)]
mod tests;

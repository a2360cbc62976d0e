//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Role tag carried by every entity in the world.
///
/// Systems filter the shared world by role instead of inspecting types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Enemy,
    Projectile,
    Voxel,
}

/// Enemy lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyPhase {
    /// Chasing the player.
    #[default]
    Pursuing,
    /// Hit; tipping over, then flashing.
    Falling,
    /// Flash sequence finished. Removed at the next cleanup.
    Destroyed,
}

/// Weapon aim state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AimState {
    #[default]
    Idle,
    Aiming,
}

/// Round state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No enemies alive and the countdown is running (or about to start).
    #[default]
    Countdown,
    /// At least one enemy is alive.
    Active,
}

/// Display tint for enemies and the frame-rate indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    #[default]
    White,
    Red,
    Green,
    Yellow,
}

/// What a hitscan ray struck first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitKind {
    Enemy,
    Voxel,
    Ground,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
}

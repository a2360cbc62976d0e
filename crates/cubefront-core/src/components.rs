//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Tween;

/// World placement. Angles are in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Rotation about the vertical axis (0 = facing +z, clockwise from above).
    pub yaw: f32,
    /// Rotation about the forward axis; the tip-over drives this to 90.
    pub roll: f32,
}

/// Box collider centered on the entity position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub half_extents: Vec3,
}

/// Per-enemy behavior state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyInfo {
    /// Stable id used in snapshots and events.
    pub id: u32,
    pub phase: EnemyPhase,
    /// Pursuit speed (units/s).
    pub speed: f32,
    /// Simulation time of the hit that started the fall.
    pub hit_at_secs: Option<f64>,
}

/// Current display tint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Appearance {
    pub tint: Tint,
}

/// Tip-over animation attached while an enemy falls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FallAnimation {
    pub roll: Tween,
    pub height: Tween,
}

/// Ballistic projectile state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Stable id used in snapshots and events.
    pub id: u32,
    /// Unit travel direction.
    pub direction: Vec3,
    pub speed: f32,
    /// Height lost per second.
    pub gravity: f32,
    pub elapsed_secs: f64,
    pub lifetime_secs: f64,
}

/// A floor block. Hidden blocks are culled from display but still collide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Voxel {
    pub visible: bool,
}

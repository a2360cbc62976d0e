//! Game state snapshot: the complete visible state handed to the host each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub weapon: WeaponView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub round: RoundView,
    pub hud: HudView,
    pub score: ScoreView,
    pub events: Vec<GameEvent>,
}

/// Player rig as seen by the camera.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Current movement speed (walk or sprint).
    pub speed: f32,
    /// Live camera field of view (degrees).
    pub fov: f32,
    /// Field of view the camera returns to when not aiming.
    pub rest_fov: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub aim: AimState,
    /// True while a shot's cooldown window is open.
    pub cooling_down: bool,
    /// Weapon position relative to the camera.
    pub position: Vec3,
    /// Euler rotation (pitch, yaw, roll in degrees), recoil excluded.
    pub rotation: Vec3,
    pub recoil_pitch: f32,
    pub cursor_alpha: f32,
    pub alt_fire_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub enemy_id: u32,
    pub position: Vec3,
    pub yaw: f32,
    pub roll: f32,
    pub phase: EnemyPhase,
    pub tint: Tint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub projectile_id: u32,
    pub position: Vec3,
    pub elapsed_secs: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundView {
    pub phase: RoundPhase,
    /// Waves spawned so far.
    pub wave: u32,
    pub enemies_alive: u32,
    /// Remaining countdown; `None` while a round is active.
    pub countdown_secs: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub countdown_visible: bool,
    pub countdown_label: String,
    pub fps: u32,
    pub fps_color: Tint,
    /// Floor blocks currently within render distance.
    pub visible_voxels: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub shots_fired: u32,
    pub projectiles_fired: u32,
    pub enemies_hit: u32,
    pub enemies_destroyed: u32,
    pub waves_spawned: u32,
}

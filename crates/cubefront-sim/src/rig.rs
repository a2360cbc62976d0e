//! Player rig data model: the player, their camera and the weapon.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities: there is exactly one
//! of each and nothing in the world iterates over them.

use glam::{EulerRot, Quat, Vec3};

use cubefront_core::constants::*;
use cubefront_core::enums::AimState;
use cubefront_core::types::Tween;

/// The first-person player. Angles are in degrees.
#[derive(Debug, Clone)]
pub struct Player {
    /// Feet position.
    pub position: Vec3,
    /// Look yaw (0 = +z, positive turns toward +x).
    pub yaw: f32,
    /// Look pitch (positive looks down).
    pub pitch: f32,
    /// Current movement speed.
    pub speed: f32,
    /// Live camera field of view.
    pub fov: f32,
    /// Field of view selected with the FOV keys.
    pub rest_fov: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            speed: PLAYER_WALK_SPEED,
            fov: REST_FOV,
            rest_fov: REST_FOV,
        }
    }
}

impl Player {
    /// Camera position.
    pub fn eye(&self) -> Vec3 {
        self.position + Vec3::Y * PLAYER_EYE_HEIGHT
    }

    /// Camera orientation (yaw, then pitch).
    pub fn camera_rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            0.0,
        )
    }

    /// Unit vector the camera looks along.
    pub fn forward(&self) -> Vec3 {
        self.camera_rotation() * Vec3::Z
    }

    /// Horizontal forward and right unit vectors for walking.
    pub fn ground_basis(&self) -> (Vec3, Vec3) {
        let (sin, cos) = self.yaw.to_radians().sin_cos();
        (Vec3::new(sin, 0.0, cos), Vec3::new(cos, 0.0, -sin))
    }
}

/// The hitscan weapon held in front of the camera.
#[derive(Debug, Clone)]
pub struct Weapon {
    pub aim: AimState,
    /// Time of the shot whose cooldown window is still open.
    pub last_shot_secs: Option<f64>,
    pub cooldown_secs: f64,
    /// Position relative to the camera.
    pub position: Vec3,
    pub rest_position: Vec3,
    pub aim_position: Vec3,
    /// Euler rotation (pitch, yaw, roll in degrees). Follows the camera
    /// while aiming and holds its last value otherwise.
    pub rotation: Vec3,
    /// Recoil pitch (degrees) and the tween currently driving it.
    pub recoil_pitch: f32,
    pub recoil: Option<Tween>,
    /// Crosshair opacity; fades out while aiming.
    pub cursor_alpha: f32,
}

impl Weapon {
    pub fn new(cooldown_secs: f64) -> Self {
        let rest_position = Vec3::from(WEAPON_REST_POSITION);
        let aim = Vec3::from(WEAPON_AIM_POSITION);
        Self {
            aim: AimState::Idle,
            last_shot_secs: None,
            cooldown_secs,
            position: rest_position,
            rest_position,
            // The aim pose is centered on the screen.
            aim_position: Vec3::new(0.0, aim.y, aim.z),
            rotation: Vec3::ZERO,
            recoil_pitch: 0.0,
            recoil: None,
            cursor_alpha: 1.0,
        }
    }

    pub fn is_cooling_down(&self) -> bool {
        self.last_shot_secs.is_some()
    }

    /// Close the cooldown window once it has fully elapsed.
    pub fn update_cooldown(&mut self, now: f64) {
        if let Some(last) = self.last_shot_secs {
            if now - last >= self.cooldown_secs {
                self.last_shot_secs = None;
            }
        }
    }

    /// Attempt to fire at `now`. Returns false while a cooldown window is open.
    pub fn try_fire(&mut self, now: f64) -> bool {
        self.update_cooldown(now);
        if self.last_shot_secs.is_some() {
            return false;
        }
        self.last_shot_secs = Some(now);
        true
    }

    /// Euler rotation the weapon turns toward while aiming.
    pub fn aim_rotation(player: &Player) -> Vec3 {
        Vec3::new(player.pitch, player.yaw, 0.0)
    }

    /// World-space muzzle position for a camera held by `player`.
    pub fn muzzle(&self, player: &Player) -> Vec3 {
        player.eye() + player.camera_rotation() * self.position + Vec3::Y * MUZZLE_RISE
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::new(WEAPON_COOLDOWN_SECS)
    }
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub shots_fired: u32,
    pub projectiles_fired: u32,
    pub enemies_hit: u32,
    pub enemies_destroyed: u32,
    pub waves_spawned: u32,
}

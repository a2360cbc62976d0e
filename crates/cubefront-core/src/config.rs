//! Tunable game configuration.
//!
//! Every field defaults to the matching value in [`crate::constants`], so a
//! config file only needs to list the values it overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_walk_speed: f32,
    pub player_sprint_speed: f32,
    pub weapon_cooldown_secs: f64,
    pub weapon_ray_distance: f32,
    pub enemy_speed: f32,
    pub enemy_turn_rate: f32,
    pub fall_duration_secs: f64,
    pub flash_step_secs: f64,
    pub bullet_speed: f32,
    pub bullet_gravity: f32,
    pub bullet_lifetime_secs: f64,
    pub wave_size: u32,
    /// Half extents of the spawn rectangle on x and z.
    pub spawn_area: (i32, i32),
    pub min_spawn_distance: f32,
    pub max_spawn_attempts: u32,
    pub round_countdown_secs: f64,
    /// Enables the ballistic alternate fire.
    pub alt_fire_enabled: bool,
    /// Builds the 15x15 block floor at game start.
    pub voxel_floor: bool,
    /// Spawns a wave immediately at game start instead of counting down.
    pub spawn_initial_wave: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_walk_speed: PLAYER_WALK_SPEED,
            player_sprint_speed: PLAYER_SPRINT_SPEED,
            weapon_cooldown_secs: WEAPON_COOLDOWN_SECS,
            weapon_ray_distance: WEAPON_RAY_DISTANCE,
            enemy_speed: ENEMY_SPEED,
            enemy_turn_rate: ENEMY_TURN_RATE,
            fall_duration_secs: FALL_DURATION_SECS,
            flash_step_secs: FLASH_STEP_SECS,
            bullet_speed: BULLET_SPEED,
            bullet_gravity: BULLET_GRAVITY,
            bullet_lifetime_secs: BULLET_LIFETIME_SECS,
            wave_size: WAVE_SIZE,
            spawn_area: SPAWN_AREA,
            min_spawn_distance: MIN_SPAWN_DISTANCE,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
            round_countdown_secs: ROUND_COUNTDOWN_SECS,
            alt_fire_enabled: false,
            voxel_floor: false,
            spawn_initial_wave: false,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject values the loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("player_walk_speed", self.player_walk_speed as f64)?;
        positive("player_sprint_speed", self.player_sprint_speed as f64)?;
        positive("weapon_cooldown_secs", self.weapon_cooldown_secs)?;
        positive("weapon_ray_distance", self.weapon_ray_distance as f64)?;
        positive("enemy_speed", self.enemy_speed as f64)?;
        positive("enemy_turn_rate", self.enemy_turn_rate as f64)?;
        positive("fall_duration_secs", self.fall_duration_secs)?;
        positive("flash_step_secs", self.flash_step_secs)?;
        positive("bullet_speed", self.bullet_speed as f64)?;
        positive("bullet_lifetime_secs", self.bullet_lifetime_secs)?;
        positive("round_countdown_secs", self.round_countdown_secs)?;

        if self.bullet_gravity < 0.0 || !self.bullet_gravity.is_finite() {
            return Err(invalid("bullet_gravity", "must be zero or positive"));
        }
        if self.min_spawn_distance < 0.0 || !self.min_spawn_distance.is_finite() {
            return Err(invalid("min_spawn_distance", "must be zero or positive"));
        }
        if self.wave_size == 0 {
            return Err(invalid("wave_size", "must spawn at least one enemy"));
        }
        if self.spawn_area.0 < 0 || self.spawn_area.1 < 0 {
            return Err(invalid("spawn_area", "half extents must not be negative"));
        }
        if self.max_spawn_attempts == 0 {
            return Err(invalid("max_spawn_attempts", "must allow at least one sample"));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be a positive number"))
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

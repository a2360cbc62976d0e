//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind [`crate::config::GameConfig`]; systems read
//! tuning through the config so a host can override any of them.

/// Nominal host tick rate (Hz) used by the headless runner.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Player ---

/// Walking speed (units/s).
pub const PLAYER_WALK_SPEED: f32 = 5.0;

/// Sprinting speed (units/s).
pub const PLAYER_SPRINT_SPEED: f32 = 10.0;

/// Camera height above the player's feet.
pub const PLAYER_EYE_HEIGHT: f32 = 2.0;

/// Degrees of look rotation per unit of look input.
pub const LOOK_SENSITIVITY: f32 = 1.0;

/// Pitch is clamped to +/- this many degrees.
pub const MAX_PITCH_DEG: f32 = 90.0;

// --- Camera ---

/// Lowest rest field of view reachable with the FOV keys (degrees).
pub const MIN_FOV: f32 = 60.0;

/// Highest rest field of view reachable with the FOV keys (degrees).
pub const MAX_FOV: f32 = 120.0;

/// Rest field of view at startup (degrees).
pub const REST_FOV: f32 = 90.0;

/// Field of view while aiming (degrees).
pub const AIM_FOV: f32 = 65.0;

/// FOV change per key press (degrees).
pub const FOV_STEP: f32 = 10.0;

// --- Weapon ---

/// Minimum time between two shots (seconds).
pub const WEAPON_COOLDOWN_SECS: f64 = 0.09;

/// Hitscan range (units).
pub const WEAPON_RAY_DISTANCE: f32 = 100.0;

/// Weapon position relative to the camera at rest.
pub const WEAPON_REST_POSITION: [f32; 3] = [0.1, -0.2, 0.65];

/// Weapon position relative to the camera while aiming.
pub const WEAPON_AIM_POSITION: [f32; 3] = [0.0, -0.16, 0.75];

/// Vertical offset from the weapon origin to the muzzle.
pub const MUZZLE_RISE: f32 = 0.1;

/// Interpolation rate toward the aim pose (per second).
pub const AIM_SPEED: f32 = 9.0;

/// Interpolation rate back to the rest pose, cursor and FOV (per second).
pub const AIM_RETURN_SPEED: f32 = 9.0;

/// Recoil kick pitch (degrees).
pub const RECOIL_PITCH_DEG: f32 = -3.5;

/// Time to reach full recoil kick (seconds).
pub const RECOIL_KICK_SECS: f64 = 0.01;

/// Delay before the weapon returns to idle after a shot (seconds).
pub const RECOIL_IDLE_DELAY_SECS: f64 = 0.075;

/// Time to return from recoil to idle (seconds).
pub const RECOIL_RETURN_SECS: f64 = 0.15;

// --- Enemy ---

/// Enemy pursuit speed (units/s).
pub const ENEMY_SPEED: f32 = 1.65;

/// Enemy yaw interpolation rate (per second).
pub const ENEMY_TURN_RATE: f32 = 5.0;

/// Enemy bounding box half extents (the box is 1 x 2 x 1).
pub const ENEMY_HALF_EXTENTS: [f32; 3] = [0.5, 1.0, 0.5];

/// Height at which enemies are spawned.
pub const ENEMY_SPAWN_HEIGHT: f32 = 1.0;

/// Maximum separation nudge per axis (units).
pub const SEPARATION_NUDGE: f32 = 1.0;

/// Duration of the tip-over animation (seconds).
pub const FALL_DURATION_SECS: f64 = 0.23;

/// Roll reached at the end of the tip-over (degrees).
pub const FALL_ROLL_DEG: f32 = 90.0;

/// Height reached at the end of the tip-over.
pub const FALL_REST_HEIGHT: f32 = 0.25;

/// Interval between flash color steps (seconds).
pub const FLASH_STEP_SECS: f64 = 0.1;

// --- Projectile ---

/// Bullet speed (units/s).
pub const BULLET_SPEED: f32 = 200.0;

/// Bullet height loss per second.
pub const BULLET_GRAVITY: f32 = 9.8;

/// Bullet time-to-live (seconds).
pub const BULLET_LIFETIME_SECS: f64 = 5.0;

/// Bullet collision radius (sphere of scale 0.05).
pub const BULLET_RADIUS: f32 = 0.025;

// --- Rounds ---

/// Enemies spawned per wave.
pub const WAVE_SIZE: u32 = 15;

/// Half extents of the spawn region on x and z.
pub const SPAWN_AREA: (i32, i32) = (25, 25);

/// Minimum distance between a spawn position and the player.
pub const MIN_SPAWN_DISTANCE: f32 = 25.0;

/// Samples per enemy before the farthest candidate is accepted.
pub const MAX_SPAWN_ATTEMPTS: u32 = 1000;

/// Countdown between rounds (seconds).
pub const ROUND_COUNTDOWN_SECS: f64 = 6.5;

// --- World ---

/// Half size of the ground plane (plane of scale 55 centered at the origin).
pub const GROUND_HALF_SIZE: f32 = 27.5;

/// Voxel floor blocks per side.
pub const VOXEL_FLOOR_SIZE: i32 = 15;

/// Blocks farther than this from the player are hidden.
pub const RENDER_DISTANCE: f32 = 15.0;

/// Voxel block half size (block model at scale 0.5).
pub const VOXEL_HALF_SIZE: f32 = 0.25;

// --- HUD ---

/// Above this frame rate the indicator turns green.
pub const FPS_GREEN_ABOVE: u32 = 120;

/// Frame rates in this range turn the indicator yellow.
pub const FPS_YELLOW_RANGE: std::ops::RangeInclusive<u32> = 60..=69;

/// Below this frame rate the indicator turns red.
pub const FPS_RED_BELOW: u32 = 30;

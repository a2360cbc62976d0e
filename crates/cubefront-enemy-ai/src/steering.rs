//! Pursuit and separation steering.
//!
//! Angles are in degrees, yaw 0 faces +z and grows toward +x.

use glam::Vec3;
use rand::Rng;

/// Input to one pursuit step.
#[derive(Debug, Clone, Copy)]
pub struct PursuitContext {
    pub position: Vec3,
    pub yaw: f32,
    pub target: Vec3,
    pub speed: f32,
    pub turn_rate: f32,
    pub dt: f32,
}

/// Output of one pursuit step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PursuitUpdate {
    pub position: Vec3,
    pub yaw: f32,
    /// False when the target was exactly overhead and the step was skipped.
    pub moved: bool,
}

/// Turn toward the target and walk along the ground plane.
///
/// Only the horizontal offset is used; enemies never climb. A zero-length
/// offset skips both rotation and movement for this tick.
pub fn pursue(ctx: &PursuitContext) -> PursuitUpdate {
    let offset = Vec3::new(
        ctx.target.x - ctx.position.x,
        0.0,
        ctx.target.z - ctx.position.z,
    );
    let distance = offset.length();
    if distance <= 0.0 || !distance.is_finite() {
        return PursuitUpdate {
            position: ctx.position,
            yaw: ctx.yaw,
            moved: false,
        };
    }

    let yaw = approach_angle(ctx.yaw, bearing_deg(offset), ctx.turn_rate * ctx.dt);
    let direction = offset / distance;
    PursuitUpdate {
        position: ctx.position + direction * ctx.speed * ctx.dt,
        yaw,
        moved: true,
    }
}

/// Yaw (degrees) that faces along `direction` on the ground plane.
pub fn bearing_deg(direction: Vec3) -> f32 {
    direction.x.atan2(direction.z).to_degrees()
}

/// Exponential approach from `current` toward `target` by fraction `t`,
/// taking the shorter way around the circle.
///
/// `t` is clamped to [0, 1] so a long frame cannot overshoot.
pub fn approach_angle(current: f32, target: f32, t: f32) -> f32 {
    let delta = (target - current + 180.0).rem_euclid(360.0) - 180.0;
    current + delta * t.clamp(0.0, 1.0)
}

/// Exponential approach for scalars and vectors (`lerp` with rate * dt).
pub fn approach(current: f32, target: f32, t: f32) -> f32 {
    current + (target - current) * t.clamp(0.0, 1.0)
}

/// Random horizontal nudge applied when two enemies overlap.
///
/// Each axis is uniform in [-magnitude, magnitude]; y is untouched.
pub fn separation_nudge(rng: &mut impl Rng, magnitude: f32) -> Vec3 {
    if magnitude <= 0.0 || !magnitude.is_finite() {
        return Vec3::ZERO;
    }
    Vec3::new(
        rng.gen_range(-magnitude..=magnitude),
        0.0,
        rng.gen_range(-magnitude..=magnitude),
    )
}

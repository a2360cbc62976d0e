//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
///
/// Unlike a fixed-rate clock, the host supplies each frame's delta, so
/// `elapsed_secs` is the sum of every delta seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
    /// Delta of the most recent tick in seconds.
    pub dt: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds. Negative deltas count as zero.
    pub fn advance(&mut self, dt: f64) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.tick += 1;
        self.dt = dt;
        self.elapsed_secs += dt;
    }
}

/// Held input state polled by the simulation once per tick.
///
/// All buttons are "held" flags; press edges are derived by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    /// Forward/backward axis in [-1, 1].
    pub move_forward: f32,
    /// Strafe axis in [-1, 1] (positive = right).
    pub move_right: f32,
    /// Yaw look delta for this frame (degrees before sensitivity).
    pub look_yaw: f32,
    /// Pitch look delta for this frame (positive looks down).
    pub look_pitch: f32,
    pub sprint: bool,
    pub aim: bool,
    pub fire: bool,
    pub alt_fire: bool,
    pub fov_up: bool,
    pub fov_down: bool,
}

/// Axis-aligned bounding box described by its center and half extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    /// Overlap test. Boxes that only touch do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let d = (self.center - other.center).abs();
        let r = self.half_extents + other.half_extents;
        d.x < r.x && d.y < r.y && d.z < r.z
    }

    /// Sphere overlap test against this box.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        let closest = center.clamp(self.min(), self.max());
        closest.distance_squared(center) <= radius * radius
    }
}

/// Linear interpolation of one scalar over a fixed time window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_secs: f64,
    pub duration_secs: f64,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_secs: f64, duration_secs: f64) -> Self {
        Self {
            from,
            to,
            start_secs,
            duration_secs,
        }
    }

    /// Progress in [0, 1] at `now`.
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        ((now - self.start_secs) / self.duration_secs).clamp(0.0, 1.0) as f32
    }

    /// Value at `now` (linear curve).
    pub fn sample(&self, now: f64) -> f32 {
        self.from + (self.to - self.from) * self.progress(now)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

//! Spatial queries: ray casts against boxes and the ground plane.

use glam::Vec3;
use hecs::{Entity, World};

use cubefront_core::components::{Collider, Transform};
use cubefront_core::constants::GROUND_HALF_SIZE;
use cubefront_core::enums::Role;
use cubefront_core::types::Aabb;

/// What a ray struck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayTarget {
    Enemy(Entity),
    Voxel(Entity),
    Ground,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub point: Vec3,
    pub target: RayTarget,
}

/// World-space box of an entity with a collider.
pub fn entity_aabb(transform: &Transform, collider: &Collider) -> Aabb {
    Aabb::new(transform.position, collider.half_extents)
}

/// Slab test. Returns the entry distance along the normalized `dir`, or 0
/// when the origin is already inside the box.
pub fn ray_aabb(origin: Vec3, dir: Vec3, aabb: &Aabb) -> Option<f32> {
    let min = aabb.min();
    let max = aabb.max();
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < f32::EPSILON {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (min[axis] - o) * inv;
        let mut t1 = (max[axis] - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }
    Some(t_near.max(0.0))
}

/// Intersection with the bounded ground plane y = 0.
pub fn ray_ground(origin: Vec3, dir: Vec3) -> Option<f32> {
    if dir.y >= 0.0 || origin.y < 0.0 {
        return None;
    }
    let t = -origin.y / dir.y;
    let point = origin + dir * t;
    if point.x.abs() > GROUND_HALF_SIZE || point.z.abs() > GROUND_HALF_SIZE {
        return None;
    }
    Some(t)
}

/// Nearest hit along `dir` within `max_distance`.
///
/// Enemies and floor blocks are tested by their colliders; projectiles are
/// never hit by rays.
pub fn raycast(world: &World, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<RayHit> {
    let dir = dir.try_normalize()?;
    let mut best: Option<(f32, RayTarget)> = None;

    for (entity, (transform, collider, role)) in
        world.query::<(&Transform, &Collider, &Role)>().iter()
    {
        let target = match role {
            Role::Enemy => RayTarget::Enemy(entity),
            Role::Voxel => RayTarget::Voxel(entity),
            Role::Projectile => continue,
        };
        if let Some(t) = ray_aabb(origin, dir, &entity_aabb(transform, collider)) {
            if t <= max_distance && best.map_or(true, |(b, _)| t < b) {
                best = Some((t, target));
            }
        }
    }

    if let Some(t) = ray_ground(origin, dir) {
        if t <= max_distance && best.map_or(true, |(b, _)| t < b) {
            best = Some((t, RayTarget::Ground));
        }
    }

    best.map(|(distance, target)| RayHit {
        distance,
        point: origin + dir * distance,
        target,
    })
}

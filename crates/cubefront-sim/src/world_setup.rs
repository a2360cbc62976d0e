//! Entity spawn factories for setting up the simulation world.
//!
//! Creates enemies, projectiles and floor blocks with the component bundles
//! the systems expect. Every entity carries a `Role` tag.

use glam::Vec3;
use hecs::{Entity, World};

use cubefront_core::components::*;
use cubefront_core::config::GameConfig;
use cubefront_core::constants::*;
use cubefront_core::enums::*;

/// Prepare a fresh world for a new game.
pub fn setup_game(world: &mut World, config: &GameConfig) {
    world.clear();
    if config.voxel_floor {
        build_voxel_floor(world);
    }
}

/// Spawn a pursuing enemy at `position`.
pub fn spawn_enemy(world: &mut World, id: u32, position: Vec3, config: &GameConfig) -> Entity {
    world.spawn((
        Role::Enemy,
        Transform {
            position,
            yaw: 0.0,
            roll: 0.0,
        },
        Collider {
            half_extents: Vec3::from(ENEMY_HALF_EXTENTS),
        },
        EnemyInfo {
            id,
            phase: EnemyPhase::Pursuing,
            speed: config.enemy_speed,
            hit_at_secs: None,
        },
        Appearance { tint: Tint::Red },
    ))
}

/// Spawn a ballistic projectile at `origin` travelling along `direction`.
pub fn spawn_projectile(
    world: &mut World,
    id: u32,
    origin: Vec3,
    direction: Vec3,
    config: &GameConfig,
) -> Entity {
    world.spawn((
        Role::Projectile,
        Transform {
            position: origin,
            ..Transform::default()
        },
        Projectile {
            id,
            direction: direction.normalize_or_zero(),
            speed: config.bullet_speed,
            gravity: config.bullet_gravity,
            elapsed_secs: 0.0,
            lifetime_secs: config.bullet_lifetime_secs,
        },
    ))
}

/// Build the block floor: one layer of `VOXEL_FLOOR_SIZE`² blocks whose
/// top faces sit on y = 0, anchored at integer (x, 0, z).
pub fn build_voxel_floor(world: &mut World) -> usize {
    let half = Vec3::splat(VOXEL_HALF_SIZE);
    let blocks = (0..VOXEL_FLOOR_SIZE)
        .flat_map(|z| (0..VOXEL_FLOOR_SIZE).map(move |x| (x, z)))
        .map(|(x, z)| {
            (
                Role::Voxel,
                Transform {
                    position: Vec3::new(x as f32, -VOXEL_HALF_SIZE, z as f32),
                    ..Transform::default()
                },
                Collider { half_extents: half },
                Voxel { visible: true },
            )
        });
    world.spawn_batch(blocks).count()
}

//! Projectile system: ballistic flight, enemy contact and timeout.

use glam::Vec3;
use hecs::{Entity, World};
use log::debug;

use cubefront_core::components::{Collider, EnemyInfo, Projectile, Transform};
use cubefront_core::config::GameConfig;
use cubefront_core::constants::BULLET_RADIUS;
use cubefront_core::events::GameEvent;
use cubefront_core::types::Aabb;

use crate::collision::entity_aabb;
use crate::rig::{Player, ScoreState, Weapon};
use crate::systems::enemy;
use crate::timers::TimerQueue;
use crate::world_setup;

/// Launch a projectile from the muzzle along the camera forward vector.
pub fn launch(
    world: &mut World,
    weapon: &Weapon,
    player: &Player,
    id: u32,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
    config: &GameConfig,
) -> Entity {
    let entity = world_setup::spawn_projectile(
        world,
        id,
        weapon.muzzle(player),
        player.forward(),
        config,
    );
    score.projectiles_fired += 1;
    events.push(GameEvent::ProjectileLaunched { projectile_id: id });
    entity
}

/// Advance every projectile by `dt`.
///
/// A projectile touching an enemy resolves the hit and is removed at once.
/// Otherwise it is removed once its elapsed time exceeds its lifetime.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    timers: &mut TimerQueue,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
    despawn_buffer: &mut Vec<Entity>,
    config: &GameConfig,
    dt: f64,
    now: f64,
) {
    despawn_buffer.clear();
    let mut impacts: Vec<(Entity, u32, Entity, u32)> = Vec::new();

    let mut moved: Vec<(Entity, u32, Vec3, bool)> = Vec::new();
    for (entity, (transform, projectile)) in world.query_mut::<(&mut Transform, &mut Projectile)>()
    {
        let step = dt as f32;
        projectile.elapsed_secs += dt;
        transform.position += projectile.direction * projectile.speed * step;
        transform.position.y -= projectile.gravity * step;
        let expired = projectile.elapsed_secs > projectile.lifetime_secs;
        moved.push((entity, projectile.id, transform.position, expired));
    }

    {
        let mut query = world.query::<(&EnemyInfo, &Transform, &Collider)>();
        let enemies: Vec<(Entity, u32, Aabb)> = query
            .iter()
            .map(|(e, (info, transform, collider))| {
                (e, info.id, entity_aabb(transform, collider))
            })
            .collect();

        for &(entity, projectile_id, position, expired) in &moved {
            let struck = enemies
                .iter()
                .filter(|(_, _, aabb)| aabb.intersects_sphere(position, BULLET_RADIUS))
                .min_by_key(|(_, id, _)| *id);
            if let Some(&(enemy_entity, enemy_id, _)) = struck {
                impacts.push((entity, projectile_id, enemy_entity, enemy_id));
            } else if expired {
                despawn_buffer.push(entity);
                events.push(GameEvent::ProjectileExpired { projectile_id });
                debug!("projectile {projectile_id} expired");
            }
        }
    }

    for (entity, projectile_id, enemy_entity, enemy_id) in impacts {
        enemy::resolve_hit(world, enemy_entity, timers, events, score, config, now);
        events.push(GameEvent::ProjectileImpact {
            projectile_id,
            enemy_id,
        });
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

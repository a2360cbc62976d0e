//! Spawn scheduler: places waves of enemies away from the player.

use glam::Vec3;
use hecs::{Entity, World};
use log::{info, warn};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use cubefront_core::config::GameConfig;
use cubefront_core::constants::ENEMY_SPAWN_HEIGHT;

use crate::systems::enemy;
use crate::world_setup;

/// Outcome of one position search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnSample {
    pub position: Vec3,
    /// Samples drawn, including the accepted one.
    pub attempts: u32,
    /// True when no sample cleared the exclusion radius and the farthest
    /// candidate was used instead.
    pub fallback: bool,
}

/// Draw integer positions in `[-ax, ax] x [-az, az]` until one lies at
/// least `min_distance` from `player`, giving up after `max_attempts`.
pub fn sample_spawn_position(
    rng: &mut ChaCha8Rng,
    area: (i32, i32),
    player: Vec3,
    min_distance: f32,
    max_attempts: u32,
) -> SpawnSample {
    let (ax, az) = (half_extent(area.0), half_extent(area.1));
    let mut farthest: Option<(f32, Vec3)> = None;
    let max_attempts = max_attempts.max(1);

    for attempt in 1..=max_attempts {
        let x = rng.gen_range(-ax..=ax);
        let z = rng.gen_range(-az..=az);
        let candidate = Vec3::new(x as f32, ENEMY_SPAWN_HEIGHT, z as f32);
        let distance = candidate.distance(player);
        if distance >= min_distance {
            return SpawnSample {
                position: candidate,
                attempts: attempt,
                fallback: false,
            };
        }
        if farthest.map_or(true, |(best, _)| distance > best) {
            farthest = Some((distance, candidate));
        }
    }

    SpawnSample {
        position: farthest.map_or(Vec3::new(0.0, ENEMY_SPAWN_HEIGHT, 0.0), |(_, p)| p),
        attempts: max_attempts,
        fallback: true,
    }
}

/// Magnitude of a signed half extent, saturating at `i32::MAX`.
fn half_extent(value: i32) -> i32 {
    i32::try_from(value.unsigned_abs()).unwrap_or(i32::MAX)
}

/// Spawn `count` enemies, each followed by one separation pass.
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_enemy_id: &mut u32,
    count: u32,
    area: (i32, i32),
    player: Vec3,
    config: &GameConfig,
) -> Vec<Entity> {
    let mut spawned = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let sample = sample_spawn_position(
            rng,
            area,
            player,
            config.min_spawn_distance,
            config.max_spawn_attempts,
        );
        if sample.fallback {
            warn!(
                "no spawn point {:.1} from the player after {} samples, using ({:.0}, {:.0})",
                config.min_spawn_distance, sample.attempts, sample.position.x, sample.position.z
            );
        }

        let id = *next_enemy_id;
        *next_enemy_id += 1;
        let entity = world_setup::spawn_enemy(world, id, sample.position, config);
        enemy::separation_pass(world, rng, entity);
        spawned.push(entity);
    }
    info!("spawned {} enemies", spawned.len());
    spawned
}

//! Cleanup system: removes enemies whose death sequence has finished.

use hecs::{Entity, World};

use cubefront_core::components::EnemyInfo;
use cubefront_core::enums::EnemyPhase;

/// Despawn every destroyed enemy. Returns how many were removed.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, info) in world.query_mut::<&EnemyInfo>() {
        if info.phase == EnemyPhase::Destroyed {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}

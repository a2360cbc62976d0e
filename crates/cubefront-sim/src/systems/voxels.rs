//! Voxel culling: hides floor blocks beyond render distance.

use glam::Vec3;
use hecs::World;

use cubefront_core::components::{Transform, Voxel};
use cubefront_core::constants::VOXEL_HALF_SIZE;

/// Update block visibility against the player position.
/// Distance is measured from each block's top-face anchor. Returns the
/// number of visible blocks.
pub fn run(world: &mut World, player: Vec3, render_distance: f32) -> u32 {
    let mut visible = 0;
    for (_entity, (transform, voxel)) in world.query_mut::<(&Transform, &mut Voxel)>() {
        let anchor = transform.position + Vec3::Y * VOXEL_HALF_SIZE;
        voxel.visible = anchor.distance(player) <= render_distance;
        if voxel.visible {
            visible += 1;
        }
    }
    visible
}

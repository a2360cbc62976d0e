//! Animation system: samples the tip-over tweens of falling enemies.

use hecs::{Entity, World};

use cubefront_core::components::{FallAnimation, Transform};

/// Drive roll and height from each fall tween; drop the animation once done.
pub fn run(world: &mut World, now: f64) {
    let mut finished: Vec<Entity> = Vec::new();

    for (entity, (transform, fall)) in world.query_mut::<(&mut Transform, &FallAnimation)>() {
        transform.roll = fall.roll.sample(now);
        transform.position.y = fall.height.sample(now);
        if fall.roll.is_finished(now) && fall.height.is_finished(now) {
            finished.push(entity);
        }
    }

    for entity in finished {
        let _ = world.remove_one::<FallAnimation>(entity);
    }
}

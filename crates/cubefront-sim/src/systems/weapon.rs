//! Weapon system: cooldown, aim interpolation, recoil and hitscan fire.

use glam::Vec3;
use hecs::World;
use log::debug;

use cubefront_core::config::GameConfig;
use cubefront_core::constants::*;
use cubefront_core::enums::{AimState, HitKind};
use cubefront_core::events::GameEvent;
use cubefront_core::types::{InputState, Tween};
use cubefront_enemy_ai::steering::{approach, approach_angle};

use crate::collision::{raycast, RayHit, RayTarget};
use crate::rig::{Player, ScoreState, Weapon};
use crate::systems::enemy;
use crate::timers::{TimedAction, TimerQueue};

/// Per-tick weapon update. Aiming is purely cosmetic and never gates fire.
pub fn run(weapon: &mut Weapon, player: &mut Player, input: &InputState, dt: f32, now: f64) {
    weapon.update_cooldown(now);

    weapon.aim = if input.aim {
        AimState::Aiming
    } else {
        AimState::Idle
    };

    let (pose, alpha, fov, rate) = match weapon.aim {
        AimState::Aiming => (weapon.aim_position, 0.0, AIM_FOV, AIM_SPEED),
        AimState::Idle => (weapon.rest_position, 1.0, player.rest_fov, AIM_RETURN_SPEED),
    };
    let t = (rate * dt).clamp(0.0, 1.0);
    weapon.position = weapon.position.lerp(pose, t);
    weapon.cursor_alpha = approach(weapon.cursor_alpha, alpha, t);
    player.fov = approach(player.fov, fov, t);

    if weapon.aim == AimState::Aiming {
        let target = Weapon::aim_rotation(player);
        weapon.rotation = Vec3::new(
            approach_angle(weapon.rotation.x, target.x, t),
            approach_angle(weapon.rotation.y, target.y, t),
            approach_angle(weapon.rotation.z, target.z, t),
        );
    }

    if let Some(recoil) = weapon.recoil {
        weapon.recoil_pitch = recoil.sample(now);
    }
}

/// Pull the trigger at `now`.
///
/// Returns the ray hit when a shot actually went off and struck something.
/// A hit on a pursuing enemy starts its death sequence.
#[allow(clippy::too_many_arguments)]
pub fn fire(
    world: &mut World,
    weapon: &mut Weapon,
    player: &Player,
    timers: &mut TimerQueue,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
    config: &GameConfig,
    now: f64,
) -> Option<RayHit> {
    if !weapon.try_fire(now) {
        return None;
    }

    let origin = weapon.muzzle(player);
    let direction = player.forward();
    score.shots_fired += 1;
    events.push(GameEvent::ShotFired { origin, direction });

    weapon.recoil = Some(Tween::new(
        weapon.recoil_pitch,
        RECOIL_PITCH_DEG,
        now,
        RECOIL_KICK_SECS,
    ));
    timers.schedule(now + RECOIL_IDLE_DELAY_SECS, TimedAction::WeaponIdle);

    let hit = raycast(world, origin, direction, config.weapon_ray_distance)?;
    let kind = match hit.target {
        RayTarget::Enemy(_) => HitKind::Enemy,
        RayTarget::Voxel(_) => HitKind::Voxel,
        RayTarget::Ground => HitKind::Ground,
    };
    debug!("shot at {now:.3}s hit {kind:?} at {:.2}", hit.distance);
    events.push(GameEvent::RayHit {
        kind,
        point: hit.point,
    });

    if let RayTarget::Enemy(entity) = hit.target {
        enemy::resolve_hit(world, entity, timers, events, score, config, now);
    }
    Some(hit)
}

/// Ease the recoil back to the idle pose.
pub fn return_to_idle(weapon: &mut Weapon, now: f64) {
    weapon.recoil = Some(Tween::new(weapon.recoil_pitch, 0.0, now, RECOIL_RETURN_SECS));
}

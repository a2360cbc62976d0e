//! Enemy system: pursuit, separation and hit resolution.
//!
//! Calls the FSM and steering from cubefront-enemy-ai, then writes the
//! results back into ECS components.

use glam::Vec3;
use hecs::{Entity, World};
use log::debug;
use rand_chacha::ChaCha8Rng;

use cubefront_core::components::{Collider, EnemyInfo, FallAnimation, Transform};
use cubefront_core::config::GameConfig;
use cubefront_core::constants::{FALL_REST_HEIGHT, FALL_ROLL_DEG, SEPARATION_NUDGE};
use cubefront_core::enums::EnemyPhase;
use cubefront_core::events::GameEvent;
use cubefront_core::types::{Aabb, Tween};
use cubefront_enemy_ai::fsm::{death_sequence, evaluate, is_pursuing, EnemySignal};
use cubefront_enemy_ai::steering::{pursue, separation_nudge, PursuitContext};

use crate::rig::ScoreState;
use crate::timers::{TimedAction, TimerQueue};

/// Working copy of one enemy for the sequential update pass.
struct Agent {
    entity: Entity,
    id: u32,
    phase: EnemyPhase,
    position: Vec3,
    yaw: f32,
    half_extents: Vec3,
    speed: f32,
}

impl Agent {
    fn aabb(&self) -> Aabb {
        Aabb::new(self.position, self.half_extents)
    }
}

/// Run the enemy behavior for every pursuing enemy, in id order.
///
/// Each enemy first separates from the enemies it overlaps, then turns
/// toward and walks at `target`. Updates are sequential: later enemies see
/// the positions earlier enemies moved to this tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    target: Vec3,
    config: &GameConfig,
    dt: f32,
) {
    let mut agents: Vec<Agent> = world
        .query::<(&EnemyInfo, &Transform, &Collider)>()
        .iter()
        .map(|(entity, (info, transform, collider))| Agent {
            entity,
            id: info.id,
            phase: info.phase,
            position: transform.position,
            yaw: transform.yaw,
            half_extents: collider.half_extents,
            speed: info.speed,
        })
        .collect();
    agents.sort_by_key(|a| a.id);

    for i in 0..agents.len() {
        if !is_pursuing(agents[i].phase) {
            continue;
        }

        let others: Vec<Aabb> = agents
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, other)| other.aabb())
            .collect();
        let agent = &mut agents[i];
        separate(rng, &mut agent.position, agent.half_extents, &others);

        let update = pursue(&PursuitContext {
            position: agent.position,
            yaw: agent.yaw,
            target,
            speed: agent.speed,
            turn_rate: config.enemy_turn_rate,
            dt,
        });
        agent.position = update.position;
        agent.yaw = update.yaw;
    }

    for agent in agents.iter().filter(|a| is_pursuing(a.phase)) {
        if let Ok(mut transform) = world.get::<&mut Transform>(agent.entity) {
            transform.position = agent.position;
            transform.yaw = agent.yaw;
        }
    }
}

/// Push one freshly spawned enemy off any enemy it overlaps.
pub fn separation_pass(world: &mut World, rng: &mut ChaCha8Rng, entity: Entity) {
    let (mut position, half_extents) = match world.query_one_mut::<(&Transform, &Collider)>(entity)
    {
        Ok((transform, collider)) => (transform.position, collider.half_extents),
        Err(_) => return,
    };

    let others: Vec<Aabb> = world
        .query::<(&EnemyInfo, &Transform, &Collider)>()
        .iter()
        .filter(|(other, _)| *other != entity)
        .map(|(_, (_, transform, collider))| Aabb::new(transform.position, collider.half_extents))
        .collect();
    separate(rng, &mut position, half_extents, &others);

    if let Ok(mut transform) = world.get::<&mut Transform>(entity) {
        transform.position = position;
    }
}

/// One random nudge per overlapping box, tested against the moving position.
fn separate(rng: &mut ChaCha8Rng, position: &mut Vec3, half_extents: Vec3, others: &[Aabb]) {
    for other in others {
        if Aabb::new(*position, half_extents).intersects(other) {
            *position += separation_nudge(rng, SEPARATION_NUDGE);
        }
    }
}

/// Apply a hit to an enemy. Only a pursuing enemy reacts: it starts falling,
/// gets its tip-over animation and has its flash sequence scheduled.
///
/// Returns true when the hit started a death sequence.
pub fn resolve_hit(
    world: &mut World,
    entity: Entity,
    timers: &mut TimerQueue,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
    config: &GameConfig,
    now: f64,
) -> bool {
    let (enemy_id, transform) =
        match world.query_one_mut::<(&mut EnemyInfo, &Transform)>(entity) {
            Ok((info, transform)) => {
                let transition = evaluate(info.phase, EnemySignal::Hit);
                if !transition.phase_changed {
                    return false;
                }
                info.phase = transition.new_phase;
                info.hit_at_secs = Some(now);
                (info.id, *transform)
            }
            Err(_) => return false,
        };

    let fall = FallAnimation {
        roll: Tween::new(transform.roll, FALL_ROLL_DEG, now, config.fall_duration_secs),
        height: Tween::new(
            transform.position.y,
            FALL_REST_HEIGHT,
            now,
            config.fall_duration_secs,
        ),
    };
    let _ = world.insert_one(entity, fall);

    for (offset, step) in death_sequence(config.fall_duration_secs, config.flash_step_secs) {
        timers.schedule(now + offset, TimedAction::EnemyStep { entity, step });
    }

    score.enemies_hit += 1;
    events.push(GameEvent::EnemyHit { enemy_id });
    debug!("enemy {enemy_id} hit at {now:.3}s");
    true
}

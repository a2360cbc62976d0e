//! Timed event system: applies every deferred action that has come due.

use hecs::World;
use log::debug;

use cubefront_core::components::{Appearance, EnemyInfo};
use cubefront_core::events::GameEvent;
use cubefront_enemy_ai::fsm::{evaluate, DeathStep, EnemySignal};

use crate::rig::{ScoreState, Weapon};
use crate::systems::weapon::return_to_idle;
use crate::timers::{TimedAction, TimerQueue};

/// Drain the queue up to `now` and apply each action in order.
///
/// Steps addressed to an entity that no longer exists are skipped.
pub fn run(
    world: &mut World,
    timers: &mut TimerQueue,
    weapon: &mut Weapon,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
    now: f64,
) {
    for action in timers.drain_due(now) {
        match action {
            TimedAction::EnemyStep {
                entity,
                step: DeathStep::SetTint(tint),
            } => {
                if let Ok(mut appearance) = world.get::<&mut Appearance>(entity) {
                    appearance.tint = tint;
                }
            }
            TimedAction::EnemyStep {
                entity,
                step: DeathStep::Remove,
            } => {
                if let Ok(mut info) = world.get::<&mut EnemyInfo>(entity) {
                    let transition = evaluate(info.phase, EnemySignal::FlashFinished);
                    if transition.phase_changed {
                        info.phase = transition.new_phase;
                        score.enemies_destroyed += 1;
                        events.push(GameEvent::EnemyDestroyed { enemy_id: info.id });
                        debug!("enemy {} destroyed at {now:.3}s", info.id);
                    }
                }
            }
            TimedAction::WeaponIdle => return_to_idle(weapon, now),
        }
    }
}

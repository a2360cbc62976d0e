//! Timed events: deferred actions processed by the tick that reaches them.
//!
//! Each event has a fire time on the simulation clock and a payload. Nothing
//! here can be cancelled except by clearing the queue wholesale.

use hecs::Entity;

use cubefront_enemy_ai::fsm::DeathStep;

/// Slack absorbing accumulated rounding in the simulation clock.
const FIRE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimedAction {
    /// One step of an enemy's flash/removal sequence.
    EnemyStep { entity: Entity, step: DeathStep },
    /// Return the weapon from recoil to its idle pose.
    WeaponIdle,
}

#[derive(Debug, Clone, Copy)]
struct TimedEvent {
    fire_at: f64,
    seq: u64,
    action: TimedAction,
}

#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    events: Vec<TimedEvent>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn schedule(&mut self, fire_at: f64, action: TimedAction) {
        self.events.push(TimedEvent {
            fire_at,
            seq: self.next_seq,
            action,
        });
        self.next_seq += 1;
    }

    /// Remove and return every action due at `now`, earliest first.
    /// Actions due at the same time keep their scheduling order.
    pub fn drain_due(&mut self, now: f64) -> Vec<TimedAction> {
        let mut due = Vec::new();
        self.events.retain(|event| {
            if event.fire_at <= now + FIRE_EPSILON {
                due.push(*event);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.fire_at.total_cmp(&b.fire_at).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|event| event.action).collect()
    }

    /// Drop every pending action matching `predicate`.
    pub fn discard(&mut self, mut predicate: impl FnMut(&TimedAction) -> bool) {
        self.events.retain(|event| !predicate(&event.action));
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//! Enemy lifecycle finite state machine.
//!
//! Pursuing -> Falling -> Destroyed. Pure functions: the caller owns the
//! clock and turns the returned death sequence into timed events.

use cubefront_core::enums::{EnemyPhase, Tint};

/// Something that happened to an enemy this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemySignal {
    /// Struck by a hitscan ray or a projectile.
    Hit,
    /// The flash sequence reached its final step.
    FlashFinished,
}

/// Output from the FSM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTransition {
    pub new_phase: EnemyPhase,
    pub phase_changed: bool,
}

/// Evaluate one signal against the current phase.
///
/// A hit only affects a pursuing enemy; repeated hits on a falling enemy
/// are no-ops. Destroyed is terminal.
pub fn evaluate(phase: EnemyPhase, signal: EnemySignal) -> EnemyTransition {
    let next = match (phase, signal) {
        (EnemyPhase::Pursuing, EnemySignal::Hit) => EnemyPhase::Falling,
        (EnemyPhase::Falling, EnemySignal::FlashFinished) => EnemyPhase::Destroyed,
        (current, _) => current,
    };
    EnemyTransition {
        new_phase: next,
        phase_changed: next != phase,
    }
}

/// Whether the enemy still runs pursuit and separation.
pub fn is_pursuing(phase: EnemyPhase) -> bool {
    phase == EnemyPhase::Pursuing
}

/// One step of the death sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeathStep {
    SetTint(Tint),
    Remove,
}

/// The death sequence as (offset from hit in seconds, step) pairs.
///
/// The flash starts once the tip-over finishes: white, red, white, each held
/// for `flash_step_secs`, then removal.
pub fn death_sequence(fall_duration_secs: f64, flash_step_secs: f64) -> [(f64, DeathStep); 4] {
    let start = fall_duration_secs;
    [
        (start, DeathStep::SetTint(Tint::White)),
        (start + flash_step_secs, DeathStep::SetTint(Tint::Red)),
        (start + 2.0 * flash_step_secs, DeathStep::SetTint(Tint::White)),
        (start + 3.0 * flash_step_secs, DeathStep::Remove),
    ]
}

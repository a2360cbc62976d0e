//! Round state machine: enemy count and the countdown between waves.

use hecs::World;

use cubefront_core::components::EnemyInfo;
use cubefront_core::enums::RoundPhase;
use cubefront_core::state::RoundView;

/// Countdown and display state owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    /// Seconds left before the next wave; `None` while a round is active.
    pub timer: Option<f64>,
    /// Waves spawned so far. Bumped by the engine when it spawns one.
    pub wave: u32,
    pub countdown_visible: bool,
    pub countdown_label: String,
}

/// What the engine must do after the round update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    None,
    /// The last enemy is gone; the countdown just began.
    CountdownStarted,
    /// The countdown ran out; spawn the next wave now.
    SpawnWave,
}

impl RoundState {
    pub fn phase(&self, enemy_count: usize) -> RoundPhase {
        if enemy_count == 0 {
            RoundPhase::Countdown
        } else {
            RoundPhase::Active
        }
    }

    pub fn view(&self, enemy_count: usize) -> RoundView {
        RoundView {
            phase: self.phase(enemy_count),
            wave: self.wave,
            enemies_alive: enemy_count as u32,
            countdown_secs: self.timer,
        }
    }
}

/// Advance the round by one tick.
///
/// The tick that sees the count reach zero only starts the timer; later
/// ticks subtract `dt`. Enemies appearing while the timer runs cancel it.
pub fn run(
    state: &mut RoundState,
    enemy_count: usize,
    countdown_secs: f64,
    dt: f64,
) -> RoundAction {
    if enemy_count > 0 {
        if state.timer.take().is_some() {
            state.countdown_visible = false;
        }
        return RoundAction::None;
    }

    match state.timer {
        None => {
            state.timer = Some(countdown_secs);
            state.countdown_visible = true;
            state.countdown_label = countdown_label(countdown_secs);
            RoundAction::CountdownStarted
        }
        Some(remaining) => {
            let remaining = remaining - dt;
            state.countdown_label = countdown_label(remaining);
            if remaining <= 0.0 {
                state.countdown_visible = false;
                state.timer = None;
                RoundAction::SpawnWave
            } else {
                state.timer = Some(remaining);
                RoundAction::None
            }
        }
    }
}

pub fn countdown_label(remaining_secs: f64) -> String {
    format!("Next round in: {remaining_secs:.1}s")
}

/// Enemies still in the world, falling ones included.
pub fn count_enemies(world: &World) -> usize {
    world.query::<&EnemyInfo>().iter().count()
}

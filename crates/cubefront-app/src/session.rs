//! Driving a whole game from the command line.
//!
//! `run_headless` steps the engine directly at the fixed tick length, so a
//! given seed always yields the same result. `run_realtime` goes through the
//! game loop thread and sees real frame times.

use anyhow::Result;
use log::{debug, info};

use cubefront_core::commands::PlayerCommand;
use cubefront_core::constants::DT;
use cubefront_core::state::GameStateSnapshot;
use cubefront_sim::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;
use crate::game_loop::TICK_DURATION;
use crate::state::AppState;

/// Play `ticks` frames with the autopilot and return the final snapshot.
pub fn run_headless(config: SimConfig, ticks: u64) -> GameStateSnapshot {
    let mut engine = SimulationEngine::new(config);
    let mut pilot = Autopilot::new();

    engine.queue_command(PlayerCommand::StartGame);
    let mut snapshot = engine.tick(DT);

    for _ in 0..ticks {
        engine.set_input(pilot.next_input(&snapshot));
        snapshot = engine.tick(DT);
        for event in &snapshot.events {
            debug!("t={:.3} {:?}", snapshot.time.elapsed_secs, event);
        }
    }

    info!(
        "headless run finished: {} ticks, wave {}, {} destroyed",
        snapshot.time.tick, snapshot.round.wave, snapshot.score.enemies_destroyed
    );
    snapshot
}

/// Play roughly `ticks` frames on the game loop thread.
///
/// Returns `None` if the loop never published a snapshot.
pub fn run_realtime(config: SimConfig, ticks: u64) -> Result<Option<GameStateSnapshot>> {
    let state = AppState::new();
    state.start(config)?;
    state.send_command(PlayerCommand::StartGame)?;

    let mut pilot = Autopilot::new();
    for _ in 0..ticks {
        std::thread::sleep(TICK_DURATION);
        if let Some(snapshot) = state.snapshot()? {
            state.send_input(pilot.next_input(&snapshot))?;
        }
    }

    state.shutdown()?;
    let last = state.snapshot()?;
    if let Some(snapshot) = &last {
        info!(
            "realtime run finished: {} ticks in {:.2}s simulated",
            snapshot.time.tick, snapshot.time.elapsed_secs
        );
    }
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubefront_core::config::GameConfig;
    use cubefront_core::enums::GamePhase;

    fn quick_config(seed: u64) -> SimConfig {
        SimConfig {
            seed,
            game: GameConfig {
                spawn_initial_wave: true,
                wave_size: 3,
                ..GameConfig::default()
            },
            ..SimConfig::default()
        }
    }

    #[test]
    fn headless_runs_are_deterministic() {
        let a = run_headless(quick_config(7), 300);
        let b = run_headless(quick_config(7), 300);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn autopilot_clears_the_first_wave() {
        let snapshot = run_headless(quick_config(42), 600);
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(snapshot.score.enemies_destroyed >= 3);
        assert!(snapshot.score.shots_fired >= snapshot.score.enemies_hit);
    }

    #[test]
    fn zero_ticks_returns_the_opening_frame() {
        let snapshot = run_headless(quick_config(1), 0);
        assert_eq!(snapshot.time.tick, 1);
        assert_eq!(snapshot.round.wave, 1);
        assert_eq!(snapshot.enemies.len(), 3);
    }

    #[test]
    fn realtime_run_publishes_a_snapshot() {
        let snapshot = run_realtime(quick_config(3), 10).unwrap().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(snapshot.time.tick > 0);
    }
}

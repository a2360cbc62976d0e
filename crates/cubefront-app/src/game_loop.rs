//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands and input arrive via `mpsc` channel. Snapshots are stored in shared
//! state for polling. Each tick is fed the measured wall time since the last
//! one, so the engine sees real frame deltas.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{debug, info};

use cubefront_core::constants::TICK_RATE;
use cubefront_core::state::GameStateSnapshot;
use cubefront_sim::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("cubefront-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .context("Failed to spawn game loop thread")?;

    Ok((cmd_tx, handle))
}

/// Drain every pending command into the engine.
///
/// Returns false when the loop should stop.
fn drain_commands(engine: &mut SimulationEngine, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Input(input)) => engine.set_input(input),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let seed = config.seed;
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();
    let mut last_frame = Instant::now();
    info!("game loop running (seed {seed})");

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            break;
        }

        // 2. Advance one frame (engine handles pause and time scale)
        let now = Instant::now();
        let frame = now.duration_since(last_frame);
        last_frame = now;
        let snapshot = engine.tick(frame.as_secs_f64());

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            debug!("game loop fell behind by {:?}", now - next_tick_time);
            next_tick_time = now;
        }
    }

    info!("game loop stopped at tick {}", engine.time().tick);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubefront_core::commands::PlayerCommand;
    use cubefront_core::enums::GamePhase;
    use cubefront_core::types::InputState;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Input(InputState {
            fire: true,
            ..Default::default()
        }))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartGame)
        ));
        assert!(matches!(commands[1], GameLoopCommand::Input(input) if input.fire));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_drain_stops_on_shutdown() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        assert!(drain_commands(&mut engine, &rx));
        assert_eq!(engine.tick(0.0).phase, GamePhase::Active);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&mut engine, &rx));

        drop(tx);
        assert!(!drain_commands(&mut engine, &rx), "disconnect stops the loop");
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);
        engine.spawn_enemies(15, (25, 25));

        for _ in 0..50 {
            engine.tick(TICK_DURATION.as_secs_f64());
        }

        let snapshot = engine.tick(TICK_DURATION.as_secs_f64());
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_loop_thread_publishes_snapshots() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone()).unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        std::thread::sleep(TICK_DURATION * 6);
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snapshot = latest.lock().unwrap().clone().expect("at least one snapshot");
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(snapshot.time.tick > 0);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}

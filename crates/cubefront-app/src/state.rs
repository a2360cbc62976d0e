//! Application state shared between the runner and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::{anyhow, bail, Result};

use cubefront_core::commands::PlayerCommand;
use cubefront_core::state::GameStateSnapshot;
use cubefront_core::types::InputState;
use cubefront_sim::SimConfig;

use crate::game_loop;

/// Commands sent from the runner to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Replace the held input polled by the next tick.
    Input(InputState),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` holds state that does not exist before `start`
/// - `Arc<Mutex<...>>` holds the latest snapshot (shared with the loop thread)
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            worker: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the simulation on its own thread.
    pub fn start(&self, config: SimConfig) -> Result<()> {
        let mut running = self.running.lock().map_err(|e| anyhow!(e.to_string()))?;
        if *running {
            bail!("Simulation already running");
        }

        let (cmd_tx, worker) = game_loop::spawn_game_loop(config, self.latest_snapshot.clone())?;

        *self.command_tx.lock().map_err(|e| anyhow!(e.to_string()))? = Some(cmd_tx);
        *self.worker.lock().map_err(|e| anyhow!(e.to_string()))? = Some(worker);
        *running = true;
        Ok(())
    }

    /// Send a player command to the simulation.
    pub fn send_command(&self, command: PlayerCommand) -> Result<()> {
        self.send(GameLoopCommand::PlayerCommand(command))
    }

    /// Send the held input for the next tick.
    pub fn send_input(&self, input: InputState) -> Result<()> {
        self.send(GameLoopCommand::Input(input))
    }

    /// Get the latest snapshot (for polling).
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>> {
        let lock = self
            .latest_snapshot
            .lock()
            .map_err(|e| anyhow!(e.to_string()))?;
        Ok(lock.clone())
    }

    /// Stop the loop thread and wait for it to exit.
    pub fn shutdown(&self) -> Result<()> {
        let mut running = self.running.lock().map_err(|e| anyhow!(e.to_string()))?;
        if !*running {
            return Ok(());
        }
        if let Some(tx) = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!(e.to_string()))?
            .take()
        {
            // A disconnected loop has already stopped.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        if let Some(worker) = self.worker.lock().map_err(|e| anyhow!(e.to_string()))?.take() {
            worker
                .join()
                .map_err(|_| anyhow!("Game loop thread panicked"))?;
        }
        *running = false;
        Ok(())
    }

    fn send(&self, command: GameLoopCommand) -> Result<()> {
        let tx_lock = self.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(command)
                .map_err(|e| anyhow!("Failed to send command: {}", e)),
            None => Err(anyhow!("Simulation not started")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        let err = state.send_command(PlayerCommand::Pause).unwrap_err();
        assert_eq!(err.to_string(), "Simulation not started");
        assert!(state.shutdown().is_ok(), "shutdown without start is a no-op");
    }

    #[test]
    fn test_start_twice_fails_and_shutdown_joins() {
        let state = AppState::new();
        state.start(SimConfig::default()).unwrap();
        assert!(state.start(SimConfig::default()).is_err());

        state.send_command(PlayerCommand::StartGame).unwrap();
        state.send_input(InputState::default()).unwrap();
        state.shutdown().unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(state.send_command(PlayerCommand::Pause).is_err());
    }
}

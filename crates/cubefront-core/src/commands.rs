//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Continuous
//! controls (movement, aim, fire) are polled through `InputState` instead.

use serde::{Deserialize, Serialize};

/// All discrete host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new game from the main menu.
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = frozen).
    SetTimeScale { scale: f64 },
    /// Enable or disable the ballistic alternate fire.
    SetAltFire { enabled: bool },
    /// Remove every enemy and projectile and restart the countdown.
    ResetRound,
}

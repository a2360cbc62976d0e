//! Events emitted by the simulation for audio and UI feedback.
//!
//! Events are collected during a tick and drained into that tick's snapshot.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The hitscan weapon fired.
    ShotFired { origin: Vec3, direction: Vec3 },
    /// A hitscan ray struck something.
    RayHit { kind: HitKind, point: Vec3 },
    /// An enemy entered its fall.
    EnemyHit { enemy_id: u32 },
    /// An enemy finished its flash sequence and was removed.
    EnemyDestroyed { enemy_id: u32 },
    /// An alternate-fire projectile was launched.
    ProjectileLaunched { projectile_id: u32 },
    /// A projectile hit an enemy and was removed.
    ProjectileImpact { projectile_id: u32, enemy_id: u32 },
    /// A projectile ran out of lifetime and was removed.
    ProjectileExpired { projectile_id: u32 },
    /// The last enemy died; the countdown started.
    CountdownStarted { duration_secs: f64 },
    /// A new wave was spawned.
    WaveSpawned { wave: u32, count: u32 },
}

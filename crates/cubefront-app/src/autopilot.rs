//! Scripted input driver for headless runs.
//!
//! Reads the latest snapshot and produces the next frame's `InputState`:
//! turn toward the nearest pursuing enemy, hold aim, and tap the trigger
//! once the crosshair sits on the target.

use glam::Vec3;

use cubefront_core::constants::{ENEMY_HALF_EXTENTS, PLAYER_EYE_HEIGHT};
use cubefront_core::enums::EnemyPhase;
use cubefront_core::state::{EnemyView, GameStateSnapshot};
use cubefront_core::types::InputState;

/// Largest look change per frame, in degrees.
pub const MAX_TURN_PER_TICK_DEG: f32 = 15.0;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Whether the previous frame held the trigger.
    trigger_held: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input for the next frame given the current state.
    pub fn next_input(&mut self, snapshot: &GameStateSnapshot) -> InputState {
        let eye = snapshot.player.position + Vec3::Y * PLAYER_EYE_HEIGHT;
        let Some(target) = nearest_pursuer(eye, &snapshot.enemies) else {
            self.trigger_held = false;
            return InputState::default();
        };

        let (yaw, pitch) = look_angles(eye, target.position);
        let yaw_error = wrap_degrees(yaw - snapshot.player.yaw);
        let pitch_error = pitch - snapshot.player.pitch;

        let distance = eye.distance(target.position).max(f32::EPSILON);
        let tolerance = (ENEMY_HALF_EXTENTS[0] * 0.8).atan2(distance).to_degrees();
        let aligned = yaw_error.abs() <= tolerance && pitch_error.abs() <= tolerance;

        // Fire only on a fresh press; release on the frame after.
        let fire = aligned && !snapshot.weapon.cooling_down && !self.trigger_held;
        self.trigger_held = fire;

        InputState {
            look_yaw: yaw_error.clamp(-MAX_TURN_PER_TICK_DEG, MAX_TURN_PER_TICK_DEG),
            look_pitch: pitch_error.clamp(-MAX_TURN_PER_TICK_DEG, MAX_TURN_PER_TICK_DEG),
            aim: true,
            fire,
            ..InputState::default()
        }
    }
}

fn nearest_pursuer(eye: Vec3, enemies: &[EnemyView]) -> Option<&EnemyView> {
    enemies
        .iter()
        .filter(|e| e.phase == EnemyPhase::Pursuing)
        .min_by(|a, b| {
            eye.distance_squared(a.position)
                .total_cmp(&eye.distance_squared(b.position))
        })
}

/// Camera yaw and pitch (degrees) that point from `eye` at `target`.
/// Yaw 0 faces +z; positive pitch looks down.
pub fn look_angles(eye: Vec3, target: Vec3) -> (f32, f32) {
    let delta = target - eye;
    let yaw = delta.x.atan2(delta.z).to_degrees().rem_euclid(360.0);
    let horizontal = (delta.x * delta.x + delta.z * delta.z).sqrt();
    let pitch = (-delta.y).atan2(horizontal).to_degrees();
    (yaw, pitch)
}

/// Shortest signed arc for an angle difference, in (-180, 180].
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = (angle + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubefront_core::commands::PlayerCommand;
    use cubefront_core::constants::DT;
    use cubefront_sim::{SimConfig, SimulationEngine};

    fn engine_with_enemy_at(position: Vec3) -> SimulationEngine {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);
        engine.tick(DT);
        engine.spawn_enemy_at(position);
        engine
    }

    #[test]
    fn look_angles_follow_camera_convention() {
        let eye = Vec3::new(0.0, 2.0, 0.0);
        let (yaw, pitch) = look_angles(eye, Vec3::new(0.0, 2.0, 10.0));
        assert!(yaw.abs() < 1e-4);
        assert!(pitch.abs() < 1e-4);

        let (yaw, _) = look_angles(eye, Vec3::new(10.0, 2.0, 0.0));
        assert!((yaw - 90.0).abs() < 1e-4);

        let (_, pitch) = look_angles(eye, Vec3::new(0.0, 0.0, 2.0));
        assert!((pitch - 45.0).abs() < 1e-4, "below the eye is positive pitch");
    }

    #[test]
    fn wrap_takes_the_short_way_round() {
        assert_eq!(wrap_degrees(350.0), -10.0);
        assert_eq!(wrap_degrees(-350.0), 10.0);
        assert_eq!(wrap_degrees(180.0), 180.0);
        assert_eq!(wrap_degrees(-180.0), 180.0);
    }

    #[test]
    fn idle_without_targets() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);
        let snapshot = engine.tick(DT);
        let input = Autopilot::new().next_input(&snapshot);
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn turns_at_bounded_rate() {
        let mut engine = engine_with_enemy_at(Vec3::new(-10.0, 1.0, 0.0));
        let snapshot = engine.tick(DT);
        let input = Autopilot::new().next_input(&snapshot);
        assert_eq!(input.look_yaw, -MAX_TURN_PER_TICK_DEG);
        assert!(!input.fire, "not aligned yet");
        assert!(input.aim);
    }

    #[test]
    fn taps_trigger_once_aligned() {
        let mut engine = engine_with_enemy_at(Vec3::new(0.0, 1.0, 12.0));
        let mut pilot = Autopilot::new();
        let mut presses = 0;
        let mut last_fire = false;

        for _ in 0..10 {
            let snapshot = engine.tick(DT);
            let input = pilot.next_input(&snapshot);
            if input.fire && !last_fire {
                presses += 1;
            }
            assert!(!(input.fire && last_fire), "trigger is released between presses");
            last_fire = input.fire;
            engine.set_input(input);
        }

        assert!(presses >= 1);
        assert_eq!(engine.score().enemies_hit, 1);
    }

    #[test]
    fn clears_a_ring_of_enemies() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);
        engine.tick(DT);
        for i in 0..4 {
            let angle = i as f32 * std::f32::consts::FRAC_PI_2;
            engine.spawn_enemy_at(Vec3::new(angle.sin() * 15.0, 1.0, angle.cos() * 15.0));
        }

        let mut pilot = Autopilot::new();
        for _ in 0..240 {
            let snapshot = engine.tick(DT);
            engine.set_input(pilot.next_input(&snapshot));
        }

        assert_eq!(engine.score().enemies_hit, 4);
    }
}

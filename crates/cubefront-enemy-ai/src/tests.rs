#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use cubefront_core::constants::*;
    use cubefront_core::enums::{EnemyPhase, Tint};

    use crate::fsm::{death_sequence, evaluate, is_pursuing, DeathStep, EnemySignal};
    use crate::steering::{
        approach, approach_angle, bearing_deg, pursue, separation_nudge, PursuitContext,
    };

    fn make_context(position: Vec3, target: Vec3, dt: f32) -> PursuitContext {
        PursuitContext {
            position,
            yaw: 0.0,
            target,
            speed: ENEMY_SPEED,
            turn_rate: ENEMY_TURN_RATE,
            dt,
        }
    }

    // ---- Lifecycle FSM ----

    #[test]
    fn test_hit_starts_fall() {
        let t = evaluate(EnemyPhase::Pursuing, EnemySignal::Hit);
        assert!(t.phase_changed);
        assert_eq!(t.new_phase, EnemyPhase::Falling);
    }

    #[test]
    fn test_repeated_hit_is_noop() {
        let t = evaluate(EnemyPhase::Falling, EnemySignal::Hit);
        assert!(!t.phase_changed);
        assert_eq!(t.new_phase, EnemyPhase::Falling);
    }

    #[test]
    fn test_flash_finished_destroys_only_falling() {
        let t = evaluate(EnemyPhase::Falling, EnemySignal::FlashFinished);
        assert_eq!(t.new_phase, EnemyPhase::Destroyed);

        // A pursuing enemy never skips the fall.
        let t = evaluate(EnemyPhase::Pursuing, EnemySignal::FlashFinished);
        assert!(!t.phase_changed);
        assert_eq!(t.new_phase, EnemyPhase::Pursuing);
    }

    #[test]
    fn test_destroyed_is_terminal() {
        for signal in [EnemySignal::Hit, EnemySignal::FlashFinished] {
            let t = evaluate(EnemyPhase::Destroyed, signal);
            assert!(!t.phase_changed);
        }
        assert!(!is_pursuing(EnemyPhase::Destroyed));
        assert!(!is_pursuing(EnemyPhase::Falling));
        assert!(is_pursuing(EnemyPhase::Pursuing));
    }

    #[test]
    fn test_death_sequence_timing() {
        let seq = death_sequence(FALL_DURATION_SECS, FLASH_STEP_SECS);
        let offsets: Vec<f64> = seq.iter().map(|(t, _)| *t).collect();
        let expected = [0.23, 0.33, 0.43, 0.53];
        for (got, want) in offsets.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
        }
        assert_eq!(seq[0].1, DeathStep::SetTint(Tint::White));
        assert_eq!(seq[1].1, DeathStep::SetTint(Tint::Red));
        assert_eq!(seq[2].1, DeathStep::SetTint(Tint::White));
        assert_eq!(seq[3].1, DeathStep::Remove);
    }

    // ---- Steering ----

    #[test]
    fn test_pursue_moves_toward_target_at_speed() {
        let ctx = make_context(Vec3::new(10.0, 1.0, 0.0), Vec3::ZERO, 0.5);
        let update = pursue(&ctx);
        assert!(update.moved);
        assert!((update.position.x - (10.0 - ENEMY_SPEED * 0.5)).abs() < 1e-5);
        assert_eq!(update.position.y, 1.0, "no vertical pursuit");
        assert!(update.position.z.abs() < 1e-6);
    }

    #[test]
    fn test_pursue_ignores_height_difference() {
        let ctx = make_context(Vec3::new(0.0, 1.0, 4.0), Vec3::new(0.0, 30.0, 0.0), 1.0);
        let update = pursue(&ctx);
        assert_eq!(update.position.y, 1.0);
        assert!((update.position.z - (4.0 - ENEMY_SPEED)).abs() < 1e-5);
    }

    #[test]
    fn test_pursue_zero_offset_skips_tick() {
        let ctx = make_context(Vec3::new(2.0, 1.0, 2.0), Vec3::new(2.0, 0.0, 2.0), 0.1);
        let update = pursue(&ctx);
        assert!(!update.moved);
        assert_eq!(update.position, ctx.position);
        assert_eq!(update.yaw, ctx.yaw);
    }

    #[test]
    fn test_pursue_turns_gradually() {
        // Target due +x: bearing 90 degrees. One 0.1s step at rate 5 covers half.
        let ctx = make_context(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 0.1);
        let update = pursue(&ctx);
        assert!((update.yaw - 45.0).abs() < 1e-4, "yaw {}", update.yaw);
    }

    #[test]
    fn test_bearing_deg_axes() {
        assert!((bearing_deg(Vec3::Z) - 0.0).abs() < 1e-5);
        assert!((bearing_deg(Vec3::X) - 90.0).abs() < 1e-5);
        assert!((bearing_deg(-Vec3::X) + 90.0).abs() < 1e-5);
    }

    #[test]
    fn test_approach_angle_takes_short_way() {
        // From 170 to -170 is a 20 degree turn through 180, not 340 back.
        let yaw = approach_angle(170.0, -170.0, 0.5);
        assert!((yaw - 180.0).abs() < 1e-4, "yaw {yaw}");
    }

    #[test]
    fn test_approach_clamps_fraction() {
        assert_eq!(approach(0.0, 10.0, 3.0), 10.0);
        assert_eq!(approach(0.0, 10.0, -1.0), 0.0);
        assert_eq!(approach(0.0, 10.0, 0.25), 2.5);
    }

    #[test]
    fn test_separation_nudge_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let nudge = separation_nudge(&mut rng, SEPARATION_NUDGE);
            assert!(nudge.x.abs() <= SEPARATION_NUDGE);
            assert!(nudge.z.abs() <= SEPARATION_NUDGE);
            assert_eq!(nudge.y, 0.0);
        }
        assert_eq!(separation_nudge(&mut rng, 0.0), Vec3::ZERO);
    }
}

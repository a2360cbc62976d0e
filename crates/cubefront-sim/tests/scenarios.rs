use cubefront_sim::core::commands::PlayerCommand;
use cubefront_sim::core::config::GameConfig;
use cubefront_sim::core::constants::*;
use cubefront_sim::core::enums::{EnemyPhase, GamePhase, RoundPhase};
use cubefront_sim::core::events::GameEvent;
use cubefront_sim::core::types::InputState;
use cubefront_sim::{SimConfig, SimulationEngine};

fn engine_with(game: GameConfig, seed: u64) -> SimulationEngine {
    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        game,
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::StartGame);
    engine
}

// --- Full round loop ---

#[test]
fn clearing_a_wave_brings_the_next_one() {
    let mut engine = engine_with(
        GameConfig {
            spawn_initial_wave: true,
            ..Default::default()
        },
        7,
    );
    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.round.phase, RoundPhase::Active);
    assert_eq!(snap.enemies.len(), WAVE_SIZE as usize);

    for view in &snap.enemies {
        let entity = engine.enemy_entity(view.enemy_id).unwrap();
        assert!(engine.hit_enemy(entity));
    }

    // Every enemy falls, flashes and is gone a little after half a second.
    let mut countdown_seen = false;
    for _ in 0..40 {
        let snap = engine.tick(DT);
        countdown_seen |= snap
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::CountdownStarted { .. }));
    }
    assert!(countdown_seen);
    assert_eq!(engine.enemy_count(), 0);
    assert_eq!(engine.score().enemies_destroyed, WAVE_SIZE);

    let mut next_wave = None;
    for _ in 0..(ROUND_COUNTDOWN_SECS / DT) as usize + 5 {
        let snap = engine.tick(DT);
        if !snap.enemies.is_empty() {
            next_wave = Some(snap);
            break;
        }
        assert!(snap.hud.countdown_label.starts_with("Next round in: "));
    }
    let snap = next_wave.expect("a new wave after the countdown");
    assert_eq!(snap.enemies.len(), WAVE_SIZE as usize);
    assert_eq!(snap.round.wave, 2);
    assert!(snap.enemies.iter().all(|e| e.phase == EnemyPhase::Pursuing));
    assert!(snap.enemies.iter().all(|e| e.enemy_id >= WAVE_SIZE));
}

#[test]
fn enemies_converge_on_the_player() {
    let mut engine = engine_with(
        GameConfig {
            spawn_initial_wave: true,
            ..Default::default()
        },
        99,
    );
    let first = engine.tick(DT);
    let start: f32 = first.enemies.iter().map(|e| e.position.length()).sum();

    for _ in 0..120 {
        engine.tick(DT);
    }
    let later = engine.tick(DT);
    let end: f32 = later.enemies.iter().map(|e| e.position.length()).sum();
    assert!(end < start, "enemies should close in ({start} -> {end})");
    assert!(later.enemies.iter().all(|e| e.position.y == ENEMY_SPAWN_HEIGHT));
}

// --- Input driven combat ---

#[test]
fn held_trigger_fires_once_per_press() {
    let mut engine = engine_with(GameConfig::default(), 1);
    engine.tick(DT);
    engine.spawn_enemy_at(glam::Vec3::new(0.0, 1.0, 12.0));

    let fire = InputState {
        fire: true,
        ..Default::default()
    };
    let mut shots = 0;
    for i in 0..60 {
        engine.set_input(if i % 12 < 6 { fire } else { InputState::default() });
        let snap = engine.tick(DT);
        shots += snap
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::ShotFired { .. }))
            .count();
    }
    assert_eq!(shots, 5);
    assert_eq!(engine.score().enemies_hit, 1);
}

#[test]
fn alt_fire_toggle_gates_projectiles() {
    let mut engine = engine_with(GameConfig::default(), 1);
    let alt = InputState {
        alt_fire: true,
        ..Default::default()
    };

    engine.set_input(alt);
    assert!(engine.tick(DT).projectiles.is_empty());

    engine.queue_command(PlayerCommand::SetAltFire { enabled: true });
    engine.set_input(InputState::default());
    engine.tick(DT);
    engine.set_input(alt);
    let snap = engine.tick(DT);
    assert_eq!(snap.projectiles.len(), 1);
    assert!(snap.weapon.alt_fire_enabled);
}

// --- Configuration ---

#[test]
fn config_file_tunes_the_loop() {
    let game = GameConfig::from_json_str(
        r#"{ "wave_size": 3, "round_countdown_secs": 1.0, "spawn_area": [40, 40] }"#,
    )
    .unwrap();
    let mut engine = engine_with(game, 5);

    let mut spawned_at = None;
    for _ in 0..90 {
        let snap = engine.tick(DT);
        if !snap.enemies.is_empty() {
            spawned_at = Some(snap.time.elapsed_secs);
            assert_eq!(snap.enemies.len(), 3);
            break;
        }
    }
    let t = spawned_at.expect("short countdown should spawn within 1.5s");
    assert!((t - 1.0).abs() < 3.0 * DT, "spawned at {t}");
}

#[test]
fn snapshots_serialize_to_json() {
    let mut engine = engine_with(
        GameConfig {
            spawn_initial_wave: true,
            voxel_floor: true,
            ..Default::default()
        },
        3,
    );
    let snap = engine.tick(DT);
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["enemies"].as_array().unwrap().len(), WAVE_SIZE as usize);
    assert_eq!(json["events"][0]["type"], "WaveSpawned");
    assert!(json["hud"]["visible_voxels"].as_u64().unwrap() > 0);
}

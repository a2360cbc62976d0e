//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only: it never modifies the world.

use hecs::World;

use cubefront_core::components::*;
use cubefront_core::enums::*;
use cubefront_core::events::GameEvent;
use cubefront_core::state::*;
use cubefront_core::types::SimTime;

use crate::rig::{Player, ScoreState, Weapon};
use crate::systems::hud::HudState;
use crate::systems::round::RoundState;

/// Engine-side state the snapshot reads besides the world.
pub struct SnapshotSources<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub player: &'a Player,
    pub weapon: &'a Weapon,
    pub alt_fire_enabled: bool,
    pub round: &'a RoundState,
    pub hud: &'a HudState,
    pub score: &'a ScoreState,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    sources: SnapshotSources<'_>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let enemies = build_enemies(world);
    let enemy_count = enemies.len();
    let score = sources.score;

    GameStateSnapshot {
        time: *sources.time,
        phase: sources.phase,
        player: build_player(sources.player),
        weapon: build_weapon(sources.weapon, sources.alt_fire_enabled),
        enemies,
        projectiles: build_projectiles(world),
        round: sources.round.view(enemy_count),
        hud: HudView {
            countdown_visible: sources.round.countdown_visible,
            countdown_label: sources.round.countdown_label.clone(),
            fps: sources.hud.fps,
            fps_color: sources.hud.fps_color,
            visible_voxels: count_visible_voxels(world),
        },
        score: ScoreView {
            shots_fired: score.shots_fired,
            projectiles_fired: score.projectiles_fired,
            enemies_hit: score.enemies_hit,
            enemies_destroyed: score.enemies_destroyed,
            waves_spawned: score.waves_spawned,
        },
        events,
    }
}

fn build_player(player: &Player) -> PlayerView {
    PlayerView {
        position: player.position,
        yaw: player.yaw,
        pitch: player.pitch,
        speed: player.speed,
        fov: player.fov,
        rest_fov: player.rest_fov,
    }
}

fn build_weapon(weapon: &Weapon, alt_fire_enabled: bool) -> WeaponView {
    WeaponView {
        aim: weapon.aim,
        cooling_down: weapon.is_cooling_down(),
        position: weapon.position,
        rotation: weapon.rotation,
        recoil_pitch: weapon.recoil_pitch,
        cursor_alpha: weapon.cursor_alpha,
        alt_fire_enabled,
    }
}

/// Build EnemyView list from every enemy entity, ordered by id.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&EnemyInfo, &Transform, &Appearance)>()
        .iter()
        .map(|(_, (info, transform, appearance))| EnemyView {
            enemy_id: info.id,
            position: transform.position,
            yaw: transform.yaw,
            roll: transform.roll,
            phase: info.phase,
            tint: appearance.tint,
        })
        .collect();

    enemies.sort_by_key(|e| e.enemy_id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Transform)>()
        .iter()
        .map(|(_, (projectile, transform))| ProjectileView {
            projectile_id: projectile.id,
            position: transform.position,
            elapsed_secs: projectile.elapsed_secs,
        })
        .collect();

    projectiles.sort_by_key(|p| p.projectile_id);
    projectiles
}

fn count_visible_voxels(world: &World) -> u32 {
    world
        .query::<&Voxel>()
        .iter()
        .filter(|(_, voxel)| voxel.visible)
        .count() as u32
}

//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the player rig and the round
//! state, processes host commands, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::{Entity, World};
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cubefront_core::commands::PlayerCommand;
use cubefront_core::components::{EnemyInfo, Projectile};
use cubefront_core::config::GameConfig;
use cubefront_core::constants::{MAX_PITCH_DEG, RENDER_DISTANCE};
use cubefront_core::enums::GamePhase;
use cubefront_core::events::GameEvent;
use cubefront_core::state::GameStateSnapshot;
use cubefront_core::types::{InputState, SimTime};

use crate::collision::RayHit;
use crate::input::InputEdges;
use crate::rig::{Player, ScoreState, Weapon};
use crate::systems;
use crate::systems::hud::HudState;
use crate::systems::round::{RoundAction, RoundState};
use crate::systems::snapshot::SnapshotSources;
use crate::timers::{TimedAction, TimerQueue};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Tuning values.
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    config: GameConfig,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,

    input: InputState,
    edges: InputEdges,
    player: Player,
    weapon: Weapon,
    alt_fire_enabled: bool,

    timers: TimerQueue,
    round: RoundState,
    hud: HudState,
    score: ScoreState,
    next_enemy_id: u32,
    next_projectile_id: u32,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let game = config.game;
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            input: InputState::default(),
            edges: InputEdges::default(),
            player: Player::default(),
            weapon: Weapon::new(game.weapon_cooldown_secs),
            alt_fire_enabled: game.alt_fire_enabled,
            timers: TimerQueue::default(),
            round: RoundState::default(),
            hud: HudState::default(),
            score: ScoreState::default(),
            next_enemy_id: 0,
            next_projectile_id: 0,
            config: game,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the held input polled by the next tick.
    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Advance the simulation by one frame of `dt` wall seconds and return
    /// the resulting snapshot. The time scale stretches the simulated delta.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let frame_secs = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
            self.time.advance(frame_secs * self.time_scale);
            self.run_systems(frame_secs);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotSources {
                time: &self.time,
                phase: self.phase,
                player: &self.player,
                weapon: &self.weapon,
                alt_fire_enabled: self.alt_fire_enabled,
                round: &self.round,
                hud: &self.hud,
                score: &self.score,
            },
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn alt_fire_enabled(&self) -> bool {
        self.alt_fire_enabled
    }

    /// Deferred actions still waiting for their fire time.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Enemies in the world, falling ones included.
    pub fn enemy_count(&self) -> usize {
        systems::round::count_enemies(&self.world)
    }

    /// Look up an enemy entity by its snapshot id.
    pub fn enemy_entity(&self, enemy_id: u32) -> Option<Entity> {
        self.world
            .query::<&EnemyInfo>()
            .iter()
            .find(|(_, info)| info.id == enemy_id)
            .map(|(entity, _)| entity)
    }

    /// Place the player's feet.
    pub fn set_player_position(&mut self, position: Vec3) {
        self.player.position = position;
    }

    /// Point the camera (degrees). Pitch is clamped like mouse look.
    pub fn set_player_look(&mut self, yaw: f32, pitch: f32) {
        self.player.yaw = yaw;
        self.player.pitch = pitch.clamp(-MAX_PITCH_DEG, MAX_PITCH_DEG);
    }

    /// Spawn one enemy at an exact position, skipping the scheduler.
    pub fn spawn_enemy_at(&mut self, position: Vec3) -> Entity {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        world_setup::spawn_enemy(&mut self.world, id, position, &self.config)
    }

    /// Run the spawn scheduler for `count` enemies in `area`.
    pub fn spawn_enemies(&mut self, count: u32, area: (i32, i32)) -> Vec<Entity> {
        systems::spawner::spawn_wave(
            &mut self.world,
            &mut self.rng,
            &mut self.next_enemy_id,
            count,
            area,
            self.player.position,
            &self.config,
        )
    }

    /// Resolve a hit on `entity` at the current time, as a ray or projectile
    /// would. Returns true when the hit started a death sequence.
    pub fn hit_enemy(&mut self, entity: Entity) -> bool {
        systems::enemy::resolve_hit(
            &mut self.world,
            entity,
            &mut self.timers,
            &mut self.events,
            &mut self.score,
            &self.config,
            self.time.elapsed_secs,
        )
    }

    /// Pull the trigger at the current time. Returns the ray hit, if a shot
    /// went off and struck anything.
    pub fn fire(&mut self) -> Option<RayHit> {
        systems::weapon::fire(
            &mut self.world,
            &mut self.weapon,
            &self.player,
            &mut self.timers,
            &mut self.events,
            &mut self.score,
            &self.config,
            self.time.elapsed_secs,
        )
    }

    /// Launch an alternate-fire projectile. Does nothing while alternate
    /// fire is disabled.
    pub fn launch_projectile(&mut self) -> Option<Entity> {
        if !self.alt_fire_enabled {
            return None;
        }
        let id = self.next_projectile_id;
        self.next_projectile_id += 1;
        Some(systems::projectile::launch(
            &mut self.world,
            &self.weapon,
            &self.player,
            id,
            &mut self.events,
            &mut self.score,
            &self.config,
        ))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        debug!("command {command:?}");
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::MainMenu {
                    self.start_game();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                    info!("paused at {:.2}s", self.time.elapsed_secs);
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                    info!("resumed at {:.2}s", self.time.elapsed_secs);
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = if scale.is_finite() {
                    scale.clamp(0.0, 4.0)
                } else {
                    1.0
                };
            }
            PlayerCommand::SetAltFire { enabled } => {
                self.alt_fire_enabled = enabled;
            }
            PlayerCommand::ResetRound => {
                if self.phase != GamePhase::MainMenu {
                    self.reset_round();
                }
            }
        }
    }

    fn start_game(&mut self) {
        world_setup::setup_game(&mut self.world, &self.config);
        self.time = SimTime::default();
        self.player = Player::default();
        self.weapon = Weapon::new(self.config.weapon_cooldown_secs);
        self.edges.reset();
        self.timers = TimerQueue::default();
        self.round = RoundState::default();
        self.hud = HudState::default();
        self.score = ScoreState::default();
        self.next_enemy_id = 0;
        self.next_projectile_id = 0;
        self.phase = GamePhase::Active;
        info!(
            "game started (alt fire {}, voxel floor {})",
            self.alt_fire_enabled, self.config.voxel_floor
        );

        if self.config.spawn_initial_wave {
            self.spawn_next_wave();
        }
    }

    /// Remove every enemy and projectile. The next tick starts a countdown.
    fn reset_round(&mut self) {
        self.despawn_buffer.clear();
        for (entity, _) in self.world.query_mut::<&EnemyInfo>() {
            self.despawn_buffer.push(entity);
        }
        for (entity, _) in self.world.query_mut::<&Projectile>() {
            self.despawn_buffer.push(entity);
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
        self.timers
            .discard(|action| matches!(action, TimedAction::EnemyStep { .. }));
        self.round.timer = None;
        self.round.countdown_visible = false;
        info!("round reset");
    }

    fn spawn_next_wave(&mut self) {
        let spawned = self.spawn_enemies(self.config.wave_size, self.config.spawn_area);
        self.round.wave += 1;
        self.score.waves_spawned += 1;
        self.events.push(GameEvent::WaveSpawned {
            wave: self.round.wave,
            count: spawned.len() as u32,
        });
        info!(
            "wave {} spawned at {:.2}s",
            self.round.wave, self.time.elapsed_secs
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self, frame_secs: f64) {
        let dt = self.time.dt;
        let now = self.time.elapsed_secs;
        let step = dt as f32;
        let pressed = self.edges.advance(&self.input);

        // 1. Player movement, look and FOV keys
        systems::player::run(&mut self.player, &self.input, pressed, &self.config, step);
        // 2. Weapon aim, cooldown and recoil; fire on press edges
        systems::weapon::run(&mut self.weapon, &mut self.player, &self.input, step, now);
        if pressed.fire {
            self.fire();
        }
        if pressed.alt_fire {
            self.launch_projectile();
        }
        // 3. Projectile flight, contact and timeout
        systems::projectile::run(
            &mut self.world,
            &mut self.timers,
            &mut self.events,
            &mut self.score,
            &mut self.despawn_buffer,
            &self.config,
            dt,
            now,
        );
        // 4. Enemy separation and pursuit
        systems::enemy::run(
            &mut self.world,
            &mut self.rng,
            self.player.position,
            &self.config,
            step,
        );
        // 5. Tip-over animation
        systems::animation::run(&mut self.world, now);
        // 6. Timed events (flash steps, recoil return)
        systems::timed::run(
            &mut self.world,
            &mut self.timers,
            &mut self.weapon,
            &mut self.events,
            &mut self.score,
            now,
        );
        // 7. Cleanup (destroyed enemies)
        let removed = systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        if removed > 0 {
            debug!("removed {removed} destroyed enemies");
        }
        // 8. Round state, same tick as cleanup
        let enemy_count = systems::round::count_enemies(&self.world);
        match systems::round::run(
            &mut self.round,
            enemy_count,
            self.config.round_countdown_secs,
            dt,
        ) {
            RoundAction::CountdownStarted => {
                self.events.push(GameEvent::CountdownStarted {
                    duration_secs: self.config.round_countdown_secs,
                });
                info!(
                    "round clear at {:.2}s, next wave in {:.1}s",
                    now, self.config.round_countdown_secs
                );
            }
            RoundAction::SpawnWave => self.spawn_next_wave(),
            RoundAction::None => {}
        }
        // 9. Voxel culling
        systems::voxels::run(&mut self.world, self.player.position, RENDER_DISTANCE);
        // 10. HUD frame rate
        systems::hud::run(&mut self.hud, frame_secs);
    }
}

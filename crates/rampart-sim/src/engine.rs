//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no renderer or input dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;

use rampart_core::commands::PlayerCommand;
use rampart_core::components::Enemy;
use rampart_core::config::GameConfig;
use rampart_core::enums::{GamePhase, TowerKind};
use rampart_core::events::GameEvent;
use rampart_core::state::GameStateSnapshot;
use rampart_core::types::{Position, SimTime};

use crate::economy::Economy;
use crate::systems;
use crate::systems::snapshot::SnapshotContext;
use crate::systems::wave_spawner::{enemy_count_for_wave, WaveSpawner};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub game: GameConfig,
    /// Initial time scale (1.0 = normal). Only the host's pacing reads it.
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            time_scale: 1.0,
        }
    }
}

/// A tower picked from the shop, waiting to be placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub kind: TowerKind,
    pub cost: i64,
    /// Last reported cursor position, for the placement preview.
    pub preview: Position,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: GameConfig,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    next_sequence: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,

    economy: Economy,
    spawner: WaveSpawner,
    wave_in_progress: bool,
    selection: Option<Selection>,
    lives_depleted: bool,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            economy: Economy::new(&config.game),
            config: config.game,
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale.clamp(0.0, 4.0),
            next_sequence: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            spawner: WaveSpawner::default(),
            wave_in_progress: false,
            selection: None,
            lives_depleted: false,
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

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        self.snapshot()
    }

    /// Build a snapshot of the current state, draining pending events.
    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotContext {
                time: &self.time,
                phase: self.phase,
                hud: self.economy.hud(self.wave_in_progress),
                config: &self.config,
                selection: self.selection.as_ref(),
                events,
            },
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

    /// Money, lives, score and wave counter.
    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn wave_in_progress(&self) -> bool {
        self.wave_in_progress
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an enemy directly (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, position: Position, wave: u32) -> hecs::Entity {
        world_setup::spawn_enemy(&mut self.world, &mut self.next_sequence, position, wave)
    }

    /// Build a tower directly, bypassing the shop (for tests).
    #[cfg(test)]
    pub fn spawn_test_tower(&mut self, kind: TowerKind, position: Position) -> hecs::Entity {
        world_setup::spawn_tower(&mut self.world, &mut self.next_sequence, kind, position)
    }

    /// Mutable world access (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands that are not allowed
    /// right now are dropped.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SelectTower { kind } => self.select_tower(kind),
            PlayerCommand::SelectTowerSlot { slot } => match TowerKind::from_slot(slot) {
                Some(kind) => self.select_tower(kind),
                None => log::debug!("no tower bound to slot {slot}"),
            },
            PlayerCommand::CancelSelection => {
                self.selection = None;
            }
            PlayerCommand::MovePreview { x, y } => {
                if let Some(selection) = self.selection.as_mut() {
                    selection.preview = Position::new(x, y);
                }
            }
            PlayerCommand::PlaceTower { x, y } => self.place_tower(Position::new(x, y)),
            PlayerCommand::StartWave => self.start_wave(),
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
        }
    }

    fn select_tower(&mut self, kind: TowerKind) {
        let cost = self.config.tower_costs.cost(kind);
        if !self.economy.can_afford(cost) {
            log::debug!(
                "cannot afford {kind:?} tower: cost {cost}, money {}",
                self.economy.money
            );
            return;
        }
        let preview = self
            .selection
            .as_ref()
            .map(|s| s.preview)
            .unwrap_or_default();
        self.selection = Some(Selection {
            kind,
            cost,
            preview,
        });
    }

    /// Whether a tower may stand at `position`. Every spot is accepted for now.
    // TODO: reject spots overlapping the path or an existing tower's base.
    fn can_place_tower(&self, _position: Position) -> bool {
        true
    }

    fn place_tower(&mut self, position: Position) {
        if self.phase == GamePhase::Defeat {
            return;
        }
        let Some(selection) = self.selection.clone() else {
            log::debug!("place ignored: no tower selected");
            return;
        };
        if !self.can_place_tower(position) {
            return;
        }
        if !self.economy.spend(selection.cost) {
            log::debug!(
                "place ignored: {:?} costs {}, money {}",
                selection.kind,
                selection.cost,
                self.economy.money
            );
            return;
        }

        world_setup::spawn_tower(
            &mut self.world,
            &mut self.next_sequence,
            selection.kind,
            position,
        );
        self.selection = None;
        self.events.push(GameEvent::TowerPlaced {
            kind: selection.kind,
            position,
        });
        log::info!(
            "placed {:?} tower at ({:.0}, {:.0}), money left {}",
            selection.kind,
            position.x,
            position.y,
            self.economy.money
        );
    }

    fn start_wave(&mut self) {
        if self.phase == GamePhase::Defeat {
            return;
        }
        if self.wave_in_progress {
            log::debug!("wave {} already in progress", self.economy.wave);
            return;
        }

        let wave = self.economy.wave;
        self.spawner
            .start(wave, self.time.elapsed_ms, self.config.spawn_interval_ms);
        self.wave_in_progress = true;
        let enemy_count = enemy_count_for_wave(wave);
        self.events.push(GameEvent::WaveStarted { wave, enemy_count });
        log::info!("wave {wave} started: {enemy_count} enemies");
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now_ms = self.time.elapsed_ms;
        log::trace!("tick {} at {:.1}ms", self.time.tick, now_ms);

        // 1. Wave spawning (polled, no separate timer)
        let spawn_point = self.config.path.first().copied().unwrap_or_default();
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.spawner,
            spawn_point,
            &mut self.next_sequence,
            now_ms,
        );
        // 2. Enemy movement along the path
        systems::movement::run(&mut self.world, &self.config.path);
        // 3. Leaked and dead enemies leave, economy settles
        systems::cleanup::run(
            &mut self.world,
            &mut self.economy,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 4. Towers acquire targets and fire
        systems::tower_targeting::run(
            &mut self.world,
            &mut self.next_sequence,
            self.time.tick,
            &mut self.events,
        );
        // 5. Projectile flight, impacts, removal
        systems::projectiles::run(
            &mut self.world,
            self.config.field_width,
            self.config.field_height,
            now_ms,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 6. Wave completion
        self.check_wave_complete();
        // 7. Loss condition
        self.check_lives();
    }

    fn check_wave_complete(&mut self) {
        if !self.wave_in_progress || self.spawner.is_pending() {
            return;
        }
        let enemies_left = self.world.query::<&Enemy>().iter().count();
        if enemies_left > 0 {
            return;
        }

        let wave = self.economy.wave;
        self.wave_in_progress = false;
        self.economy.wave += 1;
        self.events.push(GameEvent::WaveCompleted { wave });
        log::info!("wave {wave} complete, score {}", self.economy.score);
    }

    fn check_lives(&mut self) {
        if self.lives_depleted || self.economy.lives > 0 {
            return;
        }
        self.lives_depleted = true;
        self.events.push(GameEvent::LivesDepleted);
        if self.config.end_on_defeat {
            self.phase = GamePhase::Defeat;
            log::info!("defeat on wave {}", self.economy.wave);
        } else {
            log::info!("out of lives on wave {}, play continues", self.economy.wave);
        }
    }
}

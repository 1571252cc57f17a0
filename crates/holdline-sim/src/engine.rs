//! Simulation engine: the phase machine around the per-frame systems.
//!
//! `SimulationEngine` owns the `Battlefield`, processes queued phase
//! commands and input edges, runs the systems while playing and produces a
//! `GameStateSnapshot` every tick. Completely headless, so a seeded engine
//! fed the same inputs always produces the same snapshots.

use std::collections::VecDeque;
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use holdline_core::commands::{FrameInput, PlayerCommand};
use holdline_core::constants::DEFAULT_DIFFICULTY_STEP;
use holdline_core::enums::{GameOverReason, GamePhase};
use holdline_core::events::GameEvent;
use holdline_core::state::{GameStateSnapshot, OverlayView};
use holdline_core::types::SimClock;

use crate::battlefield::Battlefield;
use crate::difficulty::Cadence;
use crate::overlay;
use crate::persistence::{self, PersistenceError, SaveRecord};
use crate::systems;
use crate::systems::player::PlayerStatus;

/// Configuration for a simulation engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Per-round difficulty increment.
    pub difficulty_step: f32,
    /// Where `SaveGame` writes and `LoadGame` reads.
    pub save_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            difficulty_step: DEFAULT_DIFFICULTY_STEP,
            save_path: PathBuf::from("holdline_save.txt"),
        }
    }
}

pub struct SimulationEngine {
    field: Battlefield,
    time: SimClock,
    phase: GamePhase,
    overlay: Option<OverlayView>,
    config: SimConfig,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        let field = Battlefield::new();
        Self {
            overlay: overlay::for_phase(GamePhase::Menu, field.round, field.score),
            field,
            time: SimClock::default(),
            phase: GamePhase::Menu,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one frame of `dt` seconds and return the resulting snapshot.
    ///
    /// Queued commands are applied first, then the input edges. The systems
    /// only run while playing; every other phase withholds time.
    pub fn tick(&mut self, dt: f32, input: &FrameInput) -> GameStateSnapshot {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.process_commands();
        self.handle_edges(input);

        if self.phase == GamePhase::Playing {
            self.run_systems(dt, input);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.field,
            &self.time,
            self.phase,
            events,
            self.overlay.clone(),
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimClock {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only view of the aggregate.
    pub fn battlefield(&self) -> &Battlefield {
        &self.field
    }

    /// Difficulty cadence for the current frame.
    pub fn cadence(&self) -> Cadence {
        Cadence::compute(
            self.field.live_enemy_count(),
            self.field.round,
            self.config.difficulty_step,
        )
    }

    #[cfg(test)]
    pub fn battlefield_mut(&mut self) -> &mut Battlefield {
        &mut self.field
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::NewGame => {
                if self.phase == GamePhase::Menu {
                    self.start_new_game();
                }
            }
            PlayerCommand::LoadGame => {
                if self.phase == GamePhase::Menu {
                    self.load_game();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.enter_phase(GamePhase::Paused);
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.enter_phase(GamePhase::Playing);
                }
            }
            PlayerCommand::ContinueWave => {
                if self.phase == GamePhase::WaveCleared {
                    self.field.round = self.field.round.saturating_add(1);
                    systems::wave_director::advance_wave(&mut self.field, &mut self.events);
                    self.enter_phase(GamePhase::Playing);
                }
            }
            PlayerCommand::SaveGame => {
                if self.phase == GamePhase::WaveCleared {
                    self.save_game();
                }
            }
            PlayerCommand::Restart => self.restart(),
            PlayerCommand::ReturnToMenu => {
                if self.phase != GamePhase::Menu {
                    self.enter_phase(GamePhase::Menu);
                }
            }
        }
    }

    fn handle_edges(&mut self, input: &FrameInput) {
        if input.restart {
            self.restart();
        }
        if input.pause_toggle {
            match self.phase {
                GamePhase::Playing => self.enter_phase(GamePhase::Paused),
                GamePhase::Paused => self.enter_phase(GamePhase::Playing),
                _ => {}
            }
        }
        if input.debug_clear && self.phase == GamePhase::Playing {
            self.field.enemies.clear();
        }
    }

    fn restart(&mut self) {
        if self.phase != GamePhase::Menu {
            self.start_new_game();
        }
    }

    fn start_new_game(&mut self) {
        systems::wave_director::start_new_game(&mut self.field, &mut self.events);
        self.time = SimClock::default();
        self.enter_phase(GamePhase::Playing);
    }

    fn save_game(&mut self) {
        let record = SaveRecord::capture(&self.field);
        match persistence::save_to_file(&self.config.save_path, &record) {
            Ok(()) => {
                info!(
                    round = record.round,
                    path = %self.config.save_path.display(),
                    "game saved"
                );
                self.events.push(GameEvent::GameSaved {
                    round: record.round,
                });
            }
            Err(err) => self.persistence_failed("save", err),
        }
    }

    /// Restore a saved game and start its round. A failed load leaves
    /// everything as it was.
    fn load_game(&mut self) {
        let record = match persistence::load_from_file(&self.config.save_path) {
            Ok(record) => record,
            Err(err) => return self.persistence_failed("load", err),
        };

        record.restore(&mut self.field);
        systems::wave_director::populate_wave(&mut self.field, &mut self.events);
        self.time = SimClock::default();
        info!(
            round = record.round,
            score = record.score,
            shields = record.shields.len(),
            "game loaded"
        );
        self.events.push(GameEvent::GameLoaded {
            round: record.round,
        });
        self.enter_phase(GamePhase::Playing);
    }

    fn persistence_failed(&mut self, action: &str, err: PersistenceError) {
        warn!(
            action,
            path = %self.config.save_path.display(),
            error = %err,
            "persistence skipped"
        );
        self.events.push(GameEvent::PersistenceFailed {
            message: err.to_string(),
        });
    }

    fn enter_phase(&mut self, phase: GamePhase) {
        if phase != self.phase {
            info!(from = ?self.phase, to = ?phase, round = self.field.round, "phase change");
        }
        self.phase = phase;
        self.overlay = overlay::for_phase(phase, self.field.round, self.field.score);
    }

    fn game_over(&mut self, reason: GameOverReason) {
        info!(?reason, round = self.field.round, score = self.field.score, "game over");
        self.events.push(GameEvent::GameOver { reason });
        self.enter_phase(GamePhase::GameOver);
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32, input: &FrameInput) {
        // 1. Player movement, firing, respawn
        let status = systems::player::run(
            &mut self.field.player,
            &mut self.field.player_projectiles,
            input,
            dt,
            &mut self.events,
        );
        if status == PlayerStatus::LivesExhausted {
            self.game_over(GameOverReason::LivesExhausted);
            return;
        }

        // 2. Projectile movement and culling
        systems::projectiles::run(&mut self.field.player_projectiles, dt);
        systems::projectiles::run(&mut self.field.enemy_projectiles, dt);

        // 3. Collisions and scoring
        systems::collision::run(&mut self.field, &mut self.events);

        // 4. Formation descent, breach check and fire
        let cadence = self.cadence();
        let field = &mut self.field;
        let breached = systems::formation::run(
            &mut field.enemies,
            &mut field.enemy_projectiles,
            &mut field.formation_timers,
            &cadence,
            &mut self.rng,
            dt,
            &mut self.events,
        );
        if breached {
            self.game_over(GameOverReason::FormationBreach);
            return;
        }

        // 5. Wave end
        if self.field.enemies.is_empty() {
            info!(round = self.field.round, score = self.field.score, "wave cleared");
            self.events.push(GameEvent::WaveCleared {
                round: self.field.round,
                score: self.field.score,
            });
            self.enter_phase(GamePhase::WaveCleared);
        }
    }
}

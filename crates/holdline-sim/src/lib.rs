//! Simulation engine for HOLDLINE.
//!
//! Owns the game-state aggregate, runs the per-frame systems while a game is
//! being played, drives the phase machine and produces `GameStateSnapshot`s
//! for the rendering layer.

pub mod battlefield;
pub mod difficulty;
pub mod engine;
pub mod overlay;
pub mod persistence;
pub mod systems;

pub use battlefield::Battlefield;
pub use engine::{SimConfig, SimulationEngine};
pub use holdline_core as core;

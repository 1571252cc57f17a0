//! Game state snapshot: the read-only view handed to the rendering layer each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimClock;

/// Complete visible state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimClock,
    pub phase: GamePhase,
    pub round: u32,
    pub score: u32,
    pub lives_remaining: u32,
    pub player: PlayerView,
    pub enemies: Vec<UnitView>,
    pub shields: Vec<UnitView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<GameEvent>,
    /// Present while a menu-like phase is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<OverlayView>,
}

/// Player box and health.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    /// Box centre.
    pub position: Vec2,
    pub size: Vec2,
    pub health: u32,
    pub max_health: u32,
    pub tier: HealthTier,
    pub alive: bool,
}

/// An enemy or shield box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    /// Top-left corner.
    pub position: Vec2,
    pub size: Vec2,
    pub health: u32,
    pub max_health: u32,
    pub tier: HealthTier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    /// Box centre.
    pub position: Vec2,
    pub size: Vec2,
    pub faction: Faction,
}

/// Descriptor for the menu drawn over a non-playing phase.
/// Built when the phase is entered and dropped when it is left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayView {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Buttons in display order.
    pub actions: Vec<MenuAction>,
}

//! Entity primitives owned by the simulation aggregate.
//!
//! These are plain data structs. Besides construction and bounding-box
//! helpers, game logic lives in the simulation systems, not here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{Faction, HealthTier};
use crate::types::Rect;

/// Current and maximum health. Invariant: `current <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

/// The player-controlled unit. `position` is the centre of its box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub speed: f32,
    pub health: Health,
    /// Permanent lives left. Decremented on each death.
    pub total_lives: u32,
    pub alive: bool,
    /// Seconds spent dead; only advances while `alive` is false.
    pub respawn_timer: f32,
    /// Seconds since the last shot.
    pub fire_timer: f32,
}

/// A member of the enemy formation. `position` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyUnit {
    pub position: Vec2,
    pub health: Health,
}

/// A destructible barrier. `position` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shield {
    pub position: Vec2,
    pub health: Health,
}

/// A bullet. `position` is the centre of its box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    pub faction: Faction,
}

impl Health {
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Restore up to `amount`, never above `max`.
    pub fn heal(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }

    pub fn tier(&self) -> HealthTier {
        HealthTier::from_health(self.current, self.max)
    }
}

impl Player {
    /// A fresh player at the spawn point, ready to fire.
    pub fn new() -> Self {
        Self {
            position: Self::spawn_point(),
            speed: PLAYER_SPEED,
            health: Health::full(PLAYER_MAX_HEALTH),
            total_lives: PLAYER_STARTING_LIVES,
            alive: true,
            respawn_timer: 0.0,
            fire_timer: PLAYER_FIRE_COOLDOWN_SECS,
        }
    }

    pub fn spawn_point() -> Vec2 {
        Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y)
    }

    pub fn size() -> Vec2 {
        Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.position, Self::size())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyUnit {
    pub fn new(position: Vec2, health: u32) -> Self {
        Self {
            position,
            health: Health::full(health),
        }
    }

    pub fn size() -> Vec2 {
        Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, Self::size())
    }

    /// Where this unit's projectiles appear: the middle of its bottom edge.
    pub fn muzzle(&self) -> Vec2 {
        self.position + Vec2::new(ENEMY_WIDTH / 2.0, ENEMY_HEIGHT)
    }
}

impl Shield {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            health: Health::full(SHIELD_MAX_HEALTH),
        }
    }

    pub fn size() -> Vec2 {
        Vec2::new(SHIELD_WIDTH, SHIELD_HEIGHT)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, Self::size())
    }
}

impl Projectile {
    /// An upward projectile fired by the player.
    pub fn player(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::new(0.0, -PROJECTILE_SPEED),
            faction: Faction::Player,
        }
    }

    /// A downward projectile fired by the formation.
    pub fn enemy(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::new(0.0, PROJECTILE_SPEED),
            faction: Faction::Enemy,
        }
    }

    pub fn size() -> Vec2 {
        Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.position, Self::size())
    }
}

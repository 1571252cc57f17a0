//! The game-state aggregate.
//!
//! Every entity collection is owned here and nowhere else. The engine owns one
//! `Battlefield` and lends it to each system for the duration of a frame.

use holdline_core::components::{EnemyUnit, Player, Projectile, Shield};

use crate::systems::formation::FormationTimers;

#[derive(Debug, Clone)]
pub struct Battlefield {
    pub player: Player,
    /// Live formation in layout order. Destroyed units are removed.
    pub enemies: Vec<EnemyUnit>,
    /// Live shields in layout order.
    pub shields: Vec<Shield>,
    pub player_projectiles: Vec<Projectile>,
    pub enemy_projectiles: Vec<Projectile>,
    /// Current wave, starting at 1.
    pub round: u32,
    pub score: u32,
    pub formation_timers: FormationTimers,
}

impl Battlefield {
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            enemies: Vec::new(),
            shields: Vec::new(),
            player_projectiles: Vec::new(),
            enemy_projectiles: Vec::new(),
            round: 1,
            score: 0,
            formation_timers: FormationTimers::default(),
        }
    }

    pub fn live_enemy_count(&self) -> usize {
        self.enemies.len()
    }

    /// Drop every projectile in flight.
    pub fn clear_projectiles(&mut self) {
        self.player_projectiles.clear();
        self.enemy_projectiles.clear();
    }
}

impl Default for Battlefield {
    fn default() -> Self {
        Self::new()
    }
}

//! Collision resolution between projectiles and their targets.
//!
//! Each projectile is tested against the targets in collection order and is
//! consumed by the first one it overlaps. A hit removes one point of health;
//! the hit that takes a target from 1 (or an already-empty 0) is lethal and
//! removes it from its collection.

use glam::Vec2;

use holdline_core::components::{EnemyUnit, Health, Player, Projectile, Shield};
use holdline_core::constants::{SCORE_ENEMY_HIT, SCORE_ENEMY_KILL};
use holdline_core::events::GameEvent;
use holdline_core::types::Rect;

use crate::battlefield::Battlefield;
use crate::systems::player;

/// Anything a projectile can damage and remove.
pub trait Target {
    fn bounds(&self) -> Rect;
    fn health_mut(&mut self) -> &mut Health;
    fn position(&self) -> Vec2;
}

impl Target for EnemyUnit {
    fn bounds(&self) -> Rect {
        EnemyUnit::bounds(self)
    }
    fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }
    fn position(&self) -> Vec2 {
        self.position
    }
}

impl Target for Shield {
    fn bounds(&self) -> Rect {
        Shield::bounds(self)
    }
    fn health_mut(&mut self) -> &mut Health {
        &mut self.health
    }
    fn position(&self) -> Vec2 {
        self.position
    }
}

/// What a single projectile did to the target it struck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    Damaged { remaining: u32 },
    Destroyed { at: Vec2 },
}

/// Summary of one frame of collision resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionResult {
    pub score_gained: u32,
    pub enemies_destroyed: u32,
    pub shields_destroyed: u32,
    pub player_killed: bool,
}

/// Resolve `projectiles` against `targets`, consuming every projectile that
/// hits something. Hits are returned in projectile order.
pub fn resolve<T: Target>(projectiles: &mut Vec<Projectile>, targets: &mut Vec<T>) -> Vec<Hit> {
    let mut hits = Vec::new();
    projectiles.retain(|projectile| {
        let area = projectile.bounds();
        let Some(index) = targets.iter().position(|t| t.bounds().intersects(&area)) else {
            return true;
        };
        let health = targets[index].health_mut();
        if health.current <= 1 {
            let at = targets.remove(index).position();
            hits.push(Hit::Destroyed { at });
        } else {
            health.current -= 1;
            hits.push(Hit::Damaged {
                remaining: health.current,
            });
        }
        false
    });
    hits
}

/// Resolve `projectiles` against the player. Once the player is down the
/// remaining projectiles pass through. Returns true if the player died.
pub fn resolve_player(
    projectiles: &mut Vec<Projectile>,
    target: &mut Player,
    events: &mut Vec<GameEvent>,
) -> bool {
    let mut killed = false;
    projectiles.retain(|projectile| {
        if !target.alive || !projectile.bounds().intersects(&target.bounds()) {
            return true;
        }
        killed |= player::take_hit(target, events);
        false
    });
    killed
}

/// Run the full per-frame collision order: player shots against the
/// formation then the shields, enemy shots against the shields then the player.
pub fn run(field: &mut Battlefield, events: &mut Vec<GameEvent>) -> CollisionResult {
    let mut result = CollisionResult::default();

    for hit in resolve(&mut field.player_projectiles, &mut field.enemies) {
        match hit {
            Hit::Damaged { remaining } => {
                result.score_gained += SCORE_ENEMY_HIT;
                events.push(GameEvent::EnemyHit { remaining });
            }
            Hit::Destroyed { at } => {
                result.score_gained += SCORE_ENEMY_KILL;
                result.enemies_destroyed += 1;
                events.push(GameEvent::EnemyDestroyed { x: at.x, y: at.y });
            }
        }
    }

    let mut shield_hits = resolve(&mut field.player_projectiles, &mut field.shields);
    shield_hits.extend(resolve(&mut field.enemy_projectiles, &mut field.shields));
    for hit in shield_hits {
        match hit {
            Hit::Damaged { remaining } => events.push(GameEvent::ShieldHit { remaining }),
            Hit::Destroyed { at } => {
                result.shields_destroyed += 1;
                events.push(GameEvent::ShieldDestroyed { x: at.x, y: at.y });
            }
        }
    }

    result.player_killed = resolve_player(&mut field.enemy_projectiles, &mut field.player, events);

    field.score = field.score.saturating_add(result.score_gained);
    result
}

//! Snapshot system: builds the read-only `GameStateSnapshot` from the aggregate.
//!
//! Never mutates the battlefield.

use holdline_core::components::{EnemyUnit, Player, Projectile, Shield};
use holdline_core::enums::GamePhase;
use holdline_core::events::GameEvent;
use holdline_core::state::*;
use holdline_core::types::SimClock;

use crate::battlefield::Battlefield;

pub fn build_snapshot(
    field: &Battlefield,
    time: &SimClock,
    phase: GamePhase,
    events: Vec<GameEvent>,
    overlay: Option<OverlayView>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        round: field.round,
        score: field.score,
        lives_remaining: field.player.total_lives,
        player: build_player(&field.player),
        enemies: field.enemies.iter().map(enemy_view).collect(),
        shields: field.shields.iter().map(shield_view).collect(),
        projectiles: field
            .player_projectiles
            .iter()
            .chain(field.enemy_projectiles.iter())
            .map(projectile_view)
            .collect(),
        events,
        overlay,
    }
}

fn build_player(player: &Player) -> PlayerView {
    PlayerView {
        position: player.position,
        size: Player::size(),
        health: player.health.current,
        max_health: player.health.max,
        tier: player.health.tier(),
        alive: player.alive,
    }
}

fn enemy_view(unit: &EnemyUnit) -> UnitView {
    UnitView {
        position: unit.position,
        size: EnemyUnit::size(),
        health: unit.health.current,
        max_health: unit.health.max,
        tier: unit.health.tier(),
    }
}

fn shield_view(shield: &Shield) -> UnitView {
    UnitView {
        position: shield.position,
        size: Shield::size(),
        health: shield.health.current,
        max_health: shield.health.max,
        tier: shield.health.tier(),
    }
}

fn projectile_view(projectile: &Projectile) -> ProjectileView {
    ProjectileView {
        position: projectile.position,
        size: Projectile::size(),
        faction: projectile.faction,
    }
}

//! Player controller: movement, cooldown-gated firing and the respawn law.

use tracing::debug;

use holdline_core::commands::FrameInput;
use holdline_core::components::{Player, Projectile};
use holdline_core::constants::*;
use holdline_core::events::GameEvent;

/// Result of one player update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    Active,
    /// Dead and waiting out the respawn delay.
    Down,
    /// The respawn delay elapsed with no lives left.
    LivesExhausted,
}

/// Advance the player by `dt` seconds.
pub fn run(
    player: &mut Player,
    projectiles: &mut Vec<Projectile>,
    input: &FrameInput,
    dt: f32,
    events: &mut Vec<GameEvent>,
) -> PlayerStatus {
    if !player.alive {
        return tick_respawn(player, dt, events);
    }

    steer(player, input.axis(), dt);

    player.fire_timer = (player.fire_timer + dt).min(PLAYER_FIRE_COOLDOWN_SECS);
    if input.fire && player.fire_timer >= PLAYER_FIRE_COOLDOWN_SECS {
        if projectiles.len() < MAX_PLAYER_PROJECTILES {
            projectiles.push(Projectile::player(player.position));
        }
        player.fire_timer = 0.0;
    }

    PlayerStatus::Active
}

/// Move horizontally, keeping the whole box inside the arena.
fn steer(player: &mut Player, axis: f32, dt: f32) {
    let half = PLAYER_WIDTH / 2.0;
    let x = player.position.x + axis * player.speed * dt;
    player.position.x = x.clamp(half, ARENA_WIDTH - half);
}

fn tick_respawn(player: &mut Player, dt: f32, events: &mut Vec<GameEvent>) -> PlayerStatus {
    player.respawn_timer += dt;
    if player.respawn_timer < RESPAWN_DELAY_SECS {
        return PlayerStatus::Down;
    }
    if player.total_lives == 0 {
        return PlayerStatus::LivesExhausted;
    }

    player.respawn_timer = 0.0;
    revive(player);
    debug!(lives = player.total_lives, "player respawned");
    events.push(GameEvent::PlayerRespawned);
    PlayerStatus::Active
}

/// Bring the player back at the spawn point with full health.
pub fn revive(player: &mut Player) {
    player.health.current = player.health.max;
    player.alive = true;
    player.respawn_timer = 0.0;
    player.position = Player::spawn_point();
}

/// Take one point of damage. Returns true if this hit killed the player.
pub fn take_hit(player: &mut Player, events: &mut Vec<GameEvent>) -> bool {
    player.health.current = player.health.current.saturating_sub(1);
    if player.health.current > 0 {
        events.push(GameEvent::PlayerHit {
            remaining: player.health.current,
        });
        return false;
    }

    player.total_lives = player.total_lives.saturating_sub(1);
    player.alive = false;
    player.respawn_timer = 0.0;
    events.push(GameEvent::PlayerDied {
        lives_left: player.total_lives,
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn held(left: bool, right: bool, fire: bool) -> FrameInput {
        FrameInput {
            left,
            right,
            fire,
            ..Default::default()
        }
    }

    #[test]
    fn movement_is_clamped_to_the_arena() {
        let mut player = Player::new();
        let mut shots = Vec::new();
        let mut events = Vec::new();
        for _ in 0..100 {
            run(&mut player, &mut shots, &held(true, false, false), 0.1, &mut events);
        }
        assert_eq!(player.position.x, PLAYER_WIDTH / 2.0);
        for _ in 0..100 {
            run(&mut player, &mut shots, &held(false, true, false), 0.1, &mut events);
        }
        assert_eq!(player.position.x, ARENA_WIDTH - PLAYER_WIDTH / 2.0);
        assert_eq!(player.position.y, PLAYER_SPAWN_Y);
    }

    #[test]
    fn both_keys_cancel() {
        let mut player = Player::new();
        let start = player.position;
        run(&mut player, &mut Vec::new(), &held(true, true, false), 0.5, &mut Vec::new());
        assert_eq!(player.position, start);
    }

    #[test]
    fn firing_respects_cooldown() {
        let mut player = Player::new();
        let mut shots = Vec::new();
        let mut events = Vec::new();
        let fire = held(false, false, true);

        run(&mut player, &mut shots, &fire, 0.0, &mut events);
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].position, player.position);

        run(&mut player, &mut shots, &fire, 0.25, &mut events);
        assert_eq!(shots.len(), 1);

        run(&mut player, &mut shots, &fire, 0.25, &mut events);
        assert_eq!(shots.len(), 2);
    }

    #[test]
    fn full_pool_drops_the_shot_but_resets_cooldown() {
        let mut player = Player::new();
        let mut shots: Vec<Projectile> = (0..MAX_PLAYER_PROJECTILES)
            .map(|_| Projectile::player(Vec2::new(0.0, 100.0)))
            .collect();
        run(&mut player, &mut shots, &held(false, false, true), 0.0, &mut Vec::new());
        assert_eq!(shots.len(), MAX_PLAYER_PROJECTILES);
        assert_eq!(player.fire_timer, 0.0);
    }

    #[test]
    fn lethal_hit_costs_a_life() {
        let mut player = Player::new();
        let mut events = Vec::new();
        assert!(!take_hit(&mut player, &mut events));
        assert!(take_hit(&mut player, &mut events));
        assert!(!player.alive);
        assert_eq!(player.total_lives, PLAYER_STARTING_LIVES - 1);
        assert_eq!(
            events,
            vec![
                GameEvent::PlayerHit { remaining: 1 },
                GameEvent::PlayerDied { lives_left: 2 },
            ]
        );
    }

    #[test]
    fn respawn_after_exact_delay() {
        let mut player = Player::new();
        let mut events = Vec::new();
        player.position.x = 100.0;
        take_hit(&mut player, &mut events);
        take_hit(&mut player, &mut events);

        let frozen = player.position;
        let mut shots = Vec::new();
        for _ in 0..4 {
            let status = run(&mut player, &mut shots, &held(false, true, true), 1.0, &mut events);
            assert_eq!(status, PlayerStatus::Down);
            assert_eq!(player.position, frozen);
        }
        assert!(shots.is_empty());

        let status = run(&mut player, &mut shots, &FrameInput::default(), 1.0, &mut events);
        assert_eq!(status, PlayerStatus::Active);
        assert!(player.alive);
        assert_eq!(player.health.current, PLAYER_MAX_HEALTH);
        assert_eq!(player.position, Player::spawn_point());
        assert_eq!(events.last(), Some(&GameEvent::PlayerRespawned));
    }

    #[test]
    fn no_lives_left_exhausts() {
        let mut player = Player::new();
        player.total_lives = 1;
        take_hit(&mut player, &mut Vec::new());
        take_hit(&mut player, &mut Vec::new());
        assert_eq!(player.total_lives, 0);

        let status = run(&mut player, &mut Vec::new(), &FrameInput::default(), 4.0, &mut Vec::new());
        assert_eq!(status, PlayerStatus::Down);
        let status = run(&mut player, &mut Vec::new(), &FrameInput::default(), 1.0, &mut Vec::new());
        assert_eq!(status, PlayerStatus::LivesExhausted);
        assert!(!player.alive);
    }
}

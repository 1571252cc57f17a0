//! Wave director: wave composition, formation and shield layout, and the
//! new-game / wave-advance routines.

use glam::Vec2;
use tracing::info;

use holdline_core::components::{EnemyUnit, Player, Shield};
use holdline_core::constants::*;
use holdline_core::events::GameEvent;

use crate::battlefield::Battlefield;
use crate::systems::formation::FormationTimers;

/// Composition of one wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveDefinition {
    pub round: u32,
    pub enemy_count: u32,
    pub columns: u32,
    pub rows: u32,
    /// Added to every unit's row health.
    pub health_bonus: u32,
}

impl WaveDefinition {
    pub fn for_round(round: u32) -> Self {
        let round = round.clamp(1, MAX_ROUND);
        let enemy_count = WAVE_ENEMIES_PER_ROUND
            .saturating_mul(round - 1)
            .saturating_add(WAVE_BASE_ENEMIES);
        Self {
            round,
            enemy_count,
            columns: FORMATION_COLUMNS,
            rows: enemy_count.div_ceil(FORMATION_COLUMNS),
            health_bonus: round - 1,
        }
    }

    /// Fresh, laid-out units for this wave.
    pub fn spawn(&self) -> Vec<EnemyUnit> {
        let mut units = vec![EnemyUnit::new(Vec2::ZERO, 1); self.enemy_count as usize];
        layout_formation(&mut units, self.columns, self.rows, self.health_bonus);
        units
    }
}

/// Place `units` row-major on a grid centred horizontally and lifted above
/// the vertical centre. Row `r` of `rows` gets `rows - r + bonus` health.
///
/// Zero dimensions or an empty slice leave the units untouched.
pub fn layout_formation(units: &mut [EnemyUnit], columns: u32, rows: u32, bonus: u32) {
    if columns == 0 || rows == 0 || units.is_empty() {
        return;
    }

    let grid = Vec2::new(
        columns as f32 * ENEMY_WIDTH + (columns - 1) as f32 * FORMATION_MARGIN_X,
        rows as f32 * ENEMY_HEIGHT + (rows - 1) as f32 * FORMATION_MARGIN_Y,
    );
    let slack = Vec2::new(ARENA_WIDTH, ARENA_HEIGHT) - grid;
    let origin = Vec2::new(slack.x / 2.0, slack.y / 2.0 - FORMATION_LIFT * slack.y);
    let pitch = Vec2::new(ENEMY_WIDTH + FORMATION_MARGIN_X, FORMATION_ROW_PITCH);

    for (i, unit) in units.iter_mut().enumerate() {
        let col = i as u32 % columns;
        let row = i as u32 / columns;
        unit.position = origin + Vec2::new(col as f32, row as f32) * pitch;
        let health = rows.saturating_sub(row).max(1).saturating_add(bonus);
        unit.health.max = health;
        unit.health.current = health;
    }
}

/// Line `shields` up along the shield band, centred horizontally.
/// An empty slice is left untouched.
pub fn layout_shields(shields: &mut [Shield]) {
    if shields.is_empty() {
        return;
    }
    let n = shields.len() as f32;
    let span = n * SHIELD_WIDTH + (n - 1.0) * SHIELD_GAP;
    let left = (ARENA_WIDTH - span) / 2.0;
    let y = ARENA_HEIGHT * SHIELD_BAND_FRACTION;
    for (i, shield) in shields.iter_mut().enumerate() {
        shield.position = Vec2::new(left + i as f32 * (SHIELD_WIDTH + SHIELD_GAP), y);
    }
}

/// A fresh batch of full-health shields.
pub fn fresh_shields() -> Vec<Shield> {
    let mut shields = vec![Shield::new(Vec2::ZERO); SHIELD_BATCH_SIZE];
    layout_shields(&mut shields);
    shields
}

/// Populate the current round: clear both projectile pools, regenerate the
/// formation, replace the shields only if none are left, and restart the
/// formation timers with a grace period.
pub fn populate_wave(field: &mut Battlefield, events: &mut Vec<GameEvent>) {
    field.clear_projectiles();

    let wave = WaveDefinition::for_round(field.round);
    field.round = wave.round;
    field.enemies = wave.spawn();
    if field.shields.is_empty() {
        field.shields = fresh_shields();
    }
    field.formation_timers = FormationTimers::wave_start();

    info!(
        round = wave.round,
        enemies = wave.enemy_count,
        rows = wave.rows,
        shields = field.shields.len(),
        "wave started"
    );
    events.push(GameEvent::WaveStarted {
        round: wave.round,
        enemies: wave.enemy_count,
    });
}

/// Reset everything for round 1.
pub fn start_new_game(field: &mut Battlefield, events: &mut Vec<GameEvent>) {
    *field = Battlefield::new();
    populate_wave(field, events);
}

/// Between-wave transition into `field.round`: heal the player and the
/// surviving shields, then populate. A downed player with lives left is put
/// back on the spawn point; one with none stays down until the respawn delay
/// ends the game.
pub fn advance_wave(field: &mut Battlefield, events: &mut Vec<GameEvent>) {
    let player = &mut field.player;
    if player.alive {
        player.health.heal(1);
    } else if player.total_lives > 0 {
        player.health.heal(1);
        player.alive = true;
        player.respawn_timer = 0.0;
        player.position = Player::spawn_point();
    }

    for shield in field.shields.iter_mut() {
        shield.health.heal(SHIELD_HEAL_PER_WAVE);
    }

    populate_wave(field, events);
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdline_core::components::Projectile;

    #[test]
    fn wave_sizes_grow_by_round() {
        let first = WaveDefinition::for_round(1);
        assert_eq!((first.enemy_count, first.rows, first.health_bonus), (50, 5, 0));
        let third = WaveDefinition::for_round(3);
        assert_eq!((third.enemy_count, third.rows, third.health_bonus), (60, 6, 2));
        let second = WaveDefinition::for_round(2);
        assert_eq!((second.enemy_count, second.rows), (55, 6));
        assert_eq!(WaveDefinition::for_round(0), first);
    }

    #[test]
    fn rounds_past_the_cap_repeat_the_last_wave() {
        let last = WaveDefinition::for_round(MAX_ROUND);
        assert_eq!(WaveDefinition::for_round(MAX_ROUND + 1), last);
        assert_eq!(WaveDefinition::for_round(u32::MAX), last);
        assert_eq!(last.enemy_count, 50 + (MAX_ROUND - 1) * 5);
    }

    #[test]
    fn huge_health_bonus_saturates() {
        let mut units = vec![EnemyUnit::new(Vec2::ZERO, 1); 2];
        layout_formation(&mut units, 1, 2, u32::MAX);
        assert_eq!(units[0].health.current, u32::MAX);
        assert_eq!(units[1].health.current, u32::MAX);
    }

    #[test]
    fn formation_is_centred_and_row_weighted() {
        let units = WaveDefinition::for_round(1).spawn();
        assert_eq!(units.len(), 50);

        let left = units.iter().map(|u| u.position.x).fold(f32::MAX, f32::min);
        let right = units
            .iter()
            .map(|u| u.position.x + ENEMY_WIDTH)
            .fold(f32::MIN, f32::max);
        assert!((left - (ARENA_WIDTH - right)).abs() < 1e-3);
        assert!((left - 105.0).abs() < 1e-3);

        // grid height 160, slack 440, top = 220 - 176
        assert!((units[0].position.y - 44.0).abs() < 1e-3);
        for (i, unit) in units.iter().enumerate() {
            let row = i as u32 / FORMATION_COLUMNS;
            assert_eq!(unit.health.current, 5 - row);
            assert_eq!(unit.health.max, 5 - row);
        }
    }

    #[test]
    fn partial_last_row_keeps_grid_shape() {
        let units = WaveDefinition::for_round(2).spawn();
        assert_eq!(units.len(), 55);
        assert_eq!(units[50].position.x, units[0].position.x);
        assert_eq!(units[54].health.current, 1 + 1);
        assert_eq!(units[0].health.current, 6 + 1);
    }

    #[test]
    fn degenerate_layouts_are_noops() {
        let mut units = vec![EnemyUnit::new(Vec2::new(3.0, 4.0), 2)];
        layout_formation(&mut units, 0, 5, 0);
        layout_formation(&mut units, 10, 0, 0);
        assert_eq!(units[0], EnemyUnit::new(Vec2::new(3.0, 4.0), 2));
        layout_formation(&mut [], 10, 5, 0);
        layout_shields(&mut []);
    }

    #[test]
    fn fresh_shields_sit_on_the_band() {
        let shields = fresh_shields();
        assert_eq!(shields.len(), SHIELD_BATCH_SIZE);
        assert!((shields[0].position.x - 142.5).abs() < 1e-3);
        for pair in shields.windows(2) {
            assert!((pair[1].position.x - pair[0].position.x - 155.0).abs() < 1e-3);
        }
        for shield in &shields {
            assert_eq!(shield.position.y, 480.0);
            assert_eq!(shield.health.current, SHIELD_MAX_HEALTH);
        }
    }

    #[test]
    fn advance_heals_and_repopulates() {
        let mut field = Battlefield::new();
        let mut events = Vec::new();
        start_new_game(&mut field, &mut events);

        field.player.health.current = 1;
        field.shields.truncate(2);
        field.shields[0].health.current = 3;
        field.shields[1].health.current = 7;
        field.enemies.clear();
        field.enemy_projectiles.push(Projectile::enemy(Vec2::ZERO));
        field.round = 2;
        advance_wave(&mut field, &mut events);

        assert_eq!(field.player.health.current, 2);
        assert_eq!(field.shields.len(), 2);
        assert_eq!(field.shields[0].health.current, 5);
        assert_eq!(field.shields[1].health.current, SHIELD_MAX_HEALTH);
        assert_eq!(field.enemies.len(), 55);
        assert!(field.enemy_projectiles.is_empty());
        assert!(field.formation_timers.in_grace());
        assert_eq!(
            events.last(),
            Some(&GameEvent::WaveStarted {
                round: 2,
                enemies: 55
            })
        );
    }

    #[test]
    fn advance_replaces_a_lost_shield_line() {
        let mut field = Battlefield::new();
        field.shields.clear();
        advance_wave(&mut field, &mut Vec::new());
        assert_eq!(field.shields.len(), SHIELD_BATCH_SIZE);
    }

    #[test]
    fn advance_revives_a_downed_player() {
        let mut field = Battlefield::new();
        field.player.alive = false;
        field.player.health.current = 0;
        field.player.position.x = 42.0;
        advance_wave(&mut field, &mut Vec::new());
        assert!(field.player.alive);
        assert_eq!(field.player.health.current, 1);
        assert_eq!(field.player.position, Player::spawn_point());
    }

    #[test]
    fn advance_leaves_a_player_without_lives_down() {
        let mut field = Battlefield::new();
        field.player.alive = false;
        field.player.health.current = 0;
        field.player.total_lives = 0;
        field.player.position.x = 42.0;
        advance_wave(&mut field, &mut Vec::new());
        assert!(!field.player.alive);
        assert_eq!(field.player.health.current, 0);
        assert_eq!(field.player.position.x, 42.0);
    }
}

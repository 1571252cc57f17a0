//! Formation controller: front-line eligibility, descent, breach detection
//! and enemy volleys.

use rand::seq::index;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use holdline_core::components::{EnemyUnit, Projectile};
use holdline_core::constants::*;
use holdline_core::events::GameEvent;

use crate::difficulty::Cadence;

/// Timers that drive the formation. Reset at every wave start.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FormationTimers {
    /// Seconds since the last descent step.
    pub move_timer: f32,
    /// Seconds since the last volley.
    pub fire_timer: f32,
    /// Seconds of grace left. No unit is eligible while this is positive.
    pub grace_remaining: f32,
}

impl FormationTimers {
    pub fn wave_start() -> Self {
        Self {
            move_timer: 0.0,
            fire_timer: 0.0,
            grace_remaining: WAVE_GRACE_PERIOD_SECS,
        }
    }

    pub fn in_grace(&self) -> bool {
        self.grace_remaining > 0.0
    }
}

/// Indices of units with no live unit directly beneath them, in collection order.
pub fn front_line(units: &[EnemyUnit]) -> Vec<usize> {
    units
        .iter()
        .enumerate()
        .filter(|(i, unit)| {
            !units.iter().enumerate().any(|(j, other)| {
                j != *i
                    && (other.position.x - unit.position.x).abs() < FORMATION_ALIGN_EPSILON
                    && (other.position.y - unit.position.y - FORMATION_ROW_PITCH).abs()
                        < FORMATION_ALIGN_EPSILON
            })
        })
        .map(|(i, _)| i)
        .collect()
}

/// Units allowed to fire this frame. Empty during the grace period.
pub fn eligible(units: &[EnemyUnit], timers: &FormationTimers) -> Vec<usize> {
    if timers.in_grace() {
        return Vec::new();
    }
    front_line(units)
}

/// Whether any of the `eligible` units has reached the loss line.
pub fn breached(units: &[EnemyUnit], eligible: &[usize]) -> bool {
    let line = ARENA_HEIGHT * LOSS_LINE_FRACTION;
    eligible.iter().any(|&i| units[i].position.y >= line)
}

/// Step every unit down once the movement period has elapsed.
pub fn advance(units: &mut [EnemyUnit], timers: &mut FormationTimers, cadence: &Cadence, dt: f32) {
    timers.move_timer += dt;
    if timers.move_timer < cadence.move_period {
        return;
    }
    timers.move_timer = 0.0;
    for unit in units.iter_mut() {
        unit.position.y += cadence.step;
    }
}

/// Fire a volley from a random subset of `eligible` once the fire period has
/// elapsed. Returns the number of projectiles spawned.
///
/// The timer only resets when a volley actually leaves, so a blocked volley
/// fires as soon as a shooter or a free slot appears.
pub fn fire(
    units: &[EnemyUnit],
    eligible: &[usize],
    projectiles: &mut Vec<Projectile>,
    timers: &mut FormationTimers,
    cadence: &Cadence,
    rng: &mut ChaCha8Rng,
    dt: f32,
) -> u32 {
    timers.fire_timer += dt;
    if timers.fire_timer < cadence.fire_period {
        return 0;
    }

    let free = MAX_ENEMY_PROJECTILES.saturating_sub(projectiles.len());
    let upper = MAX_VOLLEY_SIZE.min(eligible.len()).min(free);
    if upper == 0 {
        return 0;
    }

    let count = rng.gen_range(1..=upper);
    for pick in index::sample(rng, eligible.len(), count) {
        projectiles.push(Projectile::enemy(units[eligible[pick]].muzzle()));
    }
    timers.fire_timer = 0.0;
    count as u32
}

/// One frame of formation control. Returns true when the formation has
/// breached the loss line.
pub fn run(
    units: &mut [EnemyUnit],
    projectiles: &mut Vec<Projectile>,
    timers: &mut FormationTimers,
    cadence: &Cadence,
    rng: &mut ChaCha8Rng,
    dt: f32,
    events: &mut Vec<GameEvent>,
) -> bool {
    timers.grace_remaining = (timers.grace_remaining - dt).max(0.0);
    advance(units, timers, cadence, dt);

    let shooters = eligible(units, timers);
    if breached(units, &shooters) {
        return true;
    }

    let fired = fire(units, &shooters, projectiles, timers, cadence, rng, dt);
    if fired > 0 {
        debug!(count = fired, harder = cadence.harder, "enemy volley");
        events.push(GameEvent::EnemyVolley { count: fired });
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;

    fn column(x: f32, rows: usize) -> Vec<EnemyUnit> {
        (0..rows)
            .map(|r| EnemyUnit::new(Vec2::new(x, 50.0 + r as f32 * FORMATION_ROW_PITCH), 1))
            .collect()
    }

    fn ready_timers() -> FormationTimers {
        FormationTimers::default()
    }

    #[test]
    fn only_bottom_of_each_column_is_front_line() {
        let mut units = column(100.0, 3);
        units.extend(column(160.0, 2));
        assert_eq!(front_line(&units), vec![2, 4]);
    }

    #[test]
    fn removing_blocker_promotes_unit_above() {
        let mut units = column(100.0, 3);
        units.remove(2);
        assert_eq!(front_line(&units), vec![1]);
    }

    #[test]
    fn gap_in_column_exposes_unit_above_gap() {
        let mut units = column(100.0, 3);
        units.remove(1);
        assert_eq!(front_line(&units), vec![0, 1]);
    }

    #[test]
    fn alignment_tolerates_float_drift() {
        let mut units = column(100.0, 2);
        units[1].position.y += 0.001;
        units[0].position.x += 0.001;
        assert_eq!(front_line(&units), vec![1]);
    }

    #[test]
    fn grace_hides_every_unit() {
        let units = column(100.0, 2);
        assert!(eligible(&units, &FormationTimers::wave_start()).is_empty());
        assert_eq!(eligible(&units, &ready_timers()), vec![1]);
    }

    #[test]
    fn breach_needs_an_eligible_unit_on_the_line() {
        let line = ARENA_HEIGHT * LOSS_LINE_FRACTION;
        let mut units = column(100.0, 1);
        units[0].position.y = line - 1.0;
        assert!(!breached(&units, &[0]));
        units[0].position.y = line;
        assert!(breached(&units, &[0]));
        assert!(!breached(&units, &[]));
    }

    #[test]
    fn descent_waits_for_the_period() {
        let mut units = column(100.0, 2);
        let mut timers = ready_timers();
        let cadence = Cadence::from_harder(0.5);
        advance(&mut units, &mut timers, &cadence, 1.0);
        assert_eq!(units[0].position.y, 50.0);
        advance(&mut units, &mut timers, &cadence, 0.5);
        assert_eq!(units[0].position.y, 50.0 + FORMATION_STEP_LARGE);
        assert_eq!(timers.move_timer, 0.0);
    }

    #[test]
    fn volley_picks_distinct_shooters() {
        let mut units = Vec::new();
        for c in 0..10 {
            units.extend(column(10.0 + c as f32 * 60.0, 1));
        }
        let shooters: Vec<usize> = (0..units.len()).collect();
        let cadence = Cadence::from_harder(0.5);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..50 {
            let mut shots = Vec::new();
            let mut timers = ready_timers();
            let fired = fire(&units, &shooters, &mut shots, &mut timers, &cadence, &mut rng, 5.0);
            assert!((1..=MAX_VOLLEY_SIZE as u32).contains(&fired));
            assert_eq!(shots.len(), fired as usize);
            let mut xs: Vec<i32> = shots.iter().map(|s| s.position.x as i32).collect();
            xs.sort_unstable();
            xs.dedup();
            assert_eq!(xs.len(), shots.len());
            assert_eq!(timers.fire_timer, 0.0);
        }
    }

    #[test]
    fn volley_respects_projectile_cap() {
        let units = column(100.0, 1);
        let cadence = Cadence::from_harder(0.5);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut shots: Vec<Projectile> = (0..MAX_ENEMY_PROJECTILES)
            .map(|_| Projectile::enemy(Vec2::ZERO))
            .collect();
        let mut timers = ready_timers();
        let fired = fire(&units, &[0], &mut shots, &mut timers, &cadence, &mut rng, 5.0);
        assert_eq!(fired, 0);
        assert_eq!(shots.len(), MAX_ENEMY_PROJECTILES);
        assert!(timers.fire_timer >= cadence.fire_period);
    }

    #[test]
    fn no_shooters_means_no_volley() {
        let cadence = Cadence::from_harder(0.5);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut shots = Vec::new();
        let mut timers = ready_timers();
        assert_eq!(fire(&[], &[], &mut shots, &mut timers, &cadence, &mut rng, 5.0), 0);
        assert!(shots.is_empty());
    }
}

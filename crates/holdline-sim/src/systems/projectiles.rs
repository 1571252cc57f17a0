//! Projectile kinematics and culling.

use holdline_core::components::Projectile;
use holdline_core::constants::ARENA_HEIGHT;

/// Move every projectile by `velocity * dt`, then drop the ones that have
/// fully left the arena vertically.
pub fn run(pool: &mut Vec<Projectile>, dt: f32) {
    for projectile in pool.iter_mut() {
        projectile.position += projectile.velocity * dt;
    }
    pool.retain(in_arena);
}

fn in_arena(projectile: &Projectile) -> bool {
    let bounds = projectile.bounds();
    bounds.max().y >= 0.0 && bounds.min.y <= ARENA_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use holdline_core::constants::PROJECTILE_SPEED;

    #[test]
    fn projectiles_travel_by_faction() {
        let mut pool = vec![
            Projectile::player(Vec2::new(100.0, 300.0)),
            Projectile::enemy(Vec2::new(200.0, 300.0)),
        ];
        run(&mut pool, 0.1);
        assert_eq!(pool.len(), 2);
        assert!((pool[0].position.y - (300.0 - PROJECTILE_SPEED * 0.1)).abs() < 1e-3);
        assert!((pool[1].position.y - (300.0 + PROJECTILE_SPEED * 0.1)).abs() < 1e-3);
    }

    #[test]
    fn leaving_the_arena_culls() {
        let mut pool = vec![
            Projectile::player(Vec2::new(100.0, 5.0)),
            Projectile::enemy(Vec2::new(100.0, 595.0)),
            Projectile::player(Vec2::new(100.0, 300.0)),
        ];
        run(&mut pool, 0.1);
        assert_eq!(pool.len(), 1);
        assert!((pool[0].position.y - 240.0).abs() < 1e-3);
    }

    #[test]
    fn zero_dt_is_stationary() {
        let mut pool = vec![Projectile::enemy(Vec2::new(10.0, 10.0))];
        run(&mut pool, 0.0);
        assert_eq!(pool[0].position, Vec2::new(10.0, 10.0));
    }
}

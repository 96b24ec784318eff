//! Periodic off-screen cleanup.
//!
//! Motion already drops most strays; this sweep bounds memory against
//! anything that slips through (for example bullets stalled by a clamped
//! tick) and re-enforces the particle cap. It runs on its own accumulator,
//! a few times a minute, not every frame.

use crate::config::EngineConfig;
use crate::core::world::World;

const ENEMY_MARGIN: f32 = 100.0;
const POWERUP_MARGIN: f32 = 50.0;

/// Run the sweep when the accumulator crosses the configured interval.
pub fn run(world: &mut World, config: &EngineConfig, dt: f32) {
    world.cleanup_acc += dt;
    if world.cleanup_acc > config.cleanup_interval_ms {
        world.cleanup_acc = 0.0;
        sweep(world, config);
    }
}

/// Drop everything outside its off-screen margin.
pub fn sweep(world: &mut World, config: &EngineConfig) {
    let h = config.world_height;
    world
        .enemies
        .retain(|e| e.pos.y > -ENEMY_MARGIN && e.pos.y < h + ENEMY_MARGIN);
    world
        .obstacles
        .retain(|o| o.pos.y > -o.size && o.pos.y < h + o.size);
    world
        .powerups
        .retain(|p| p.pos.y > -POWERUP_MARGIN && p.pos.y < h + POWERUP_MARGIN);
    world
        .bullets
        .retain(|b| b.pos.y > -b.height && b.pos.y < h);
    world
        .enemy_bullets
        .retain(|b| b.pos.y > -b.height && b.pos.y < h + b.height);
    world.enforce_particle_cap(config.max_particles);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Bullet, Enemy, EnemyKind};
    use glam::Vec2;

    #[test]
    fn sweep_drops_far_offscreen_entities() {
        let cfg = EngineConfig::default();
        let mut w = World::new(&cfg);

        let mut near = Enemy::spawn(EnemyKind::Scout, 100.0, &mut w.rng);
        near.pos.y = -50.0;
        let mut far = Enemy::spawn(EnemyKind::Scout, 100.0, &mut w.rng);
        far.pos.y = -500.0;
        w.enemies.push(near);
        w.enemies.push(far);

        w.bullets.push(Bullet::normal(100.0, -100.0));

        sweep(&mut w, &cfg);

        assert_eq!(w.enemies.len(), 1);
        assert!(w.bullets.is_empty());
    }

    #[test]
    fn sweep_enforces_the_particle_cap() {
        let cfg = EngineConfig::default();
        let mut w = World::new(&cfg);
        w.spawn_burst(
            Vec2::new(100.0, 100.0),
            cfg.max_particles + 40,
            crate::entities::ParticleColor::Red,
            crate::entities::BurstSize::Medium,
        );
        sweep(&mut w, &cfg);
        assert_eq!(w.particles.len(), cfg.max_particles);
    }

    #[test]
    fn run_fires_only_past_the_interval() {
        let cfg = EngineConfig::default();
        let mut w = World::new(&cfg);
        let mut far = Enemy::spawn(EnemyKind::Scout, 100.0, &mut w.rng);
        far.pos.y = -500.0;
        w.enemies.push(far);

        run(&mut w, &cfg, 1000.0);
        assert_eq!(w.enemies.len(), 1, "interval not yet reached");
        run(&mut w, &cfg, cfg.cleanup_interval_ms);
        assert!(w.enemies.is_empty());
    }
}

//! Timer-driven probabilistic spawning.
//!
//! Each category owns an accumulator fed by elapsed simulation time; when it
//! crosses the configured threshold it resets and one spawn is attempted.
//! Rates are therefore independent of frame rate.

use crate::config::EngineConfig;
use crate::core::rng::Rng;
use crate::core::world::World;
use crate::entities::{Enemy, EnemyKind, Obstacle, ObstacleKind, Powerup, PowerupKind};

/// Number of equal columns the canvas is divided into for enemy placement.
const SPAWN_SECTIONS: u32 = 5;

/// Run all three spawn categories for this tick.
pub fn run(world: &mut World, config: &EngineConfig, dt: f32) {
    spawn_enemies(world, config, dt);
    spawn_obstacles(world, config, dt);
    spawn_powerups(world, config, dt);
}

fn spawn_enemies(world: &mut World, config: &EngineConfig, dt: f32) {
    world.enemy_spawn_acc += dt * config.enemy_spawn_rate;
    // The accumulator keeps building while the population is capped, so a
    // slot opening up is filled on the next tick.
    if world.enemy_spawn_acc > config.enemy_spawn_ms && world.enemies.len() < config.max_enemies {
        world.enemy_spawn_acc = 0.0;
        force_spawn_enemy(world, config);
    }
}

/// Spawn one enemy immediately, ignoring the timer (round start seeds the
/// field this way). Still honors the population cap.
pub fn force_spawn_enemy(world: &mut World, config: &EngineConfig) {
    if world.enemies.len() >= config.max_enemies {
        return;
    }
    let kind = EnemyKind::from_roll(world.rng.next_f32());
    let x = section_position(config.world_width, kind.size().x, &mut world.rng);
    let enemy = Enemy::spawn(kind, x, &mut world.rng);
    log::debug!("spawn enemy {:?} at x={:.0}", kind, x);
    world.enemies.push(enemy);
}

fn spawn_obstacles(world: &mut World, config: &EngineConfig, dt: f32) {
    world.obstacle_spawn_acc += dt;
    if world.obstacle_spawn_acc > config.obstacle_spawn_ms {
        world.obstacle_spawn_acc = 0.0;
        let kind = ObstacleKind::from_roll(world.rng.next_f32());
        let obstacle = Obstacle::spawn(kind, config.world_width, &mut world.rng);
        world.obstacles.push(obstacle);
    }
}

fn spawn_powerups(world: &mut World, config: &EngineConfig, dt: f32) {
    world.powerup_spawn_acc += dt;
    if world.powerup_spawn_acc > config.powerup_spawn_ms {
        world.powerup_spawn_acc = 0.0;
        let kind = PowerupKind::from_roll(world.rng.next_f32());
        let powerup = Powerup::spawn(kind, config.world_width, &mut world.rng);
        world.powerups.push(powerup);
    }
}

/// Pick one of the equal-width canvas sections uniformly, then a uniform
/// offset inside it, leaving room for the entity's own width. Spreads
/// spawns across the full width instead of clustering them.
fn section_position(world_width: f32, entity_width: f32, rng: &mut Rng) -> f32 {
    let section_width = world_width / SPAWN_SECTIONS as f32;
    let section = rng.next_int(SPAWN_SECTIONS) as f32;
    section * section_width + rng.next_f32() * (section_width - entity_width).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> (World, EngineConfig) {
        let cfg = EngineConfig::default();
        (World::new(&cfg), cfg)
    }

    #[test]
    fn enemies_spawn_once_threshold_crossed() {
        let (mut w, cfg) = world();
        spawn_enemies(&mut w, &cfg, 700.0);
        assert!(w.enemies.is_empty());
        spawn_enemies(&mut w, &cfg, 700.0);
        assert_eq!(w.enemies.len(), 1);
        assert_eq!(w.enemy_spawn_acc, 0.0);
    }

    #[test]
    fn enemy_population_is_capped() {
        let (mut w, cfg) = world();
        for _ in 0..50 {
            force_spawn_enemy(&mut w, &cfg);
        }
        assert_eq!(w.enemies.len(), cfg.max_enemies);
    }

    #[test]
    fn capped_spawn_keeps_the_accumulator() {
        let (mut w, cfg) = world();
        for _ in 0..cfg.max_enemies {
            force_spawn_enemy(&mut w, &cfg);
        }
        spawn_enemies(&mut w, &cfg, 2000.0);
        assert!(w.enemy_spawn_acc > 0.0);
        // A slot opens: the pending accumulator fires immediately.
        w.enemies.pop();
        spawn_enemies(&mut w, &cfg, 16.0);
        assert_eq!(w.enemies.len(), cfg.max_enemies);
    }

    #[test]
    fn section_positions_stay_in_bounds() {
        let mut rng = Rng::new(42);
        for _ in 0..500 {
            let x = section_position(800.0, 75.0, &mut rng);
            assert!(x >= 0.0);
            assert!(x + 75.0 <= 800.0 + f32::EPSILON * 800.0, "x={}", x);
        }
    }

    #[test]
    fn section_positions_spread_across_the_canvas() {
        let mut rng = Rng::new(42);
        let mut hit = [false; 5];
        for _ in 0..200 {
            let x = section_position(800.0, 45.0, &mut rng);
            hit[((x / 160.0) as usize).min(4)] = true;
        }
        assert!(hit.iter().all(|&h| h), "sections hit: {:?}", hit);
    }

    #[test]
    fn obstacles_and_powerups_spawn_on_their_timers() {
        let (mut w, cfg) = world();
        spawn_obstacles(&mut w, &cfg, cfg.obstacle_spawn_ms + 1.0);
        assert_eq!(w.obstacles.len(), 1);
        spawn_powerups(&mut w, &cfg, cfg.powerup_spawn_ms + 1.0);
        assert_eq!(w.powerups.len(), 1);
    }
}

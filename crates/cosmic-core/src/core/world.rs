//! World state — every entity collection, exclusively owned by the
//! simulation during a tick. The renderer and the driver only read it
//! (the driver additionally drains the event queue between ticks).

use glam::Vec2;

use crate::api::events::CombatEvent;
use crate::config::EngineConfig;
use crate::core::rng::Rng;
use crate::entities::{
    Bullet, BurstSize, Enemy, EnemyBullet, Obstacle, Particle, ParticleColor, Player, Powerup,
    Star,
};

/// The complete mutable state of one round.
/// Collections are insertion-ordered; combat resolution relies on that for
/// its first-encountered-wins tie-break.
pub struct World {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub enemies: Vec<Enemy>,
    pub obstacles: Vec<Obstacle>,
    pub powerups: Vec<Powerup>,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    /// Combat events accumulated this tick; drained by the driver.
    pub events: Vec<CombatEvent>,
    pub rng: Rng,
    /// Simulation clock (sum of scaled tick deltas since round start).
    pub elapsed_ms: f32,
    pub double_shot: bool,
    pub double_shot_ms: f32,
    pub enemy_spawn_acc: f32,
    pub obstacle_spawn_acc: f32,
    pub powerup_spawn_acc: f32,
    pub cleanup_acc: f32,
}

impl World {
    pub fn new(config: &EngineConfig) -> Self {
        let mut rng = Rng::new(config.rng_seed);
        let stars = (0..config.star_count)
            .map(|_| Star::scatter(config.world_width, config.world_height, &mut rng))
            .collect();
        Self {
            player: Player::new(config),
            bullets: Vec::with_capacity(32),
            enemy_bullets: Vec::with_capacity(32),
            enemies: Vec::with_capacity(config.max_enemies),
            obstacles: Vec::with_capacity(16),
            powerups: Vec::with_capacity(4),
            particles: Vec::with_capacity(config.max_particles),
            stars,
            events: Vec::with_capacity(config.max_events),
            rng,
            elapsed_ms: 0.0,
            double_shot: false,
            double_shot_ms: 0.0,
            enemy_spawn_acc: 0.0,
            obstacle_spawn_acc: 0.0,
            powerup_spawn_acc: 0.0,
            cleanup_acc: 0.0,
        }
    }

    /// Restore round-start state: full-health player, empty transient
    /// collections, zeroed accumulators, fresh starfield. Reseeds the RNG
    /// so a reset round replays identically under the same inputs.
    pub fn reset(&mut self, config: &EngineConfig) {
        *self = Self::new(config);
    }

    /// Queue a combat event for the driver.
    pub fn emit(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    /// Hand the tick's events to the caller, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    /// Scatter a burst of particles around a point.
    pub fn spawn_burst(&mut self, center: Vec2, count: usize, color: ParticleColor, burst: BurstSize) {
        for _ in 0..count {
            let p = Particle::scatter(center, color, burst, &mut self.rng);
            self.particles.push(p);
        }
    }

    /// Drop the oldest particles beyond the cap.
    pub fn enforce_particle_cap(&mut self, max_particles: usize) {
        if self.particles.len() > max_particles {
            let excess = self.particles.len() - max_particles;
            self.particles.drain(..excess);
        }
    }
}

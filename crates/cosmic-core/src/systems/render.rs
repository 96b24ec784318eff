//! Build the frame's render buffer from the world.
//!
//! Strictly read-only over gameplay state: every animation phase (twinkle,
//! pulse, rotation, thrust) was advanced by the simulation step, so calling
//! this twice for the same tick produces identical buffers. Paint order:
//! stars, player, bullets, enemies, obstacles, powerups, enemy bullets,
//! then the particle layer. Background nebula gradients and the pause
//! overlay belong to the canvas layer.

use crate::core::world::World;
use crate::renderer::instance::{ParticleInstance, RenderBuffer, RenderInstance};
use crate::renderer::sprite::SpriteKey;

/// Amplitude of the thrust flare wobble, in canvas units.
const THRUST_AMPLITUDE: f32 = 3.0;
/// Invulnerability flicker rate against the simulation clock.
const FLICKER_RATE: f32 = 0.02;

pub fn build_render_buffer(world: &World, buffer: &mut RenderBuffer) {
    buffer.clear();

    for star in &world.stars {
        buffer.push(RenderInstance {
            x: star.pos.x,
            y: star.pos.y,
            rotation: 0.0,
            width: star.size,
            height: star.size,
            sprite: SpriteKey::StarDot.as_f32(),
            alpha: star.opacity.clamp(0.0, 1.0),
            aux: 0.0,
        });
    }

    let player = &world.player;
    let alpha = if player.invulnerable {
        (world.elapsed_ms * FLICKER_RATE).sin() * 0.5 + 0.5
    } else {
        1.0
    };
    buffer.push(RenderInstance {
        x: player.pos.x,
        y: player.pos.y,
        rotation: 0.0,
        width: player.width,
        height: player.height,
        sprite: SpriteKey::PlayerShip.as_f32(),
        alpha,
        aux: player.thrust_phase.sin() * THRUST_AMPLITUDE,
    });

    for bullet in &world.bullets {
        buffer.push(RenderInstance {
            x: bullet.pos.x,
            y: bullet.pos.y,
            rotation: 0.0,
            width: bullet.width,
            height: bullet.height,
            sprite: bullet.kind.sprite().as_f32(),
            alpha: 1.0,
            aux: 0.0,
        });
    }

    for enemy in &world.enemies {
        let size = enemy.kind.size();
        buffer.push(RenderInstance {
            x: enemy.pos.x,
            y: enemy.pos.y,
            rotation: 0.0,
            width: size.x,
            height: size.y,
            sprite: enemy.kind.sprite().as_f32(),
            alpha: 1.0,
            aux: 0.0,
        });
    }

    for obstacle in &world.obstacles {
        buffer.push(RenderInstance {
            x: obstacle.pos.x,
            y: obstacle.pos.y,
            rotation: obstacle.rotation,
            width: obstacle.size,
            height: obstacle.size,
            sprite: obstacle.kind.sprite().as_f32(),
            alpha: 1.0,
            aux: 0.0,
        });
    }

    for powerup in &world.powerups {
        buffer.push(RenderInstance {
            x: powerup.pos.x,
            y: powerup.pos.y,
            rotation: powerup.rotation,
            width: powerup.size,
            height: powerup.size,
            sprite: powerup.kind.sprite().as_f32(),
            alpha: 1.0,
            aux: 1.0 + powerup.pulse_phase.sin() * 0.1,
        });
    }

    for bullet in &world.enemy_bullets {
        buffer.push(RenderInstance {
            x: bullet.pos.x,
            y: bullet.pos.y,
            rotation: 0.0,
            width: bullet.width,
            height: bullet.height,
            sprite: SpriteKey::EnemyBolt.as_f32(),
            alpha: 1.0,
            aux: 0.0,
        });
    }

    for particle in &world.particles {
        buffer.push_particle(ParticleInstance::new(
            particle.pos.x,
            particle.pos.y,
            particle.size,
            particle.alpha(),
            particle.color.as_f32(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::entities::{Bullet, Enemy, EnemyKind};
    use glam::Vec2;

    #[test]
    fn stars_paint_first_player_next() {
        let cfg = EngineConfig::default();
        let w = World::new(&cfg);
        let mut buf = RenderBuffer::with_capacity(cfg.max_instances, cfg.max_particles);
        build_render_buffer(&w, &mut buf);

        assert_eq!(buf.instance_count() as usize, cfg.star_count + 1);
        assert_eq!(buf.instances[0].sprite, SpriteKey::StarDot.as_f32());
        assert_eq!(
            buf.instances[cfg.star_count].sprite,
            SpriteKey::PlayerShip.as_f32()
        );
    }

    #[test]
    fn invulnerable_player_flickers() {
        let cfg = EngineConfig::default();
        let mut w = World::new(&cfg);
        w.player.invulnerable = true;
        // Pick a clock where the flicker sine is clearly below full.
        w.elapsed_ms = std::f32::consts::PI * 75.0;
        let mut buf = RenderBuffer::default();
        build_render_buffer(&w, &mut buf);
        let player = buf.instances[cfg.star_count];
        assert!(player.alpha < 1.0);
    }

    #[test]
    fn building_twice_is_idempotent() {
        let cfg = EngineConfig::default();
        let mut w = World::new(&cfg);
        w.bullets.push(Bullet::normal(100.0, 200.0));
        let mut e = Enemy::spawn(EnemyKind::Fighter, 300.0, &mut w.rng);
        e.pos = Vec2::new(300.0, 150.0);
        w.enemies.push(e);
        w.spawn_burst(
            Vec2::new(50.0, 50.0),
            4,
            crate::entities::ParticleColor::Amber,
            crate::entities::BurstSize::Small,
        );

        let mut a = RenderBuffer::default();
        let mut b = RenderBuffer::default();
        build_render_buffer(&w, &mut a);
        build_render_buffer(&w, &mut b);

        assert_eq!(a.instance_count(), b.instance_count());
        assert_eq!(a.particle_count(), b.particle_count());
        for (x, y) in a.instances.iter().zip(b.instances.iter()) {
            assert_eq!(bytemuck::bytes_of(x), bytemuck::bytes_of(y));
        }
    }

    #[test]
    fn particles_land_in_their_own_layer() {
        let cfg = EngineConfig::default();
        let mut w = World::new(&cfg);
        w.spawn_burst(
            Vec2::new(10.0, 10.0),
            6,
            crate::entities::ParticleColor::Green,
            crate::entities::BurstSize::Medium,
        );
        let mut buf = RenderBuffer::default();
        build_render_buffer(&w, &mut buf);
        assert_eq!(buf.particle_count(), 6);
        assert!(buf.particles.iter().all(|p| p.alpha > 0.0));
    }
}

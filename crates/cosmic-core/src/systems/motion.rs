//! Per-tick motion integration and timer countdowns.
//!
//! Each collection has its own velocity law: `position += speed × dt ×
//! factor`. The factors are the tuned per-family normalizers; they are the
//! reason bullets outrun enemies at equal nominal speeds.

use glam::Vec2;

use crate::api::events::CombatEvent;
use crate::config::EngineConfig;
use crate::core::world::World;
use crate::entities::{Bullet, BurstSize, EnemyBullet, ParticleColor};
use crate::input::InputSnapshot;

const PLAYER_MOVE_FACTOR: f32 = 0.08;
const BULLET_FACTOR: f32 = 0.5;
const ENEMY_BULLET_FACTOR: f32 = 0.2;
const ENEMY_FACTOR: f32 = 0.15;
const OBSTACLE_FACTOR: f32 = 0.12;
const OBSTACLE_SPIN_FACTOR: f32 = 0.1;
const POWERUP_FACTOR: f32 = 0.15;
const POWERUP_SPIN_RATE: f32 = 0.005;
const POWERUP_PULSE_RATE: f32 = 0.01;
const PARTICLE_FACTOR: f32 = 0.08;
const STAR_FACTOR: f32 = 0.05;
const TWINKLE_RATE: f32 = 0.006;
const THRUST_RATE: f32 = 0.02;

/// Enemies only open fire inside this vertical band: fully on screen, but
/// not so low that the shot could never be dodged.
const FIRE_BAND_TOP: f32 = 50.0;
const FIRE_BAND_BOTTOM_MARGIN: f32 = 100.0;

/// Move the player from input intent, run the invulnerability countdown,
/// and auto-fire while the fire control is held.
pub fn update_player(world: &mut World, config: &EngineConfig, input: &InputSnapshot, dt: f32) {
    if world.player.invulnerable {
        world.player.invulnerability_ms -= dt;
        if world.player.invulnerability_ms <= 0.0 {
            world.player.invulnerable = false;
            world.player.invulnerability_ms = 0.0;
        }
    }

    let move_speed = world.player.speed * dt * PLAYER_MOVE_FACTOR;
    world.player.pos.x += input.horizontal() * move_speed;
    world.player.pos.y += input.vertical() * move_speed;
    world.player.pos.x = world
        .player
        .pos
        .x
        .clamp(0.0, config.world_width - world.player.width);
    world.player.pos.y = world
        .player
        .pos
        .y
        .clamp(0.0, config.world_height - world.player.height);

    world.player.thrust_phase += dt * THRUST_RATE;

    if input.fire {
        try_fire(world);
    }
}

/// Fire if the cooldown has elapsed: one round, or a pair under the
/// double-shot powerup, plus a muzzle-flash burst.
pub fn try_fire(world: &mut World) {
    let now = world.elapsed_ms;
    if !world.player.can_shoot(now) {
        return;
    }

    let center_x = world.player.center_x();
    let nose_y = world.player.pos.y;
    let rounds = if world.double_shot {
        let [left, right] = Bullet::double_pair(center_x, nose_y);
        world.bullets.push(left);
        world.bullets.push(right);
        2
    } else {
        world.bullets.push(Bullet::normal(center_x, nose_y));
        1
    };
    world.player.last_shot_ms = now;

    world.spawn_burst(
        Vec2::new(center_x, nose_y),
        3,
        ParticleColor::Cyan,
        BurstSize::Small,
    );
    world.emit(CombatEvent::ShotFired { rounds });
}

/// Advance both bullet families and drop the ones that left the screen.
pub fn advance_projectiles(world: &mut World, config: &EngineConfig, dt: f32) {
    world.bullets.retain_mut(|b| {
        b.pos.y -= b.speed * dt * BULLET_FACTOR;
        b.pos.y > -b.height
    });
    world.enemy_bullets.retain_mut(|b| {
        b.pos.y += b.speed * dt * ENEMY_BULLET_FACTOR;
        b.pos.y < config.world_height + b.height
    });
}

/// Descend enemies, run their shoot timers, and fire from the ones whose
/// timer expired inside the firing band. Enemies that drift past the
/// bottom edge are dropped unscored.
pub fn advance_enemies(world: &mut World, config: &EngineConfig, dt: f32) {
    let World {
        ref mut enemies,
        ref mut enemy_bullets,
        ref mut rng,
        ..
    } = *world;

    for enemy in enemies.iter_mut() {
        enemy.pos.y += enemy.speed * dt * ENEMY_FACTOR;

        enemy.shoot_timer_ms -= dt;
        let in_band = enemy.pos.y > FIRE_BAND_TOP
            && enemy.pos.y < config.world_height - FIRE_BAND_BOTTOM_MARGIN;
        if enemy.shoot_timer_ms <= 0.0 && in_band {
            enemy_bullets.push(EnemyBullet::from_muzzle(
                enemy.center().x,
                enemy.pos.y + enemy.height(),
            ));
            let (min, max) = enemy.kind.shoot_interval_ms();
            enemy.shoot_timer_ms = rng.range(min, max);
        }
    }

    enemies.retain(|e| e.pos.y < config.world_height + e.height());
}

/// Descend and tumble the asteroids.
pub fn advance_obstacles(world: &mut World, config: &EngineConfig, dt: f32) {
    world.obstacles.retain_mut(|o| {
        o.pos.y += o.speed * dt * OBSTACLE_FACTOR;
        o.rotation += o.rotation_speed * dt * OBSTACLE_SPIN_FACTOR;
        o.pos.y < config.world_height + o.size
    });
}

/// Drift the pickups; their spin and pulse are cosmetic phases owned here,
/// never by the renderer.
pub fn advance_powerups(world: &mut World, config: &EngineConfig, dt: f32) {
    world.powerups.retain_mut(|p| {
        p.pos.y += p.speed * dt * POWERUP_FACTOR;
        p.rotation += dt * POWERUP_SPIN_RATE;
        p.pulse_phase += dt * POWERUP_PULSE_RATE;
        p.pos.y < config.world_height + p.size
    });
}

/// Drift and fade the particles; enforce the population cap.
pub fn advance_particles(world: &mut World, config: &EngineConfig, dt: f32) {
    world.particles.retain_mut(|p| {
        p.pos += p.vel * (dt * PARTICLE_FACTOR);
        p.life_ms -= dt;
        p.life_ms > 0.0
    });
    world.enforce_particle_cap(config.max_particles);
}

/// Scroll the starfield; stars leaving the bottom re-enter at the top.
pub fn advance_stars(world: &mut World, config: &EngineConfig, dt: f32) {
    let World {
        ref mut stars,
        ref mut rng,
        ..
    } = *world;
    for star in stars.iter_mut() {
        star.pos.y += star.speed * dt * STAR_FACTOR;
        star.twinkle += dt * TWINKLE_RATE;
        star.opacity = 0.5 + star.twinkle.sin() * 0.5;
        if star.pos.y > config.world_height {
            star.wrap_to_top(config.world_width, rng);
        }
    }
}

/// Run the double-shot countdown.
pub fn update_powerup_timers(world: &mut World, dt: f32) {
    if world.double_shot {
        world.double_shot_ms -= dt;
        if world.double_shot_ms <= 0.0 {
            world.double_shot = false;
            world.double_shot_ms = 0.0;
        }
    }
}

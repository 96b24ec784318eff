//! Collision detection and combat resolution.
//!
//! Bullet-vs-target tests enlarge the target by the configured forgiveness
//! padding; player-vs-anything uses exact boxes. A bullet resolves at most
//! one hit per tick, first-encountered target wins (collections are
//! insertion-ordered, so the tie-break is stable).

use glam::Vec2;

use crate::api::events::CombatEvent;
use crate::config::EngineConfig;
use crate::core::world::World;
use crate::entities::{BurstSize, ParticleColor, PowerupKind};

/// Axis-aligned overlap test. `padding` symmetrically enlarges box `b`.
pub fn overlaps(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2, padding: f32) -> bool {
    a_pos.x < b_pos.x + b_size.x + padding
        && a_pos.x + a_size.x > b_pos.x - padding
        && a_pos.y < b_pos.y + b_size.y + padding
        && a_pos.y + a_size.y > b_pos.y - padding
}

/// Resolve every collision family for this tick, in the order the outcome
/// depends on: bullets first (so a bullet spent on an enemy cannot also
/// clear a rock), then player damage sources, then pickups.
pub fn resolve(world: &mut World, config: &EngineConfig, combo: f32) {
    bullets_vs_enemies(world, config, combo);
    bullets_vs_obstacles(world, config, combo);
    player_vs_enemies(world, config);
    player_vs_obstacles(world, config);
    player_vs_enemy_bullets(world, config);
    player_vs_powerups(world, config, combo);
}

/// Base points scaled by the caller-supplied combo multiplier. The combo's
/// own update policy lives with the driver, not here.
fn scaled(base: u32, combo: f32) -> u32 {
    (base as f32 * combo).round() as u32
}

fn bullets_vs_enemies(world: &mut World, config: &EngineConfig, combo: f32) {
    let mut bi = 0;
    'bullets: while bi < world.bullets.len() {
        let b_pos = world.bullets[bi].pos;
        let b_size = Vec2::new(world.bullets[bi].width, world.bullets[bi].height);
        let damage = world.bullets[bi].damage;

        for ei in 0..world.enemies.len() {
            let e_pos = world.enemies[ei].pos;
            let e_size = world.enemies[ei].kind.size();
            if !overlaps(b_pos, b_size, e_pos, e_size, config.hit_padding) {
                continue;
            }

            // The bullet is spent on its first match.
            world.bullets.remove(bi);
            world.emit(CombatEvent::BulletHit);

            let center = world.enemies[ei].center();
            world.enemies[ei].health -= damage;
            world.spawn_burst(center, 6, ParticleColor::Amber, BurstSize::Medium);

            if world.enemies[ei].health <= 0 {
                let kind = world.enemies[ei].kind;
                world.enemies.remove(ei);
                world.spawn_burst(center, 12, ParticleColor::Red, BurstSize::Large);
                world.emit(CombatEvent::EnemyKilled {
                    kind,
                    points: scaled(kind.score(), combo),
                });
            }
            continue 'bullets;
        }
        bi += 1;
    }
}

fn bullets_vs_obstacles(world: &mut World, config: &EngineConfig, combo: f32) {
    let mut bi = 0;
    'bullets: while bi < world.bullets.len() {
        let b_pos = world.bullets[bi].pos;
        let b_size = Vec2::new(world.bullets[bi].width, world.bullets[bi].height);
        let damage = world.bullets[bi].damage;

        for oi in 0..world.obstacles.len() {
            let o_pos = world.obstacles[oi].pos;
            let o_size = Vec2::splat(world.obstacles[oi].size);
            if !overlaps(b_pos, b_size, o_pos, o_size, config.hit_padding) {
                continue;
            }

            world.bullets.remove(bi);
            world.emit(CombatEvent::BulletHit);

            let center = world.obstacles[oi].center();
            world.obstacles[oi].health -= damage;
            world.spawn_burst(center, 4, ParticleColor::Gray, BurstSize::Small);

            if world.obstacles[oi].health <= 0 {
                let kind = world.obstacles[oi].kind;
                world.obstacles.remove(oi);
                world.spawn_burst(center, 8, ParticleColor::DarkGray, BurstSize::Medium);
                world.emit(CombatEvent::ObstacleDestroyed {
                    kind,
                    points: scaled(kind.score(), combo),
                });
            }
            continue 'bullets;
        }
        bi += 1;
    }
}

fn player_vs_enemies(world: &mut World, config: &EngineConfig) {
    if world.player.invulnerable {
        return;
    }
    let p_pos = world.player.pos;
    let p_size = Vec2::new(world.player.width, world.player.height);

    let mut ei = 0;
    while ei < world.enemies.len() {
        let e_pos = world.enemies[ei].pos;
        let e_size = world.enemies[ei].kind.size();
        if overlaps(p_pos, p_size, e_pos, e_size, 0.0) {
            // The rammed enemy is destroyed either way; only the first
            // contact this tick actually damages (the rest land on the
            // fresh invulnerability window).
            world.enemies.remove(ei);
            damage_player(world, config);
        } else {
            ei += 1;
        }
    }
}

fn player_vs_obstacles(world: &mut World, config: &EngineConfig) {
    if world.player.invulnerable {
        return;
    }
    let p_pos = world.player.pos;
    let p_size = Vec2::new(world.player.width, world.player.height);

    for oi in 0..world.obstacles.len() {
        let o_pos = world.obstacles[oi].pos;
        let o_size = Vec2::splat(world.obstacles[oi].size);
        if overlaps(p_pos, p_size, o_pos, o_size, 0.0) {
            // Rocks persist; only the player takes the hit.
            damage_player(world, config);
        }
    }
}

fn player_vs_enemy_bullets(world: &mut World, config: &EngineConfig) {
    if world.player.invulnerable {
        return;
    }
    let p_pos = world.player.pos;
    let p_size = Vec2::new(world.player.width, world.player.height);

    let mut bi = 0;
    while bi < world.enemy_bullets.len() {
        let b_pos = world.enemy_bullets[bi].pos;
        let b_size = Vec2::new(world.enemy_bullets[bi].width, world.enemy_bullets[bi].height);
        if overlaps(p_pos, p_size, b_pos, b_size, 0.0) {
            world.enemy_bullets.remove(bi);
            damage_player(world, config);
        } else {
            bi += 1;
        }
    }
}

fn player_vs_powerups(world: &mut World, config: &EngineConfig, combo: f32) {
    let p_pos = world.player.pos;
    let p_size = Vec2::new(world.player.width, world.player.height);

    let mut pi = 0;
    while pi < world.powerups.len() {
        let u_pos = world.powerups[pi].pos;
        let u_size = Vec2::splat(world.powerups[pi].size);
        if !overlaps(p_pos, p_size, u_pos, u_size, 0.0) {
            pi += 1;
            continue;
        }

        let powerup = world.powerups.remove(pi);
        world.spawn_burst(powerup.center(), 8, ParticleColor::Green, BurstSize::Medium);
        world.emit(CombatEvent::PowerupCollected {
            kind: powerup.kind,
            points: scaled(powerup.kind.score(), combo),
        });

        match powerup.kind {
            PowerupKind::Star => {
                world.double_shot = true;
                // Refresh, never stack.
                world.double_shot_ms = config.double_shot_ms;
            }
            PowerupKind::Heart => {
                // Points were already awarded even at full health.
                world.player.heal();
            }
        }
    }
}

/// Apply one point of damage with the invulnerability window. No-op while
/// invulnerable or already dead, so a single damaging event decrements
/// health exactly once.
fn damage_player(world: &mut World, config: &EngineConfig) {
    if world.player.invulnerable || world.player.health <= 0 {
        return;
    }
    world.player.health -= 1;
    world.player.invulnerable = true;
    world.player.invulnerability_ms = config.invulnerability_ms;

    let center = world.player.center();
    world.spawn_burst(center, 15, ParticleColor::Red, BurstSize::Large);
    world.emit(CombatEvent::PlayerDamaged {
        health: world.player.health,
    });
    if world.player.health == 0 {
        world.emit(CombatEvent::GameOver);
    }
}

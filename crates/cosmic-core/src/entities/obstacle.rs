use glam::Vec2;

use crate::core::rng::Rng;
use crate::renderer::sprite::SpriteKey;

/// Asteroid size classes. Larger rocks are slower, tumble less, and soak
/// more hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Small,
    Medium,
    Large,
}

impl ObstacleKind {
    /// Cumulative spawn bands: 60% Small, 25% Medium, 15% Large.
    pub fn from_roll(roll: f32) -> Self {
        if roll < 0.6 {
            ObstacleKind::Small
        } else if roll < 0.85 {
            ObstacleKind::Medium
        } else {
            ObstacleKind::Large
        }
    }

    /// Square-bound side length range [min, max).
    pub fn size_range(self) -> (f32, f32) {
        match self {
            ObstacleKind::Small => (35.0, 60.0),
            ObstacleKind::Medium => (50.0, 70.0),
            ObstacleKind::Large => (70.0, 100.0),
        }
    }

    /// Descent speed range [min, max).
    pub fn speed_range(self) -> (f32, f32) {
        match self {
            ObstacleKind::Small => (3.0, 5.0),
            ObstacleKind::Medium => (2.0, 3.5),
            ObstacleKind::Large => (1.0, 2.0),
        }
    }

    pub fn health(self) -> i32 {
        match self {
            ObstacleKind::Small => 2,
            ObstacleKind::Medium => 3,
            ObstacleKind::Large => 5,
        }
    }

    /// Tumble rate magnitude; actual rate is uniform in ±half of this.
    pub fn rotation_spread(self) -> f32 {
        match self {
            ObstacleKind::Small => 0.08,
            ObstacleKind::Medium => 0.06,
            ObstacleKind::Large => 0.04,
        }
    }

    /// Base score for destroying the rock, before the combo multiplier.
    pub fn score(self) -> u32 {
        5
    }

    pub fn sprite(self) -> SpriteKey {
        match self {
            ObstacleKind::Small => SpriteKey::AsteroidSmall,
            ObstacleKind::Medium => SpriteKey::AsteroidMedium,
            ObstacleKind::Large => SpriteKey::AsteroidLarge,
        }
    }
}

/// A tumbling asteroid. Square hit bound of side `size`; the rotation is
/// purely cosmetic and advanced by the simulation, never by the renderer.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub health: i32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// Roll a fresh rock of the given kind just above the top edge,
    /// anywhere across the world width.
    pub fn spawn(kind: ObstacleKind, world_width: f32, rng: &mut Rng) -> Self {
        let (size_min, size_max) = kind.size_range();
        let size = rng.range(size_min, size_max);
        let (smin, smax) = kind.speed_range();
        Self {
            pos: Vec2::new(rng.range(0.0, world_width - size), -size),
            size,
            speed: rng.range(smin, smax),
            rotation: 0.0,
            rotation_speed: (rng.next_f32() - 0.5) * kind.rotation_spread(),
            health: kind.health(),
            kind,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

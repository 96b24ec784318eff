use glam::Vec2;

use crate::core::rng::Rng;
use crate::renderer::sprite::SpriteKey;

/// The three enemy classes. Each row of the table trades speed for hull:
/// scouts are fast and fragile, destroyers slow and tough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Scout,
    Fighter,
    Destroyer,
}

impl EnemyKind {
    /// Map a uniform roll in [0, 1) onto the cumulative spawn bands:
    /// 70% Scout, 20% Fighter, 10% Destroyer.
    pub fn from_roll(roll: f32) -> Self {
        if roll < 0.7 {
            EnemyKind::Scout
        } else if roll < 0.9 {
            EnemyKind::Fighter
        } else {
            EnemyKind::Destroyer
        }
    }

    /// Bounding box (width, height).
    pub fn size(self) -> Vec2 {
        match self {
            EnemyKind::Scout => Vec2::new(45.0, 35.0),
            EnemyKind::Fighter => Vec2::new(55.0, 45.0),
            EnemyKind::Destroyer => Vec2::new(75.0, 60.0),
        }
    }

    /// Descent speed range [min, max).
    pub fn speed_range(self) -> (f32, f32) {
        match self {
            EnemyKind::Scout => (2.0, 3.0),
            EnemyKind::Fighter => (1.5, 2.5),
            EnemyKind::Destroyer => (0.8, 1.5),
        }
    }

    pub fn health(self) -> i32 {
        match self {
            EnemyKind::Scout => 1,
            EnemyKind::Fighter => 2,
            EnemyKind::Destroyer => 3,
        }
    }

    /// Interval range [min, max) between shots, in ms.
    pub fn shoot_interval_ms(self) -> (f32, f32) {
        match self {
            EnemyKind::Scout => (2000.0, 4000.0),
            EnemyKind::Fighter => (2500.0, 4500.0),
            EnemyKind::Destroyer => (3000.0, 5000.0),
        }
    }

    /// Base score for a kill, before the combo multiplier.
    pub fn score(self) -> u32 {
        10
    }

    /// Spawn height above the top edge.
    pub fn spawn_offset(self) -> f32 {
        match self {
            EnemyKind::Scout => 50.0,
            EnemyKind::Fighter => 60.0,
            EnemyKind::Destroyer => 80.0,
        }
    }

    pub fn sprite(self) -> SpriteKey {
        match self {
            EnemyKind::Scout => SpriteKey::EnemyScout,
            EnemyKind::Fighter => SpriteKey::EnemyFighter,
            EnemyKind::Destroyer => SpriteKey::EnemyDestroyer,
        }
    }
}

/// A descending enemy ship.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub kind: EnemyKind,
    pub speed: f32,
    pub health: i32,
    /// Counts down to the next shot; only fires inside the firing band.
    pub shoot_timer_ms: f32,
}

impl Enemy {
    /// Roll a fresh enemy of the given kind at the given x, just above the
    /// top edge, with randomized speed and first-shot delay.
    pub fn spawn(kind: EnemyKind, x: f32, rng: &mut Rng) -> Self {
        let (smin, smax) = kind.speed_range();
        let (imin, imax) = kind.shoot_interval_ms();
        Self {
            pos: Vec2::new(x, -kind.spawn_offset()),
            kind,
            speed: rng.range(smin, smax),
            health: kind.health(),
            shoot_timer_ms: rng.range(imin, imax),
        }
    }

    pub fn width(&self) -> f32 {
        self.kind.size().x
    }

    pub fn height(&self) -> f32 {
        self.kind.size().y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.kind.size() / 2.0
    }
}

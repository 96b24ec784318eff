use glam::Vec2;

use crate::core::rng::Rng;
use crate::renderer::sprite::SpriteKey;

/// Pickup flavors: the star grants timed double-shot, the heart heals one
/// point of hull.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerupKind {
    Star,
    Heart,
}

impl PowerupKind {
    /// Cumulative spawn bands: 60% Star, 40% Heart.
    pub fn from_roll(roll: f32) -> Self {
        if roll < 0.6 {
            PowerupKind::Star
        } else {
            PowerupKind::Heart
        }
    }

    /// Square bound side length.
    pub fn size(self) -> f32 {
        match self {
            PowerupKind::Star => 25.0,
            PowerupKind::Heart => 20.0,
        }
    }

    /// Base score for picking the item up, before the combo multiplier.
    pub fn score(self) -> u32 {
        10
    }

    pub fn sprite(self) -> SpriteKey {
        match self {
            PowerupKind::Star => SpriteKey::PowerStar,
            PowerupKind::Heart => SpriteKey::PowerHeart,
        }
    }
}

/// A drifting pickup. Rotation and pulse are cosmetic phases advanced by
/// the simulation step.
#[derive(Debug, Clone)]
pub struct Powerup {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub rotation: f32,
    pub pulse_phase: f32,
    pub kind: PowerupKind,
}

impl Powerup {
    pub fn spawn(kind: PowerupKind, world_width: f32, rng: &mut Rng) -> Self {
        let size = kind.size();
        Self {
            pos: Vec2::new(rng.range(0.0, world_width - size), -size),
            size,
            speed: 1.5,
            rotation: 0.0,
            pulse_phase: 0.0,
            kind,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

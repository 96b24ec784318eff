use glam::Vec2;

use crate::core::rng::Rng;

/// Particle tints the canvas layer resolves to concrete RGB. One tint per
/// combat effect keeps the wire format to a single float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ParticleColor {
    /// Muzzle flash.
    Cyan = 0,
    /// Bullet impact on an enemy.
    Amber = 1,
    /// Explosions and player damage.
    Red = 2,
    /// Bullet impact on a rock.
    Gray = 3,
    /// Rock destruction debris.
    DarkGray = 4,
    /// Powerup pickup sparkle.
    Green = 5,
}

impl ParticleColor {
    pub fn as_f32(self) -> f32 {
        self as u8 as f32
    }

    /// Reference RGB for hosts that want to resolve the tint natively.
    pub fn rgb(self) -> [f32; 3] {
        match self {
            ParticleColor::Cyan => [0.0, 0.83, 1.0],
            ParticleColor::Amber => [1.0, 0.67, 0.0],
            ParticleColor::Red => [1.0, 0.27, 0.27],
            ParticleColor::Gray => [0.6, 0.6, 0.6],
            ParticleColor::DarkGray => [0.4, 0.4, 0.4],
            ParticleColor::Green => [0.0, 1.0, 0.53],
        }
    }
}

/// Burst magnitude scales size and scatter speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstSize {
    Small,
    Medium,
    Large,
}

impl BurstSize {
    fn size_mult(self) -> f32 {
        match self {
            BurstSize::Small => 0.5,
            BurstSize::Medium => 1.0,
            BurstSize::Large => 1.5,
        }
    }

    fn speed_mult(self) -> f32 {
        match self {
            BurstSize::Small => 0.7,
            BurstSize::Medium => 1.0,
            BurstSize::Large => 1.3,
        }
    }
}

/// A short-lived square of colored light. Fades linearly with remaining
/// life and is dropped at zero.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life_ms: f32,
    pub max_life_ms: f32,
    pub size: f32,
    pub color: ParticleColor,
}

impl Particle {
    /// One particle of a burst: jittered around the center with a random
    /// scatter velocity and lifetime.
    pub fn scatter(center: Vec2, color: ParticleColor, burst: BurstSize, rng: &mut Rng) -> Self {
        let jitter = Vec2::new(
            (rng.next_f32() - 0.5) * 10.0,
            (rng.next_f32() - 0.5) * 10.0,
        );
        let vel = Vec2::new(
            (rng.next_f32() - 0.5) * 8.0 * burst.speed_mult(),
            (rng.next_f32() - 0.5) * 8.0 * burst.speed_mult(),
        );
        Self {
            pos: center + jitter,
            vel,
            life_ms: 800.0 + rng.next_f32() * 400.0,
            max_life_ms: 1200.0,
            size: (rng.next_f32() * 3.0 + 2.0) * burst.size_mult(),
            color,
        }
    }

    /// Opacity derived from remaining life, in [0, 1].
    pub fn alpha(&self) -> f32 {
        (self.life_ms / self.max_life_ms).clamp(0.0, 1.0)
    }
}

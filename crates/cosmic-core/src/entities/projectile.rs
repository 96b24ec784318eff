use glam::Vec2;

use crate::renderer::sprite::SpriteKey;

/// Player bullet flavor. Double-shot rounds are wider, faster and fired in
/// pairs; both deal the same damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletKind {
    Normal,
    Double,
}

impl BulletKind {
    pub fn sprite(self) -> SpriteKey {
        match self {
            BulletKind::Normal => SpriteKey::BulletNormal,
            BulletKind::Double => SpriteKey::BulletDouble,
        }
    }
}

/// A player bullet travelling up the screen.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub damage: i32,
    pub kind: BulletKind,
}

impl Bullet {
    /// Single round fired from the ship's nose.
    pub fn normal(center_x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(center_x - 3.0, y),
            width: 6.0,
            height: 18.0,
            speed: 7.0,
            damage: 1,
            kind: BulletKind::Normal,
        }
    }

    /// The two rounds of a double shot, offset left and right of the nose.
    pub fn double_pair(center_x: f32, y: f32) -> [Self; 2] {
        let round = |x: f32| Self {
            pos: Vec2::new(x, y),
            width: 6.0,
            height: 20.0,
            speed: 10.0,
            damage: 1,
            kind: BulletKind::Double,
        };
        [round(center_x - 15.0), round(center_x + 9.0)]
    }
}

/// A hostile bullet travelling down the screen.
#[derive(Debug, Clone)]
pub struct EnemyBullet {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub damage: i32,
}

impl EnemyBullet {
    /// Fired from an enemy's belly, centered under it.
    pub fn from_muzzle(center_x: f32, bottom_y: f32) -> Self {
        Self {
            pos: Vec2::new(center_x - 2.0, bottom_y),
            width: 4.0,
            height: 12.0,
            speed: 5.0,
            damage: 1,
        }
    }
}

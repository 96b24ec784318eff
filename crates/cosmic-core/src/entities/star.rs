use glam::Vec2;

use crate::core::rng::Rng;

/// A background starfield dot. Drifts downward and wraps back to the top;
/// the twinkle phase drives its opacity.
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
    pub opacity: f32,
    pub twinkle: f32,
}

impl Star {
    /// Random star anywhere on the canvas (used to seed the field).
    pub fn scatter(world_width: f32, world_height: f32, rng: &mut Rng) -> Self {
        Self {
            pos: Vec2::new(rng.range(0.0, world_width), rng.range(0.0, world_height)),
            speed: rng.range(1.0, 4.0),
            size: rng.range(0.5, 2.5),
            opacity: rng.range(0.2, 1.0),
            twinkle: rng.range(0.0, std::f32::consts::TAU),
        }
    }

    /// Re-enter just above the top edge at a fresh column.
    pub fn wrap_to_top(&mut self, world_width: f32, rng: &mut Rng) {
        self.pos.y = -5.0;
        self.pos.x = rng.range(0.0, world_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_lands_on_canvas() {
        let mut rng = Rng::new(42);
        for _ in 0..100 {
            let s = Star::scatter(800.0, 600.0, &mut rng);
            assert!(s.pos.x >= 0.0 && s.pos.x < 800.0);
            assert!(s.pos.y >= 0.0 && s.pos.y < 600.0);
            assert!(s.speed >= 1.0 && s.speed < 4.0);
        }
    }

    #[test]
    fn wrap_moves_above_top_edge() {
        let mut rng = Rng::new(42);
        let mut s = Star::scatter(800.0, 600.0, &mut rng);
        s.pos.y = 700.0;
        s.wrap_to_top(800.0, &mut rng);
        assert_eq!(s.pos.y, -5.0);
        assert!(s.pos.x >= 0.0 && s.pos.x < 800.0);
    }
}

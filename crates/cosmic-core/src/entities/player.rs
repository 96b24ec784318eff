use glam::Vec2;

use crate::config::EngineConfig;

/// The player ship. Created once per round and mutated in place; health
/// reaching zero ends the round but never removes the record mid-tick.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub health: i32,
    pub max_health: i32,
    /// Simulation-clock timestamp of the last shot.
    pub last_shot_ms: f32,
    pub shoot_cooldown_ms: f32,
    pub invulnerable: bool,
    pub invulnerability_ms: f32,
    /// Cosmetic thrust-flare phase, advanced by the simulation.
    pub thrust_phase: f32,
}

impl Player {
    pub const WIDTH: f32 = 50.0;
    pub const HEIGHT: f32 = 60.0;
    pub const SPEED: f32 = 5.5;
    pub const MAX_HEALTH: i32 = 3;
    pub const SHOOT_COOLDOWN_MS: f32 = 250.0;

    /// Fresh ship centered near the bottom of the canvas.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.world_width / 2.0 - Self::WIDTH / 2.0,
                config.world_height - 120.0,
            ),
            width: Self::WIDTH,
            height: Self::HEIGHT,
            speed: Self::SPEED,
            health: Self::MAX_HEALTH,
            max_health: Self::MAX_HEALTH,
            // Negative so the first shot of a round is never cooldown-gated.
            last_shot_ms: -Self::SHOOT_COOLDOWN_MS,
            shoot_cooldown_ms: Self::SHOOT_COOLDOWN_MS,
            invulnerable: false,
            invulnerability_ms: 0.0,
            thrust_phase: 0.0,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Whether the fire cooldown has elapsed at the given simulation time.
    pub fn can_shoot(&self, now_ms: f32) -> bool {
        now_ms - self.last_shot_ms >= self.shoot_cooldown_ms
    }

    /// Restore one point of hull, capped at max. Returns true if anything
    /// changed.
    pub fn heal(&mut self) -> bool {
        if self.health < self.max_health {
            self.health += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ship_is_centered_and_healthy() {
        let cfg = EngineConfig::default();
        let p = Player::new(&cfg);
        assert_eq!(p.center_x(), cfg.world_width / 2.0);
        assert_eq!(p.health, p.max_health);
        assert!(!p.invulnerable);
    }

    #[test]
    fn first_shot_is_not_cooldown_gated() {
        let p = Player::new(&EngineConfig::default());
        assert!(p.can_shoot(0.0));
    }

    #[test]
    fn cooldown_gates_rapid_fire() {
        let mut p = Player::new(&EngineConfig::default());
        p.last_shot_ms = 100.0;
        assert!(!p.can_shoot(200.0));
        assert!(p.can_shoot(350.0));
    }

    #[test]
    fn heal_caps_at_max() {
        let mut p = Player::new(&EngineConfig::default());
        assert!(!p.heal());
        p.health = 1;
        assert!(p.heal());
        assert_eq!(p.health, 2);
    }
}

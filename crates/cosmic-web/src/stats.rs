//! Round bookkeeping: score, combo, level, lives, accuracy.
//!
//! The engine reports combat through events and multiplies kill scores by
//! whatever combo the driver hands it. The combo's own policy (grow a
//! tenth per credit up to x5, reset on damage) lives here, outside the
//! simulation.

use cosmic_core::backend::ScoreSubmission;
use cosmic_core::{CombatEvent, Player};

/// Combo growth per score credit.
const COMBO_STEP: f32 = 0.1;
/// Combo ceiling.
const COMBO_CAP: f32 = 5.0;
/// A level is cleared when score exceeds `level × LEVEL_SCORE_STEP`.
const LEVEL_SCORE_STEP: u64 = 100;

/// Statistics for one round, fed by drained combat events.
pub struct GameSession {
    score: u64,
    combo: f32,
    max_combo: f32,
    level: u32,
    lives: i32,
    aliens_defeated: u32,
    shots_fired: u32,
    shots_hit: u32,
    powerups_collected: u32,
    survival_ms: f32,
    game_over: bool,
    pending_level_ups: u32,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            score: 0,
            combo: 1.0,
            max_combo: 1.0,
            level: 1,
            lives: Player::MAX_HEALTH,
            aliens_defeated: 0,
            shots_fired: 0,
            shots_hit: 0,
            powerups_collected: 0,
            survival_ms: 0.0,
            game_over: false,
            pending_level_ups: 0,
        }
    }

    /// Fold one combat event into the round statistics.
    pub fn apply(&mut self, event: &CombatEvent) {
        match *event {
            CombatEvent::ShotFired { .. } => self.shots_fired += 1,
            CombatEvent::BulletHit => self.shots_hit += 1,
            CombatEvent::EnemyKilled { points, .. } => {
                self.aliens_defeated += 1;
                self.credit(points);
            }
            CombatEvent::ObstacleDestroyed { points, .. } => self.credit(points),
            CombatEvent::PowerupCollected { points, .. } => {
                self.powerups_collected += 1;
                self.credit(points);
            }
            CombatEvent::PlayerDamaged { health } => {
                self.lives = health;
                self.combo = 1.0;
            }
            CombatEvent::GameOver => self.game_over = true,
        }
    }

    fn credit(&mut self, points: u32) {
        self.score += points as u64;
        self.combo = (self.combo + COMBO_STEP).min(COMBO_CAP);
        self.max_combo = self.max_combo.max(self.combo);
        while self.score > self.level as u64 * LEVEL_SCORE_STEP {
            self.level += 1;
            self.pending_level_ups += 1;
        }
    }

    /// Advance the round clock (clamped real frame time, not scaled
    /// simulation time).
    pub fn tick(&mut self, frame_ms: f32) {
        if !self.game_over {
            self.survival_ms += frame_ms;
        }
    }

    /// Level-ups reached since the last call; the driver reacts to each
    /// (spawn tightening, notification).
    pub fn take_level_ups(&mut self) -> u32 {
        std::mem::take(&mut self.pending_level_ups)
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn combo(&self) -> f32 {
        self.combo
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn survival_seconds(&self) -> u32 {
        (self.survival_ms / 1000.0) as u32
    }

    /// Kills per trigger pull, in whole percent.
    pub fn accuracy(&self) -> u32 {
        if self.shots_fired == 0 {
            0
        } else {
            ((self.aliens_defeated as f32 / self.shots_fired as f32) * 100.0).round() as u32
        }
    }

    /// The save-score payload for this round.
    pub fn submission(&self) -> ScoreSubmission {
        ScoreSubmission {
            score: self.score,
            aliens_defeated: self.aliens_defeated,
            level_reached: self.level,
            survival_time: self.survival_seconds(),
            accuracy: self.accuracy(),
            shots_fired: self.shots_fired,
            shots_hit: self.shots_hit,
            powerups_collected: self.powerups_collected,
            max_combo: self.max_combo,
            game_mode: "normal".to_string(),
            difficulty: "normal".to_string(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_core::EnemyKind;

    fn kill(points: u32) -> CombatEvent {
        CombatEvent::EnemyKilled {
            kind: EnemyKind::Scout,
            points,
        }
    }

    #[test]
    fn kills_grow_score_and_combo() {
        let mut s = GameSession::new();
        s.apply(&kill(10));
        assert_eq!(s.score(), 10);
        assert!((s.combo() - 1.1).abs() < 1e-6);
        s.apply(&kill(11));
        assert!((s.combo() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn combo_caps_at_five() {
        let mut s = GameSession::new();
        for _ in 0..100 {
            s.apply(&kill(10));
        }
        assert_eq!(s.combo(), COMBO_CAP);
    }

    #[test]
    fn damage_resets_combo_but_not_score() {
        let mut s = GameSession::new();
        s.apply(&kill(10));
        s.apply(&kill(10));
        s.apply(&CombatEvent::PlayerDamaged { health: 2 });
        assert_eq!(s.combo(), 1.0);
        assert_eq!(s.score(), 20);
        assert_eq!(s.lives(), 2);
    }

    #[test]
    fn level_ups_track_score_thresholds() {
        let mut s = GameSession::new();
        // 110 points: past level 1's 100-point bar.
        for _ in 0..11 {
            s.apply(&kill(10));
        }
        assert_eq!(s.level(), 2);
        assert_eq!(s.take_level_ups(), 1);
        assert_eq!(s.take_level_ups(), 0);
    }

    #[test]
    fn accuracy_is_kills_per_trigger_pull() {
        let mut s = GameSession::new();
        assert_eq!(s.accuracy(), 0);
        for _ in 0..4 {
            s.apply(&CombatEvent::ShotFired { rounds: 1 });
        }
        s.apply(&CombatEvent::BulletHit);
        s.apply(&kill(10));
        assert_eq!(s.accuracy(), 25);
    }

    #[test]
    fn submission_carries_the_round() {
        let mut s = GameSession::new();
        for _ in 0..3 {
            s.apply(&CombatEvent::ShotFired { rounds: 2 });
            s.apply(&CombatEvent::BulletHit);
            s.apply(&kill(10));
        }
        s.tick(65_000.0);
        s.apply(&CombatEvent::GameOver);
        let sub = s.submission();
        assert_eq!(sub.score, s.score());
        assert_eq!(sub.aliens_defeated, 3);
        assert_eq!(sub.shots_fired, 3);
        assert_eq!(sub.shots_hit, 3);
        assert_eq!(sub.survival_time, 65);
        assert!(sub.is_plausible());
    }

    #[test]
    fn clock_stops_at_game_over() {
        let mut s = GameSession::new();
        s.tick(1000.0);
        s.apply(&CombatEvent::GameOver);
        s.tick(9000.0);
        assert_eq!(s.survival_seconds(), 1);
    }
}

//! Combat events, the engine's only channel back to the driver.
//!
//! The simulation never reaches out to score/lives bookkeeping directly;
//! it pushes events into the world's queue and the driver drains them each
//! frame. Score-bearing events carry final points, already multiplied by
//! the combo the driver supplied for the tick.

use bytemuck::{Pod, Zeroable};

use crate::entities::{EnemyKind, ObstacleKind, PowerupKind};

/// A combat event communicated from the engine to the host via
/// SharedArrayBuffer. Generic container: `kind` identifies the event,
/// `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct WireEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl WireEvent {
    pub const FLOATS: usize = 4;
}

/// Everything the combat resolver and firing logic report outward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CombatEvent {
    /// The player fired; `rounds` is 1 or 2 (double shot).
    ShotFired { rounds: u32 },
    /// A player bullet connected with something (accuracy tracking).
    BulletHit,
    EnemyKilled { kind: EnemyKind, points: u32 },
    ObstacleDestroyed { kind: ObstacleKind, points: u32 },
    PowerupCollected { kind: PowerupKind, points: u32 },
    /// The player took a hit; carries remaining health.
    PlayerDamaged { health: i32 },
    /// Health reached zero. The driver ends the round; the engine does not.
    GameOver,
}

impl CombatEvent {
    /// Wire `kind` codes; must stay in sync with the TypeScript event table.
    pub const SHOT_FIRED: f32 = 1.0;
    pub const BULLET_HIT: f32 = 2.0;
    pub const ENEMY_KILLED: f32 = 3.0;
    pub const OBSTACLE_DESTROYED: f32 = 4.0;
    pub const POWERUP_COLLECTED: f32 = 5.0;
    pub const PLAYER_DAMAGED: f32 = 6.0;
    pub const GAME_OVER: f32 = 7.0;

    pub fn encode(&self) -> WireEvent {
        match *self {
            CombatEvent::ShotFired { rounds } => WireEvent {
                kind: Self::SHOT_FIRED,
                a: rounds as f32,
                ..WireEvent::default()
            },
            CombatEvent::BulletHit => WireEvent {
                kind: Self::BULLET_HIT,
                ..WireEvent::default()
            },
            CombatEvent::EnemyKilled { kind, points } => WireEvent {
                kind: Self::ENEMY_KILLED,
                a: enemy_index(kind),
                b: points as f32,
                ..WireEvent::default()
            },
            CombatEvent::ObstacleDestroyed { kind, points } => WireEvent {
                kind: Self::OBSTACLE_DESTROYED,
                a: obstacle_index(kind),
                b: points as f32,
                ..WireEvent::default()
            },
            CombatEvent::PowerupCollected { kind, points } => WireEvent {
                kind: Self::POWERUP_COLLECTED,
                a: powerup_index(kind),
                b: points as f32,
                ..WireEvent::default()
            },
            CombatEvent::PlayerDamaged { health } => WireEvent {
                kind: Self::PLAYER_DAMAGED,
                a: health as f32,
                ..WireEvent::default()
            },
            CombatEvent::GameOver => WireEvent {
                kind: Self::GAME_OVER,
                ..WireEvent::default()
            },
        }
    }

    /// Points awarded by this event, if it is score-bearing.
    pub fn points(&self) -> Option<u32> {
        match *self {
            CombatEvent::EnemyKilled { points, .. }
            | CombatEvent::ObstacleDestroyed { points, .. }
            | CombatEvent::PowerupCollected { points, .. } => Some(points),
            _ => None,
        }
    }
}

fn enemy_index(kind: EnemyKind) -> f32 {
    match kind {
        EnemyKind::Scout => 0.0,
        EnemyKind::Fighter => 1.0,
        EnemyKind::Destroyer => 2.0,
    }
}

fn obstacle_index(kind: ObstacleKind) -> f32 {
    match kind {
        ObstacleKind::Small => 0.0,
        ObstacleKind::Medium => 1.0,
        ObstacleKind::Large => 2.0,
    }
}

fn powerup_index(kind: PowerupKind) -> f32 {
    match kind {
        PowerupKind::Star => 0.0,
        PowerupKind::Heart => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_event_is_4_floats() {
        assert_eq!(std::mem::size_of::<WireEvent>(), 16);
        assert_eq!(WireEvent::FLOATS, 4);
    }

    #[test]
    fn kill_event_encodes_kind_and_points() {
        let e = CombatEvent::EnemyKilled {
            kind: EnemyKind::Destroyer,
            points: 30,
        };
        let w = e.encode();
        assert_eq!(w.kind, CombatEvent::ENEMY_KILLED);
        assert_eq!(w.a, 2.0);
        assert_eq!(w.b, 30.0);
    }

    #[test]
    fn points_only_on_score_bearing_events() {
        assert_eq!(CombatEvent::GameOver.points(), None);
        assert_eq!(CombatEvent::BulletHit.points(), None);
        let pickup = CombatEvent::PowerupCollected {
            kind: PowerupKind::Heart,
            points: 10,
        };
        assert_eq!(pickup.points(), Some(10));
    }
}

//! Entity records — pure state, no behavior beyond construction helpers.
//! Every collection holding these is an insertion-ordered `Vec`; iteration
//! order only matters where combat resolution says it does
//! (first-encountered target wins).

pub mod enemy;
pub mod obstacle;
pub mod particle;
pub mod player;
pub mod powerup;
pub mod projectile;
pub mod star;

pub use enemy::{Enemy, EnemyKind};
pub use obstacle::{Obstacle, ObstacleKind};
pub use particle::{BurstSize, Particle, ParticleColor};
pub use player::Player;
pub use powerup::{Powerup, PowerupKind};
pub use projectile::{Bullet, BulletKind, EnemyBullet};
pub use star::Star;

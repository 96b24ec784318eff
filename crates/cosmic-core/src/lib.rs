pub mod api;
pub mod backend;
pub mod bridge;
pub mod config;
pub mod core;
pub mod entities;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::events::{CombatEvent, WireEvent};
pub use config::EngineConfig;
pub use crate::core::rng::Rng;
pub use crate::core::time::clamp_frame_ms;
pub use crate::core::world::World;
pub use entities::{
    Bullet, BulletKind, BurstSize, Enemy, EnemyBullet, EnemyKind, Obstacle, ObstacleKind,
    Particle, ParticleColor, Player, Powerup, PowerupKind, Star,
};
pub use input::{Control, InputEvent, InputSnapshot, InputState};
pub use renderer::instance::{ParticleInstance, RenderBuffer, RenderInstance};
pub use renderer::sprite::SpriteKey;
pub use bridge::protocol::ProtocolLayout;
pub use systems::{build_render_buffer, step};
pub use systems::spawner::force_spawn_enemy;

pub mod instance;
pub mod sprite;

pub use instance::{ParticleInstance, RenderBuffer, RenderInstance};
pub use sprite::SpriteKey;

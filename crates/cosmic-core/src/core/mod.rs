pub mod rng;
pub mod time;
pub mod world;

pub use rng::Rng;
pub use time::clamp_frame_ms;
pub use world::World;

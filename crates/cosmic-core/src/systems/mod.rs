//! Simulation systems and the per-tick orchestrator.

pub mod cleanup;
pub mod combat;
pub mod motion;
pub mod render;
pub mod spawner;

pub use render::build_render_buffer;

use crate::config::EngineConfig;
use crate::core::time::clamp_frame_ms;
use crate::core::world::World;
use crate::input::InputSnapshot;

/// Advance the world by one tick.
///
/// `frame_ms` is the raw elapsed time since the last frame; it is clamped
/// here, so outlier, NaN and negative inputs behave as if they were at the
/// nearest band edge. `combo` is the driver's current score multiplier.
///
/// Phase order is fixed (player, motion, combat, spawners, cleanup) and
/// tests rely on it.
pub fn step(
    world: &mut World,
    config: &EngineConfig,
    input: &InputSnapshot,
    frame_ms: f32,
    combo: f32,
) {
    let dt = clamp_frame_ms(frame_ms, config) * config.time_scale;
    world.elapsed_ms += dt;

    motion::update_player(world, config, input, dt);
    motion::advance_projectiles(world, config, dt);
    motion::advance_enemies(world, config, dt);
    motion::advance_obstacles(world, config, dt);
    motion::advance_powerups(world, config, dt);
    motion::advance_particles(world, config, dt);
    motion::advance_stars(world, config, dt);
    motion::update_powerup_timers(world, dt);

    combat::resolve(world, config, combo);
    spawner::run(world, config, dt);
    cleanup::run(world, config, dt);
}

/// Engine tuning, provided by the driver.
///
/// One engine, one table: every gameplay rate and threshold is a named
/// field here rather than a constant buried in a system.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Canvas width in game units.
    pub world_width: f32,
    /// Canvas height in game units.
    pub world_height: f32,
    /// Lower clamp bound for frame time (ms). NaN/negative inputs collapse here.
    pub min_frame_ms: f32,
    /// Upper clamp bound for frame time (ms). A stalled tab never simulates
    /// more than this in one tick.
    pub max_frame_ms: f32,
    /// Global simulation speed factor applied to the clamped frame time.
    pub time_scale: f32,
    /// Symmetric hit-box enlargement for bullet-vs-target tests (forgiveness
    /// margin).
    pub hit_padding: f32,
    /// Concurrent enemy population cap.
    pub max_enemies: usize,
    /// Particle cap; oldest particles are dropped beyond it.
    pub max_particles: usize,
    /// Background starfield size.
    pub star_count: usize,
    /// Enemy spawn threshold (ms of accumulated time).
    pub enemy_spawn_ms: f32,
    /// Multiplier on elapsed time feeding the enemy spawn accumulator.
    pub enemy_spawn_rate: f32,
    /// Obstacle spawn threshold (ms).
    pub obstacle_spawn_ms: f32,
    /// Powerup spawn threshold (ms).
    pub powerup_spawn_ms: f32,
    /// Interval between off-screen cleanup passes (ms).
    pub cleanup_interval_ms: f32,
    /// Player invulnerability window after taking damage (ms).
    pub invulnerability_ms: f32,
    /// Double-shot powerup duration (ms); refreshed on pickup.
    pub double_shot_ms: f32,
    /// Maximum render instances per frame.
    pub max_instances: usize,
    /// Maximum combat events per frame.
    pub max_events: usize,
    /// Seed for the deterministic world RNG.
    pub rng_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            min_frame_ms: 12.0,
            max_frame_ms: 33.0,
            time_scale: 0.85,
            hit_padding: 20.0,
            max_enemies: 8,
            max_particles: 150,
            star_count: 100,
            enemy_spawn_ms: 1500.0,
            enemy_spawn_rate: 2.0,
            obstacle_spawn_ms: 3000.0,
            powerup_spawn_ms: 12000.0,
            cleanup_interval_ms: 5000.0,
            invulnerability_ms: 2000.0,
            double_shot_ms: 10000.0,
            max_instances: 512,
            max_events: 32,
            rng_seed: 42,
        }
    }
}

impl EngineConfig {
    /// Tighten spawn thresholds on level-up, with floors so the late game
    /// stays playable.
    pub fn tighten_spawns(&mut self) {
        self.enemy_spawn_ms = (self.enemy_spawn_ms - 100.0).max(1000.0);
        self.obstacle_spawn_ms = (self.obstacle_spawn_ms - 150.0).max(2000.0);
    }
}

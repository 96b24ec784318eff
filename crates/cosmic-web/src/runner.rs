//! The game loop driver.
//!
//! The browser's requestAnimationFrame callback calls `tick` with the raw
//! frame delta; clamping, stepping, event bookkeeping and buffer rebuilds
//! all happen here. Stopping means the JS side stops calling `tick`; there
//! is no interrupt of an in-flight step.

use cosmic_core::{
    build_render_buffer, clamp_frame_ms, force_spawn_enemy, step, EngineConfig, InputEvent,
    InputState, ProtocolLayout, RenderBuffer, WireEvent, World,
};

use crate::stats::GameSession;

/// Enemies seeded into the field the moment a round starts.
const INITIAL_ENEMIES: usize = 4;

/// Loop state machine. `pause` flips Running↔Paused without touching the
/// world; `stop` only halts rescheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
    Paused,
}

/// Owns the world, the input fold, the session stats and the wire buffers.
pub struct GameRunner {
    /// Live tuning; level-ups tighten its spawn thresholds during a round.
    config: EngineConfig,
    /// Round-start tuning, restored on reset.
    base_config: EngineConfig,
    world: World,
    input: InputState,
    session: GameSession,
    render_buffer: RenderBuffer,
    /// Encoded combat events of the last running tick.
    event_buffer: Vec<WireEvent>,
    layout: ProtocolLayout,
    state: RunState,
    frame_counter: u32,
}

impl GameRunner {
    pub fn new(config: EngineConfig) -> Self {
        let layout = ProtocolLayout::from_config(&config);
        let world = World::new(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances, config.max_particles);
        Self {
            world,
            input: InputState::new(),
            session: GameSession::new(),
            render_buffer,
            event_buffer: Vec::with_capacity(config.max_events),
            layout,
            state: RunState::Stopped,
            base_config: config.clone(),
            config,
            frame_counter: 0,
        }
    }

    /// Start a fresh round: reset everything, seed the field, run.
    pub fn start(&mut self) {
        self.reset();
        for _ in 0..INITIAL_ENEMIES {
            force_spawn_enemy(&mut self.world, &self.config);
        }
        self.state = RunState::Running;
        log::info!("round started");
    }

    /// Toggle Running↔Paused. No-op while stopped.
    pub fn pause(&mut self) {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            RunState::Stopped => RunState::Stopped,
        };
    }

    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    /// Synchronously restore round-start state. Collections, accumulators
    /// and input are cleared here and now; no stale callback can touch the
    /// discarded round afterwards.
    pub fn reset(&mut self) {
        self.config = self.base_config.clone();
        self.world.reset(&self.config);
        self.session = GameSession::new();
        self.input.release_all();
        self.event_buffer.clear();
        self.render_buffer.clear();
        self.state = RunState::Stopped;
    }

    /// Run one frame: step when Running, rebuild the render buffer always
    /// (a paused frame still renders, under the overlay).
    pub fn tick(&mut self, frame_ms: f32) {
        if self.state == RunState::Stopped {
            return;
        }

        if self.state == RunState::Running {
            let snapshot = self.input.snapshot();
            step(
                &mut self.world,
                &self.config,
                &snapshot,
                frame_ms,
                self.session.combo(),
            );
            self.session.tick(clamp_frame_ms(frame_ms, &self.config));

            let events = self.world.drain_events();
            for event in &events {
                self.session.apply(event);
            }
            for _ in 0..self.session.take_level_ups() {
                self.config.tighten_spawns();
                log::info!("level {} reached", self.session.level());
            }

            self.event_buffer.clear();
            self.event_buffer
                .extend(events.iter().take(self.layout.max_events).map(|e| e.encode()));

            if self.session.is_game_over() {
                log::info!("game over: score {}", self.session.score());
                self.state = RunState::Stopped;
            }
        } else {
            // Paused frames report no fresh events.
            self.event_buffer.clear();
        }

        build_render_buffer(&self.world, &mut self.render_buffer);
        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    /// Push an input edge from the browser.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.apply(event);
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// JSON body for `POST /api/game/save-score`; the JS side attaches the
    /// bearer token and posts it. Serialization of this shape cannot fail.
    pub fn score_submission_json(&self) -> String {
        self.session
            .submission()
            .to_json()
            .unwrap_or_else(|_| "{}".to_string())
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn particles_ptr(&self) -> *const f32 {
        self.render_buffer.particles_ptr()
    }

    pub fn particle_count(&self) -> u32 {
        self.render_buffer.particle_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.event_buffer.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.event_buffer.len() as u32
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_particles(&self) -> u32 {
        self.layout.max_particles as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_core::Control;

    fn runner() -> GameRunner {
        GameRunner::new(EngineConfig::default())
    }

    #[test]
    fn start_seeds_the_field_and_runs() {
        let mut r = runner();
        assert_eq!(r.state(), RunState::Stopped);
        r.start();
        assert!(r.is_running());
        assert_eq!(r.world.enemies.len(), INITIAL_ENEMIES);
        assert_eq!(r.session().score(), 0);
    }

    #[test]
    fn stopped_ticks_do_nothing() {
        let mut r = runner();
        r.tick(16.0);
        assert_eq!(r.frame_counter(), 0);
        assert_eq!(r.instance_count(), 0);
    }

    #[test]
    fn pause_toggles_and_paused_frames_still_render() {
        let mut r = runner();
        r.start();
        r.tick(16.0);
        let elapsed = r.world.elapsed_ms;

        r.pause();
        assert!(r.is_paused());
        r.tick(16.0);
        // World frozen, frame still produced.
        assert_eq!(r.world.elapsed_ms, elapsed);
        assert!(r.instance_count() > 0);

        r.pause();
        assert!(r.is_running());
        r.tick(16.0);
        assert!(r.world.elapsed_ms > elapsed);
    }

    #[test]
    fn pause_while_stopped_stays_stopped() {
        let mut r = runner();
        r.pause();
        assert_eq!(r.state(), RunState::Stopped);
    }

    #[test]
    fn game_over_stops_the_loop() {
        let mut r = runner();
        r.start();
        r.world.player.health = 1;
        // Park a hostile bullet on the ship.
        let bullet = cosmic_core::EnemyBullet::from_muzzle(
            r.world.player.center_x(),
            r.world.player.pos.y + 10.0,
        );
        r.world.enemy_bullets.push(bullet);

        r.tick(16.0);

        assert_eq!(r.state(), RunState::Stopped);
        assert!(r.session().is_game_over());
        assert_eq!(r.session().lives(), 0);
    }

    #[test]
    fn reset_discards_the_round_synchronously() {
        let mut r = runner();
        r.start();
        r.push_input(InputEvent::Press(Control::Fire));
        for _ in 0..120 {
            r.tick(16.0);
        }
        r.reset();
        assert_eq!(r.state(), RunState::Stopped);
        assert!(r.world.bullets.is_empty());
        assert!(r.world.enemies.is_empty());
        assert_eq!(r.world.elapsed_ms, 0.0);
        assert_eq!(r.session().score(), 0);
        assert_eq!(r.event_count(), 0);
    }

    #[test]
    fn reset_restores_round_start_tuning() {
        let mut r = runner();
        r.start();
        // Level-ups tighten the live config during a round.
        r.config.tighten_spawns();
        r.config.tighten_spawns();
        assert!(r.config.enemy_spawn_ms < r.base_config.enemy_spawn_ms);
        r.reset();
        assert_eq!(r.config.enemy_spawn_ms, r.base_config.enemy_spawn_ms);
        assert_eq!(r.config.obstacle_spawn_ms, r.base_config.obstacle_spawn_ms);
    }

    #[test]
    fn held_fire_produces_shots_and_events() {
        let mut r = runner();
        r.start();
        r.push_input(InputEvent::Press(Control::Fire));
        r.tick(16.0);
        assert!(!r.world.bullets.is_empty());
        assert!(r.event_count() > 0);
    }

    #[test]
    fn combo_feeds_back_into_kill_scores() {
        let mut r = runner();
        r.start();
        // Two scripted kills: the second must score higher than the first.
        let mut scores = Vec::new();
        for _ in 0..2 {
            let mut enemy =
                cosmic_core::Enemy::spawn(cosmic_core::EnemyKind::Scout, 0.0, &mut r.world.rng);
            enemy.pos = r.world.player.pos;
            enemy.pos.y -= 200.0;
            enemy.health = 1;
            r.world.enemies.clear();
            r.world.enemies.push(enemy);
            let target = r.world.enemies[0].center();
            let mut bullet = cosmic_core::Bullet::normal(target.x, target.y);
            bullet.pos = target;
            r.world.bullets.push(bullet);
            let before = r.session().score();
            r.tick(16.0);
            scores.push(r.session().score() - before);
        }
        assert!(scores[1] > scores[0], "combo multiplied: {:?}", scores);
    }
}

pub mod runner;
pub mod stats;

pub use runner::{GameRunner, RunState};
pub use stats::GameSession;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use cosmic_core::{Control, EngineConfig, InputEvent};

thread_local! {
    static RUNNER: RefCell<Option<GameRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

/// Map a browser keyCode onto a semantic control. Arrows and WASD move,
/// space fires. Anything else is ignored.
fn control_from_key(key_code: u32) -> Option<Control> {
    match key_code {
        37 | 65 => Some(Control::Left),  // ArrowLeft, A
        39 | 68 => Some(Control::Right), // ArrowRight, D
        38 | 87 => Some(Control::Up),    // ArrowUp, W
        40 | 83 => Some(Control::Down),  // ArrowDown, S
        32 => Some(Control::Fire),       // Space
        _ => None,
    }
}

/// Touch-button codes sent by the mobile control overlay. Pages without the
/// overlay simply never call the touch exports; the feature is inactive,
/// never an error.
fn control_from_touch(button: u32) -> Option<Control> {
    match button {
        0 => Some(Control::Left),
        1 => Some(Control::Right),
        2 => Some(Control::Up),
        3 => Some(Control::Down),
        4 => Some(Control::Fire),
        _ => None,
    }
}

#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = GameRunner::new(EngineConfig::default());
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("cosmic-commander: initialized");
}

#[wasm_bindgen]
pub fn game_tick(dt_ms: f32) {
    with_runner(|r| r.tick(dt_ms));
}

// ---- Round control ----

#[wasm_bindgen]
pub fn game_start() {
    with_runner(|r| r.start());
}

#[wasm_bindgen]
pub fn game_pause() {
    with_runner(|r| r.pause());
}

#[wasm_bindgen]
pub fn game_stop() {
    with_runner(|r| r.stop());
}

#[wasm_bindgen]
pub fn game_reset() {
    with_runner(|r| r.reset());
}

// ---- Input ----

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    if let Some(control) = control_from_key(key_code) {
        with_runner(|r| r.push_input(InputEvent::Press(control)));
    }
}

#[wasm_bindgen]
pub fn game_key_up(key_code: u32) {
    if let Some(control) = control_from_key(key_code) {
        with_runner(|r| r.push_input(InputEvent::Release(control)));
    }
}

#[wasm_bindgen]
pub fn game_touch_down(button: u32) {
    if let Some(control) = control_from_touch(button) {
        with_runner(|r| r.push_input(InputEvent::Press(control)));
    }
}

#[wasm_bindgen]
pub fn game_touch_up(button: u32) {
    if let Some(control) = control_from_touch(button) {
        with_runner(|r| r.push_input(InputEvent::Release(control)));
    }
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_particles_ptr() -> *const f32 {
    with_runner(|r| r.particles_ptr())
}

#[wasm_bindgen]
pub fn get_particle_count() -> u32 {
    with_runner(|r| r.particle_count())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_event_count() -> u32 {
    with_runner(|r| r.event_count())
}

#[wasm_bindgen]
pub fn get_frame_counter() -> u32 {
    with_runner(|r| r.frame_counter())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width())
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height())
}

#[wasm_bindgen]
pub fn get_is_running() -> bool {
    with_runner(|r| r.is_running())
}

#[wasm_bindgen]
pub fn get_is_paused() -> bool {
    with_runner(|r| r.is_paused())
}

// ---- Session stats (HUD) ----

#[wasm_bindgen]
pub fn get_score() -> f64 {
    with_runner(|r| r.session().score() as f64)
}

#[wasm_bindgen]
pub fn get_lives() -> i32 {
    with_runner(|r| r.session().lives())
}

#[wasm_bindgen]
pub fn get_level() -> u32 {
    with_runner(|r| r.session().level())
}

#[wasm_bindgen]
pub fn get_combo() -> f32 {
    with_runner(|r| r.session().combo())
}

#[wasm_bindgen]
pub fn get_accuracy() -> u32 {
    with_runner(|r| r.session().accuracy())
}

#[wasm_bindgen]
pub fn get_survival_seconds() -> u32 {
    with_runner(|r| r.session().survival_seconds())
}

/// The round's save-score payload as JSON; the page attaches the bearer
/// token and posts it to `/api/game/save-score`.
#[wasm_bindgen]
pub fn get_score_submission() -> String {
    with_runner(|r| r.score_submission_json())
}

// ---- Capacity accessors ----

#[wasm_bindgen]
pub fn get_max_instances() -> u32 {
    with_runner(|r| r.max_instances())
}

#[wasm_bindgen]
pub fn get_max_particles() -> u32 {
    with_runner(|r| r.max_particles())
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}

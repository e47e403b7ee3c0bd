//! wasm-bindgen exports for the orrery scene.
//!
//! JS calls `orrery_init` once, then `orrery_tick` every animation frame, and
//! reads the frame and instance buffers straight out of wasm memory through
//! the pointer accessors.

pub mod backend;
pub mod runner;

use std::cell::RefCell;

use orrery_engine::{FieldKind, InputEvent};
use wasm_bindgen::prelude::*;

pub use backend::SharedBufferBackend;
pub use runner::OrreryRunner;

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the runner. `None` before `orrery_init`.
fn with_runner<R>(f: impl FnOnce(&mut OrreryRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn field_kind(code: u32) -> Option<FieldKind> {
    let kind = FieldKind::from_code(code);
    if kind.is_none() {
        log::warn!("orrery: unknown field code {code}");
    }
    kind
}

#[wasm_bindgen]
pub fn orrery_init(config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut runner = OrreryRunner::from_json(config_json.as_deref());
    runner.init();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("orrery: initialized");
}

#[wasm_bindgen]
pub fn orrery_tick(elapsed: f64) {
    with_runner(|r| r.tick(elapsed));
}

#[wasm_bindgen]
pub fn orrery_select(body: &str) {
    with_runner(|r| r.push_input(InputEvent::Select { body: body.to_string() }));
}

#[wasm_bindgen]
pub fn orrery_deselect() {
    with_runner(|r| r.push_input(InputEvent::Deselect));
}

#[wasm_bindgen]
pub fn orrery_hover(body: Option<String>) {
    with_runner(|r| r.push_input(InputEvent::Hover { body }));
}

#[wasm_bindgen]
pub fn orrery_resize(width: u32, height: u32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_frame_total_floats() -> u32 {
    with_runner(|r| r.frame_total_floats()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_instances_ptr(field: u32) -> *const f32 {
    field_kind(field)
        .and_then(|kind| with_runner(|r| r.instances_ptr(kind)))
        .unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_instance_count(field: u32) -> u32 {
    field_kind(field)
        .and_then(|kind| with_runner(|r| r.instance_count(kind)))
        .unwrap_or(0)
}

#[wasm_bindgen]
pub fn clear_instances_dirty(field: u32) {
    if let Some(kind) = field_kind(field) {
        with_runner(|r| r.clear_dirty(kind));
    }
}

/// Body display names in table order; index matches the frame buffer.
#[wasm_bindgen]
pub fn get_body_names() -> js_sys::Array {
    let names = with_runner(|r| r.body_names()).unwrap_or_default();
    names.into_iter().map(JsValue::from).collect()
}

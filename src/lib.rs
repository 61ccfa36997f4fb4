//! Cipher Gate: a single-page puzzle-lock widget compiled to WebAssembly.
//!
//! A themed lock screen asks for a decryption code; the correct entry
//! triggers a staged unlock reveal (progress fill, status changes, panel
//! swap, staggered content entrance) while a typewriter intro and a
//! matrix-rain backdrop run alongside. Validation and choreography planning
//! are pure Rust and tested natively; the wasm layer only wires them to the
//! page.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

pub mod config;
pub mod lock;
pub mod rain;
pub mod reveal;
pub mod typewriter;

mod sched;
mod surface;

use config::GateConfig;
use lock::{Intent, LockController};
use surface::Surface;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Widget state
// -----------------------------------------------------------------------------

/// Everything the live widget owns: configuration, DOM handles and the lock
/// state machine. One per page, held in the cell below.
pub(crate) struct GateState {
    pub(crate) config: GateConfig,
    pub(crate) surface: Surface,
    pub(crate) lock: LockController,
}

thread_local! {
    static GATE: std::cell::RefCell<Option<GateState>> = std::cell::RefCell::new(None);
}

/// Run `f` against the live widget, if any. Timer and event callbacks all
/// re-enter through here, so each borrow is scoped to one callback body.
pub(crate) fn with_gate<F: FnOnce(&mut GateState)>(f: F) {
    GATE.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            f(state);
        }
    });
}

// -----------------------------------------------------------------------------
// Entry
// -----------------------------------------------------------------------------

/// Boot the widget. Safe to call from the JS glue at any load stage: if the
/// document is still parsing, init is deferred to `DOMContentLoaded`,
/// otherwise it runs immediately.
#[wasm_bindgen]
pub fn start_gate() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if doc.ready_state() == "loading" {
        let cb = Closure::wrap(Box::new(move || {
            if let Err(err) = init() {
                web_sys::console::error_1(&err);
            }
        }) as Box<dyn FnMut()>);
        doc.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
        cb.forget();
        return Ok(());
    }
    init()
}

fn init() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let config = GateConfig::default();
    let surface = Surface::locate(&doc)?;

    // Entry events: click, Enter, and edits (which clear a shown error).
    {
        let cb = Closure::wrap(Box::new(move || handle_submit()) as Box<dyn FnMut()>);
        surface
            .submit_btn
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    {
        let cb = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            if evt.key() == "Enter" {
                handle_submit();
            }
        }) as Box<dyn FnMut(_)>);
        surface
            .code_input
            .add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    {
        let cb = Closure::wrap(Box::new(move || handle_edited()) as Box<dyn FnMut()>);
        surface
            .code_input
            .add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    typewriter::begin(surface.typewriter_text.clone(), config.typing_speed_ms);
    rain::begin(&win, &doc)?;

    let lock = LockController::new(&config);
    GATE.with(|cell| {
        cell.replace(Some(GateState {
            config,
            surface,
            lock,
        }))
    });
    log("cipher gate armed");
    Ok(())
}

// -----------------------------------------------------------------------------
// Event handling & intent dispatch
// -----------------------------------------------------------------------------

fn handle_submit() {
    with_gate(|state| {
        let raw = state.surface.input_value();
        for intent in state.lock.submit(&raw) {
            dispatch(state, &intent);
        }
    });
}

fn handle_edited() {
    with_gate(|state| {
        for intent in state.lock.edited() {
            dispatch(state, &intent);
        }
    });
}

fn dispatch(state: &mut GateState, intent: &Intent) {
    match intent {
        Intent::BeginReveal => {
            log("access granted, running unlock sequence");
            reveal::begin(state);
        }
        Intent::DisableEntry => {
            log("attempt budget spent, gate sealed");
            state.surface.apply(intent);
        }
        other => state.surface.apply(other),
    }
}

fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

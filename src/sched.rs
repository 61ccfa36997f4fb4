//! Thin wrappers over the browser timer and animation-frame APIs.
//!
//! Every closure handed to the browser is leaked with `forget`: the widget
//! lives as long as the page, so nothing is ever reclaimed.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

/// Run `f` once after `ms` milliseconds.
pub fn after(ms: i32, f: impl FnOnce() + 'static) {
    let cb = Closure::once(f);
    if let Some(w) = window() {
        w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)
            .ok();
    }
    cb.forget();
}

/// Run `f` every `ms` milliseconds for the rest of the page's life.
pub fn every(ms: i32, f: impl FnMut() + 'static) {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    if let Some(w) = window() {
        w.set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)
            .ok();
    }
    cb.forget();
}

/// Run `f` after the browser has committed pending style writes: two
/// animation-frame boundaries, so a freshly written transition property is
/// in effect before the final values land.
pub fn after_commit(f: impl FnOnce() + 'static) {
    frame(move || frame(f));
}

fn frame(f: impl FnOnce() + 'static) {
    let cb = Closure::once(f);
    if let Some(w) = window() {
        w.request_animation_frame(cb.as_ref().unchecked_ref()).ok();
    }
    cb.forget();
}

// Browser-side smoke tests; run with `wasm-pack test --headless --chrome`.
// Native `cargo test` compiles this file to an empty crate via the cfg below.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

// Minimal host markup carrying every region the widget requires.
fn build_fixture(doc: &web_sys::Document) -> web_sys::Element {
    let root = doc.create_element("div").unwrap();
    for id in [
        "locked-section",
        "unlocked-section",
        "error-msg",
        "status-indicator",
        "status-text",
        "progress-bar-container",
        "progress-bar",
        "attempt-counter",
        "terminal-body",
        "typewriter-text",
    ] {
        let el = doc.create_element("div").unwrap();
        el.set_id(id);
        root.append_child(&el).unwrap();
    }
    let input = doc.create_element("input").unwrap();
    input.set_id("code-input");
    root.append_child(&input).unwrap();
    let btn = doc.create_element("button").unwrap();
    btn.set_id("submit-btn");
    root.append_child(&btn).unwrap();
    let canvas = doc.create_element("canvas").unwrap();
    canvas.set_id("matrix-canvas");
    root.append_child(&canvas).unwrap();
    root
}

#[wasm_bindgen_test]
fn start_gate_reports_the_missing_region() {
    // No fixture in the tree, so the boot should fail naming an id.
    let err = cipher_gate::start_gate().unwrap_err();
    let text = format!("{err:?}");
    assert!(text.contains("missing element"), "unexpected error: {text}");
}

#[wasm_bindgen_test]
fn start_gate_boots_on_a_complete_fixture() {
    let doc = document();
    let root = build_fixture(&doc);
    doc.body().unwrap().append_child(&root).unwrap();
    let booted = cipher_gate::start_gate();
    root.remove();
    assert!(booted.is_ok(), "boot failed: {:?}", booted.err());
}

//! DOM adapter for the widget's named regions.
//!
//! Everything that reads or writes the presentation tree goes through this
//! module: the state machine emits [`Intent`] values and the choreography
//! calls the primitives below, neither touching `web_sys` directly. Styling
//! stays in the host stylesheet; this side only toggles classes, writes text
//! and sets the handful of inline properties the effects need.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

use crate::lock::{Intent, attempts_msg};
use crate::{reveal, sched};

// --- Region ids (host page contract) ------------------------------------------

pub const LOCKED_SECTION: &str = "locked-section";
pub const UNLOCKED_SECTION: &str = "unlocked-section";
pub const CODE_INPUT: &str = "code-input";
pub const SUBMIT_BTN: &str = "submit-btn";
pub const ERROR_MSG: &str = "error-msg";
pub const STATUS_INDICATOR: &str = "status-indicator";
pub const STATUS_TEXT: &str = "status-text";
pub const PROGRESS_CONTAINER: &str = "progress-bar-container";
pub const PROGRESS_BAR: &str = "progress-bar";
pub const ATTEMPT_COUNTER: &str = "attempt-counter";
pub const TERMINAL_BODY: &str = "terminal-body";
pub const TYPEWRITER_TEXT: &str = "typewriter-text";
pub const MATRIX_CANVAS: &str = "matrix-canvas";

/// Items inside the unlocked panel that get the staggered entrance.
pub const REVEAL_ITEM_SELECTOR: &str = ".info-item, .instruction-box";

/// How long the red denial affordance stays on the input.
const DENIED_FLASH_MS: i32 = 800;

/// Handles to every required region, located once at startup. The rain
/// canvas is not part of this set: it is optional and the rain module
/// tolerates its absence on its own.
pub struct Surface {
    pub locked_section: Element,
    pub unlocked_section: Element,
    pub code_input: HtmlInputElement,
    pub submit_btn: HtmlButtonElement,
    pub error_msg: Element,
    pub status_indicator: Element,
    pub status_text: Element,
    pub progress_container: Element,
    pub progress_bar: HtmlElement,
    pub attempt_counter: Element,
    pub terminal_body: Element,
    pub typewriter_text: Element,
}

impl Surface {
    /// Look up every required region, failing with the offending id so a
    /// mis-assembled host page is diagnosable from the console.
    pub fn locate(doc: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            locked_section: region(doc, LOCKED_SECTION)?,
            unlocked_section: region(doc, UNLOCKED_SECTION)?,
            code_input: region(doc, CODE_INPUT)?.dyn_into()?,
            submit_btn: region(doc, SUBMIT_BTN)?.dyn_into()?,
            error_msg: region(doc, ERROR_MSG)?,
            status_indicator: region(doc, STATUS_INDICATOR)?,
            status_text: region(doc, STATUS_TEXT)?,
            progress_container: region(doc, PROGRESS_CONTAINER)?,
            progress_bar: region(doc, PROGRESS_BAR)?.dyn_into()?,
            attempt_counter: region(doc, ATTEMPT_COUNTER)?,
            terminal_body: region(doc, TERMINAL_BODY)?,
            typewriter_text: region(doc, TYPEWRITER_TEXT)?,
        })
    }

    pub fn input_value(&self) -> String {
        self.code_input.value()
    }

    /// Apply one state-machine intent. `BeginReveal` is not handled here;
    /// the dispatcher in `lib.rs` routes it to the choreography.
    pub fn apply(&self, intent: &Intent) {
        match intent {
            Intent::ShowError(msg) => self.show_error(msg),
            Intent::HideError => self.hide_error(),
            Intent::SetAttempts { used, max } => {
                self.attempt_counter
                    .set_text_content(Some(&attempts_msg(*used, *max)));
            }
            Intent::ClearInput => self.code_input.set_value(""),
            Intent::FocusInput => {
                self.code_input.focus().ok();
            }
            Intent::FlashDenied => self.flash_denied(),
            Intent::MarkAccepted => self.mark_accepted(),
            Intent::DisableEntry => self.disable_entry(),
            Intent::BeginReveal => {}
        }
    }

    // --- Error slot -----------------------------------------------------------

    fn show_error(&self, msg: &str) {
        self.error_msg.set_text_content(Some(msg));
        self.error_msg.class_list().add_1("visible").ok();
    }

    // Text stays in place; only the visibility class drops.
    fn hide_error(&self) {
        self.error_msg.class_list().remove_1("visible").ok();
    }

    // --- Entry affordances ----------------------------------------------------

    fn flash_denied(&self) {
        let style = self.code_input.style();
        style.set_property("border-color", "var(--neon-red)").ok();
        style
            .set_property("box-shadow", "0 0 10px var(--neon-red-glow)")
            .ok();
        let input = self.code_input.clone();
        sched::after(DENIED_FLASH_MS, move || {
            let style = input.style();
            style.remove_property("border-color").ok();
            style.remove_property("box-shadow").ok();
        });
    }

    fn mark_accepted(&self) {
        let style = self.code_input.style();
        style.set_property("border-color", "var(--neon-green)").ok();
        style
            .set_property("box-shadow", "0 0 15px var(--neon-green-glow-strong)")
            .ok();
        self.code_input.set_disabled(true);
        self.submit_btn.set_disabled(true);
        self.submit_btn.set_text_content(Some("✓"));
        let style = self.submit_btn.style();
        style.set_property("border-color", "var(--neon-green)").ok();
        style.set_property("color", "var(--neon-green)").ok();
    }

    fn disable_entry(&self) {
        self.code_input.set_disabled(true);
        self.submit_btn.set_disabled(true);
    }

    // --- Choreography primitives ----------------------------------------------

    pub fn set_status(&self, text: &str) {
        self.status_text.set_text_content(Some(text));
    }

    pub fn clear_locked_indicator(&self) {
        self.status_indicator.class_list().remove_1("locked").ok();
    }

    pub fn activate_progress(&self) {
        self.progress_container.class_list().add_1("active").ok();
    }

    /// Start the fill. The configured duration is written inline so the
    /// transition completes on schedule regardless of stylesheet defaults.
    pub fn complete_progress(&self, duration_ms: u32) {
        let secs = duration_ms as f64 / 1000.0;
        self.progress_bar
            .style()
            .set_property("transition-duration", &format!("{secs}s"))
            .ok();
        self.progress_bar.class_list().add_1("complete").ok();
    }

    pub fn flash_terminal(&self) {
        self.terminal_body.class_list().add_1("success-flash").ok();
    }

    pub fn swap_panels(&self) {
        self.locked_section.class_list().add_1("hidden").ok();
        self.unlocked_section.class_list().add_1("visible").ok();
    }

    /// Staggered entrance for the unlocked panel's items, document order.
    /// The offset start and per-item transition are committed over two
    /// frames before the final values are written, so each item actually
    /// animates instead of snapping.
    pub fn reveal_items(&self) {
        let Ok(items) = self.unlocked_section.query_selector_all(REVEAL_ITEM_SELECTOR) else {
            return;
        };
        for index in 0..items.length() {
            let Some(node) = items.get(index) else { continue };
            let Ok(item) = node.dyn_into::<HtmlElement>() else {
                continue;
            };
            let style = item.style();
            style.set_property("opacity", "0").ok();
            style.set_property("transform", "translateY(15px)").ok();
            style
                .set_property("transition", &reveal::item_transition(index as usize))
                .ok();
            sched::after_commit(move || {
                let style = item.style();
                style.set_property("opacity", "1").ok();
                style.set_property("transform", "translateY(0)").ok();
            });
        }
    }
}

fn region(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

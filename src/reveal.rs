//! Unlock choreography: progress fill, status transitions, panel swap and
//! the staggered entrance of the unlocked content.
//!
//! The sequence is data first: a fixed list of (delay, action) steps with
//! every delay measured from the trigger instant, never chained off the
//! previous step. The driver half runs the delay-0 step synchronously so
//! submit handling stays atomic, and schedules the rest.

use crate::GateState;
use crate::config::GateConfig;
use crate::sched;

// --- Plan (pure) --------------------------------------------------------------

pub const DECRYPTING_MSG: &str = "DECRYPTING... STAND BY";
pub const ACCESS_GRANTED_MSG: &str = "ACCESS GRANTED";

/// Gap between progress activation and the start of the fill.
pub const FILL_NUDGE_MS: u32 = 50;
/// Per-item delay step of the staggered entrance.
pub const STAGGER_STEP_S: f64 = 0.2;
/// Fade/slide duration of one staggered item.
pub const ITEM_FADE_S: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Progress container on, locked indicator off, in-progress status,
    /// terminal flash.
    ActivateProgress,
    /// Begin the fill, sized to the configured duration.
    FillProgress,
    /// Final status, panel swap, staggered items, gate state → Unlocked.
    SwapPanels,
}

/// One scheduled step. `delay_ms` counts from the reveal trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub delay_ms: u32,
    pub action: RevealAction,
}

/// The full unlock sequence for a given configuration. The panel swap waits
/// on the unlock delay alone; it does not chain off the fill finishing.
pub fn plan(config: &GateConfig) -> Vec<RevealStep> {
    vec![
        RevealStep {
            delay_ms: 0,
            action: RevealAction::ActivateProgress,
        },
        RevealStep {
            delay_ms: FILL_NUDGE_MS,
            action: RevealAction::FillProgress,
        },
        RevealStep {
            delay_ms: config.unlock_delay_ms,
            action: RevealAction::SwapPanels,
        },
    ]
}

/// Transition delay for the staggered item at `index`.
pub fn stagger_delay_s(index: usize) -> f64 {
    index as f64 * STAGGER_STEP_S
}

/// Inline transition spec for the staggered item at `index`.
pub fn item_transition(index: usize) -> String {
    let delay = stagger_delay_s(index);
    format!("opacity {ITEM_FADE_S}s ease {delay:.1}s, transform {ITEM_FADE_S}s ease {delay:.1}s")
}

// --- Driver (wasm) ------------------------------------------------------------

/// Kick off the reveal. Delay-0 steps run right here, inside the submit
/// dispatch; later steps re-enter the widget state through their timers.
pub(crate) fn begin(state: &mut GateState) {
    for step in plan(&state.config) {
        if step.delay_ms == 0 {
            run(state, step.action);
        } else {
            let action = step.action;
            sched::after(step.delay_ms as i32, move || {
                crate::with_gate(|state| run(state, action));
            });
        }
    }
}

fn run(state: &mut GateState, action: RevealAction) {
    match action {
        RevealAction::ActivateProgress => {
            state.surface.activate_progress();
            state.surface.clear_locked_indicator();
            state.surface.set_status(DECRYPTING_MSG);
            state.surface.flash_terminal();
        }
        RevealAction::FillProgress => {
            state
                .surface
                .complete_progress(state.config.progress_duration_ms);
        }
        RevealAction::SwapPanels => {
            state.surface.set_status(ACCESS_GRANTED_MSG);
            state.surface.swap_panels();
            state.surface.reveal_items();
            state.lock.reveal_complete();
        }
    }
}

//! Lock state machine for the code-entry gate.
//!
//! Pure logic: validation, attempt accounting and the locked → unlocked
//! transition live here with no DOM types in sight. Each user action is fed
//! in as a method call and comes back out as a list of [`Intent`] values for
//! the render surface to apply, which keeps the whole pipeline testable on
//! the native host.

use crate::config::GateConfig;

// --- User-facing strings ------------------------------------------------------

pub const EMPTY_INPUT_MSG: &str = "⚠ EMPTY INPUT. ENTER DECRYPTION CODE.";
pub const LOCKED_OUT_MSG: &str = "✖ ACCESS DENIED. SYSTEM LOCKED.";

/// Denial line for a counted failure that still leaves attempts.
pub fn denied_msg(remaining: u32) -> String {
    format!("✖ ACCESS DENIED. INVALID CODE. [{remaining} attempts left]")
}

/// Attempt counter line, shown after every counted submission.
pub fn attempts_msg(used: u32, max: u32) -> String {
    format!("attempts: {used}/{max}")
}

// --- States & session ---------------------------------------------------------

/// Lifecycle of the gate. The brief red flash after a denial is purely
/// visual and deliberately not a state here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    /// Accepting submissions.
    Active,
    /// Attempt budget spent; terminal, entry disabled.
    Exhausted,
    /// Correct code seen; the reveal choreography is running.
    Unlocking,
    /// Reveal finished; terminal.
    Unlocked,
}

/// Mutable per-page session record. Owned by the controller; nothing else
/// writes to it.
#[derive(Debug, Default, Clone)]
struct Session {
    /// Counted submissions so far. Never exceeds the configured maximum.
    attempts: u32,
    /// Latched on success; blocks any further submission handling.
    submitting: bool,
}

// --- Intents ------------------------------------------------------------------

/// One DOM-facing effect requested by the state machine. The render surface
/// applies these verbatim; `BeginReveal` is instead routed to the unlock
/// choreography by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Put the message into the error slot and make it visible, replacing
    /// whatever was there before.
    ShowError(String),
    /// Hide the error slot (text is left in place, visibility class drops).
    HideError,
    /// Repaint the attempt counter.
    SetAttempts { used: u32, max: u32 },
    ClearInput,
    FocusInput,
    /// Transient red affordance on the input; clears itself after a beat.
    FlashDenied,
    /// Success affordance: green input/submit styling, check mark, both
    /// entry surfaces disabled.
    MarkAccepted,
    /// Permanent disable of both entry surfaces (lockout).
    DisableEntry,
    /// Hand off to the unlock choreography.
    BeginReveal,
}

// --- Controller ---------------------------------------------------------------

/// Validates submissions against the configured code and tracks the attempt
/// budget. One instance per page.
#[derive(Debug)]
pub struct LockController {
    answer: String,
    max_attempts: u32,
    state: LockState,
    session: Session,
}

impl LockController {
    pub fn new(config: &GateConfig) -> Self {
        Self {
            answer: config.answer.clone(),
            max_attempts: config.max_attempts,
            state: LockState::Active,
            session: Session::default(),
        }
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    /// Counted submissions so far.
    pub fn attempts(&self) -> u32 {
        self.session.attempts
    }

    pub fn is_submitting(&self) -> bool {
        self.session.submitting
    }

    /// Attempts still available.
    pub fn remaining(&self) -> u32 {
        self.max_attempts - self.session.attempts
    }

    /// Handle one submission. Synchronous and atomic: state and the returned
    /// intents always agree, no matter how the caller interleaves timers.
    ///
    /// Empty (post-trim) input is rejected before counting. Everything else
    /// counts, the successful attempt included, and the counter intent is
    /// emitted before the branch outcome so the surface repaints it first.
    pub fn submit(&mut self, raw: &str) -> Vec<Intent> {
        if self.session.submitting || self.state != LockState::Active {
            return Vec::new();
        }

        let code = raw.trim();
        if code.is_empty() {
            return vec![
                Intent::ShowError(EMPTY_INPUT_MSG.to_string()),
                Intent::FocusInput,
            ];
        }

        self.session.attempts += 1;
        let mut intents = vec![Intent::SetAttempts {
            used: self.session.attempts,
            max: self.max_attempts,
        }];

        if code == self.answer {
            self.session.submitting = true;
            self.state = LockState::Unlocking;
            intents.push(Intent::HideError);
            intents.push(Intent::MarkAccepted);
            intents.push(Intent::BeginReveal);
        } else if self.remaining() == 0 {
            self.state = LockState::Exhausted;
            intents.push(Intent::ShowError(LOCKED_OUT_MSG.to_string()));
            intents.push(Intent::DisableEntry);
        } else {
            intents.push(Intent::ShowError(denied_msg(self.remaining())));
            intents.push(Intent::FlashDenied);
            intents.push(Intent::ClearInput);
            intents.push(Intent::FocusInput);
        }
        intents
    }

    /// Any edit of the input clears a visible error, valid or not.
    pub fn edited(&self) -> Vec<Intent> {
        vec![Intent::HideError]
    }

    /// Called by the panel-swap step of the choreography once the unlocked
    /// panel is showing.
    pub fn reveal_complete(&mut self) {
        if self.state == LockState::Unlocking {
            self.state = LockState::Unlocked;
        }
    }
}

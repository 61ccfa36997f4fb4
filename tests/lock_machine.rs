// Integration tests (native) for the lock state machine.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use cipher_gate::config::GateConfig;
use cipher_gate::lock::{self, Intent, LockController, LockState};

fn controller() -> LockController {
    LockController::new(&GateConfig::default())
}

#[test]
fn defaults_match_the_product_constants() {
    let config = GateConfig::default();
    assert_eq!(config.answer, "2000");
    assert_eq!(config.max_attempts, 10);
    assert_eq!(config.typing_speed_ms, 40);
    assert_eq!(config.unlock_delay_ms, 1800);
    assert_eq!(config.progress_duration_ms, 1500);
}

#[test]
fn counter_line_reads_used_over_max() {
    assert_eq!(lock::attempts_msg(3, 10), "attempts: 3/10");
}

#[test]
fn every_nonempty_submission_counts_success_included() {
    let mut gate = controller();
    gate.submit("1999");
    assert_eq!(gate.attempts(), 1);
    gate.submit("2000");
    assert_eq!(gate.attempts(), 2, "the winning submission counts too");
}

#[test]
fn counter_intent_precedes_the_branch_outcome() {
    let mut gate = controller();
    let wrong = gate.submit("abc");
    assert_eq!(wrong[0], Intent::SetAttempts { used: 1, max: 10 });
    let right = gate.submit(" 2000 ");
    assert_eq!(right[0], Intent::SetAttempts { used: 2, max: 10 });
}

#[test]
fn comparison_trims_but_never_normalizes_case() {
    let mut gate = LockController::new(&GateConfig {
        answer: "SeCrEt".to_string(),
        ..GateConfig::default()
    });
    let denied = gate.submit("secret");
    assert!(
        denied.iter().any(|i| matches!(i, Intent::ShowError(_))),
        "case differences are not forgiven"
    );
    assert_eq!(gate.state(), LockState::Active);
    gate.submit("  SeCrEt  ");
    assert_eq!(
        gate.state(),
        LockState::Unlocking,
        "whitespace padding is trimmed away"
    );
}

#[test]
fn empty_input_is_rejected_without_counting() {
    let mut gate = controller();
    for raw in ["", "   ", "\t\n"] {
        let intents = gate.submit(raw);
        assert_eq!(
            intents,
            vec![
                Intent::ShowError(lock::EMPTY_INPUT_MSG.to_string()),
                Intent::FocusInput,
            ],
            "empty submission {raw:?} should only show the distinct message and refocus"
        );
    }
    assert_eq!(gate.attempts(), 0);
    assert_eq!(gate.state(), LockState::Active);
}

#[test]
fn failure_with_attempts_left_flashes_clears_and_refocuses() {
    let mut gate = controller();
    let intents = gate.submit("wrong");
    assert_eq!(
        intents,
        vec![
            Intent::SetAttempts { used: 1, max: 10 },
            Intent::ShowError(lock::denied_msg(9)),
            Intent::FlashDenied,
            Intent::ClearInput,
            Intent::FocusInput,
        ]
    );
    assert!(lock::denied_msg(9).contains("[9 attempts left]"));
}

#[test]
fn success_clears_error_marks_accepted_and_begins_reveal() {
    let mut gate = controller();
    gate.submit("wrong");
    let intents = gate.submit("2000");
    assert_eq!(
        intents,
        vec![
            Intent::SetAttempts { used: 2, max: 10 },
            Intent::HideError,
            Intent::MarkAccepted,
            Intent::BeginReveal,
        ]
    );
    assert_eq!(gate.state(), LockState::Unlocking);
    assert!(gate.is_submitting());
}

#[test]
fn success_is_accepted_exactly_once() {
    let mut gate = controller();
    gate.submit("2000");
    assert!(
        gate.submit("2000").is_empty(),
        "the success latch blocks re-entry"
    );
    assert!(gate.submit("anything").is_empty());
    assert_eq!(gate.attempts(), 1);
}

#[test]
fn exhausting_the_budget_seals_the_gate() {
    let mut gate = controller();
    for n in 1..=9u32 {
        let intents = gate.submit("wrong");
        assert!(
            intents.contains(&Intent::ShowError(lock::denied_msg(10 - n))),
            "denial {n} should name {} remaining attempts",
            10 - n
        );
    }
    let last = gate.submit("wrong");
    assert_eq!(
        last,
        vec![
            Intent::SetAttempts { used: 10, max: 10 },
            Intent::ShowError(lock::LOCKED_OUT_MSG.to_string()),
            Intent::DisableEntry,
        ],
        "the final denial has no remaining count, no flash and no refocus"
    );
    assert_eq!(gate.state(), LockState::Exhausted);
}

#[test]
fn sealed_gate_ignores_further_submissions() {
    let mut gate = controller();
    for _ in 0..10 {
        gate.submit("wrong");
    }
    assert!(
        gate.submit("2000").is_empty(),
        "even the correct code is dead after lockout"
    );
    assert!(gate.submit("wrong").is_empty());
    assert_eq!(gate.attempts(), 10, "the counter stops at the cap");
}

#[test]
fn success_on_the_final_attempt_still_unlocks() {
    let mut gate = controller();
    for _ in 0..9 {
        gate.submit("wrong");
    }
    let intents = gate.submit("2000");
    assert!(intents.contains(&Intent::BeginReveal));
    assert_eq!(gate.state(), LockState::Unlocking);
    assert_eq!(
        gate.attempts(),
        10,
        "the winning attempt may spend the last slot"
    );
}

#[test]
fn edits_always_clear_the_error() {
    let gate = controller();
    assert_eq!(gate.edited(), vec![Intent::HideError]);
}

#[test]
fn reveal_completion_reaches_the_terminal_state() {
    let mut gate = controller();
    gate.submit("2000");
    gate.reveal_complete();
    assert_eq!(gate.state(), LockState::Unlocked);
    assert!(gate.submit("2000").is_empty(), "unlocked is terminal");
}

#[test]
fn reveal_completion_requires_an_unlocking_gate() {
    let mut gate = controller();
    gate.reveal_complete();
    assert_eq!(gate.state(), LockState::Active, "no shortcut around the code");
}

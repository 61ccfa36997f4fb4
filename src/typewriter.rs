//! Character-by-character reveal of the terminal's intro line.
//!
//! Runs once at startup and is deliberately not cancellable: the cursor
//! only moves forward, whatever the lock does in the meantime.

use web_sys::Element;

use crate::sched;

/// Lead-in before the first character appears.
pub const START_DELAY_MS: u32 = 600;

/// Forward-only cursor over a fixed text. Pure; the wasm player below
/// drives it off chained one-shot timers.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    cursor: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            cursor: 0,
        }
    }

    /// Next character to reveal, advancing the cursor. `None` once the text
    /// is spent; the cursor never resets. Characters come out whole, so a
    /// multi-byte glyph is never split across ticks.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.chars.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(c)
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.chars.len()
    }

    /// Characters revealed so far.
    pub fn revealed(&self) -> usize {
        self.cursor
    }
}

// --- Player (wasm) ------------------------------------------------------------

/// Read the holder's `data-text`, blank it, and start revealing after the
/// lead-in. Each tick schedules the next while characters remain, so the
/// reveal keeps its own pace independent of everything else on the page.
pub(crate) fn begin(holder: Element, speed_ms: u32) {
    let text = holder.get_attribute("data-text").unwrap_or_default();
    holder.set_text_content(Some(""));
    let player = Typewriter::new(&text);
    sched::after(START_DELAY_MS as i32, move || {
        tick(holder, player, String::new(), speed_ms as i32);
    });
}

fn tick(holder: Element, mut player: Typewriter, mut shown: String, speed_ms: i32) {
    let Some(c) = player.next_char() else { return };
    shown.push(c);
    holder.set_text_content(Some(&shown));
    sched::after(speed_ms, move || tick(holder, player, shown, speed_ms));
}

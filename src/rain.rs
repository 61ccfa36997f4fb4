//! Ambient "matrix rain" on the backdrop canvas.
//!
//! Columns of glyphs fall at a fixed tick, leaving a fading trail; once a
//! column has passed the bottom edge it resets to the top with a small
//! independent probability, so the columns drift out of sync. The rain runs
//! forever alongside every lock state; a page without the canvas simply
//! gets no rain.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window, window};

use crate::sched;
use crate::surface::MATRIX_CANVAS;

// --- Tuning -------------------------------------------------------------------

/// Glyph pool: binary plus katakana, one picked uniformly per column per
/// tick.
pub const GLYPHS: &[&str] = &[
    "0", "1", "ア", "イ", "ウ", "エ", "オ", "カ", "キ", "ク", "ケ", "コ", "サ", "シ", "ス", "セ",
    "ソ", "タ", "チ", "ツ", "テ", "ト", "ナ", "ニ", "ヌ", "ネ", "ノ",
];
/// Square cell edge in px; also the font size and the per-tick fall step.
pub const CELL_PX: f64 = 14.0;
/// Redraw interval.
pub const TICK_MS: i32 = 60;
/// Past the bottom edge, a column resets when a uniform draw exceeds this.
pub const RESET_THRESHOLD: f64 = 0.975;

const TRAIL_FILL: &str = "rgba(10, 10, 10, 0.05)";
const GLYPH_FILL: &str = "#00ff41";

// --- PRNG (pure) --------------------------------------------------------------

/// Small xorshift generator for the visuals. Not for anything secret.
#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        // Zero would pin the sequence at zero forever.
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform draw in [0, 1].
    pub fn next_f64(&mut self) -> f64 {
        self.next_u64() as f64 / u64::MAX as f64
    }

    /// Uniform index below `len`.
    pub fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u64() % len as u64) as usize
    }
}

// --- Column field (pure) ------------------------------------------------------

/// One fall counter per column, in cell units. Built once from the initial
/// canvas width; a later resize changes the canvas backing store but not
/// this field, so a shrunken viewport just clips the extra columns off the
/// right edge.
#[derive(Debug, Clone)]
pub struct RainColumns {
    drops: Vec<f64>,
    cell_px: f64,
}

impl RainColumns {
    pub fn new(width_px: f64, cell_px: f64) -> Self {
        let columns = (width_px / cell_px).floor() as usize;
        Self {
            drops: vec![1.0; columns],
            cell_px,
        }
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    /// Horizontal pixel position of column `i`.
    pub fn x(&self, i: usize) -> f64 {
        i as f64 * self.cell_px
    }

    /// Current glyph baseline of column `i`, in px.
    pub fn fall_y(&self, i: usize) -> f64 {
        self.drops[i] * self.cell_px
    }

    /// Advance column `i` one cell. Once the glyph is past the bottom edge,
    /// a `draw` above the reset threshold sends the column back to the top;
    /// columns therefore restart independently and unevenly.
    pub fn advance(&mut self, i: usize, height_px: f64, draw: f64) {
        if self.drops[i] * self.cell_px > height_px && draw > RESET_THRESHOLD {
            self.drops[i] = 0.0;
        }
        self.drops[i] += 1.0;
    }
}

// --- Driver (wasm) ------------------------------------------------------------

/// Locate the canvas and start the interval. A page without the canvas (or
/// without a 2d context) gets no rain and no error: the effect is ambient,
/// never load-bearing.
pub(crate) fn begin(win: &Window, doc: &Document) -> Result<(), JsValue> {
    let Some(el) = doc.get_element_by_id(MATRIX_CANVAS) else {
        return Ok(());
    };
    let Ok(canvas) = el.dyn_into::<HtmlCanvasElement>() else {
        return Ok(());
    };
    let Ok(Some(ctx_obj)) = canvas.get_context("2d") else {
        return Ok(());
    };
    let Ok(ctx) = ctx_obj.dyn_into::<CanvasRenderingContext2d>() else {
        return Ok(());
    };

    fit_viewport(win, &canvas);
    {
        let canvas = canvas.clone();
        let cb = Closure::wrap(Box::new(move || {
            if let Some(w) = window() {
                fit_viewport(&w, &canvas);
            }
        }) as Box<dyn FnMut()>);
        win.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    let mut field = RainColumns::new(canvas.width() as f64, CELL_PX);
    let mut rng = XorShift64::new(seed(win));
    sched::every(TICK_MS, move || {
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;

        // Translucent pass over the previous frame leaves the fading trail.
        ctx.set_fill_style_str(TRAIL_FILL);
        ctx.fill_rect(0.0, 0.0, width, height);

        // Canvas state resets whenever the backing store is resized, so the
        // glyph fill and font are set per tick.
        ctx.set_fill_style_str(GLYPH_FILL);
        ctx.set_font(&format!("{CELL_PX}px monospace"));
        for i in 0..field.columns() {
            let glyph = GLYPHS[rng.next_index(GLYPHS.len())];
            ctx.fill_text(glyph, field.x(i), field.fall_y(i)).ok();
            field.advance(i, height, rng.next_f64());
        }
    });
    Ok(())
}

fn fit_viewport(win: &Window, canvas: &HtmlCanvasElement) {
    let width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

/// Seed for the visual PRNG: browser entropy when the `rng` feature is on,
/// otherwise a clock-derived value.
fn seed(win: &Window) -> u64 {
    #[cfg(feature = "rng")]
    {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_ok() {
            return u64::from_le_bytes(buf);
        }
    }
    let now = win.performance().map(|p| p.now()).unwrap_or(0.0);
    now.to_bits().wrapping_mul(1664525).wrapping_add(1013904223)
}

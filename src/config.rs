//! Build-time configuration for the gate widget.
//!
//! All knobs are fixed at compile time; there is no runtime configuration
//! surface. The optional `serde` feature adds derives so host tooling can
//! embed or inspect the record.

/// Tunables for the lock, the typewriter and the unlock choreography.
///
/// Presentation constants that belong to a single animation (rain cell size,
/// stagger step, flash hold) live as consts next to their consumer instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateConfig {
    /// Expected unlock code; compared exactly after trimming.
    pub answer: String,
    /// Counted submissions allowed before the gate locks out.
    pub max_attempts: u32,
    /// Typewriter delay per revealed character.
    pub typing_speed_ms: u32,
    /// Delay from a correct submission to the panel swap. Independent of the
    /// progress fill; the swap fires on its own timer.
    pub unlock_delay_ms: u32,
    /// How long the progress fill takes to visually complete.
    pub progress_duration_ms: u32,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            answer: "2000".to_string(),
            max_attempts: 10,
            typing_speed_ms: 40,
            unlock_delay_ms: 1800,
            progress_duration_ms: 1500,
        }
    }
}

//! Millisecond to tick quantization
//!
//! The consuming runtime advances on a fixed tick. Source durations are
//! floor-divided into whole steps of `tick_ms` and each step is worth
//! `ticks_per_step` ticks. The default (50ms per 3 ticks) matches a 60Hz
//! runtime. Rounding is always down, so sources should use durations that are
//! multiples of `tick_ms` to avoid drift.

use serde::{Deserialize, Serialize};

/// Default milliseconds per quantization step.
pub const DEFAULT_TICK_MS: u32 = 50;
/// Default ticks awarded per quantization step.
pub const DEFAULT_TICKS_PER_STEP: u32 = 3;

/// Conversion rate between source milliseconds and runtime ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRate {
    /// Size of one quantization step in milliseconds (must be > 0)
    pub tick_ms: u32,
    /// Ticks per quantization step
    pub ticks_per_step: u32,
}

impl Default for TickRate {
    fn default() -> Self {
        Self { tick_ms: DEFAULT_TICK_MS, ticks_per_step: DEFAULT_TICKS_PER_STEP }
    }
}

impl TickRate {
    pub fn new(tick_ms: u32, ticks_per_step: u32) -> Self {
        Self { tick_ms, ticks_per_step }
    }

    /// Quantize a millisecond duration to ticks.
    ///
    /// A zero `tick_ms` yields zero ticks instead of dividing by zero; config
    /// validation rejects that rate before it reaches the decoder.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheetanim::timing::TickRate;
    ///
    /// let rate = TickRate::default();
    /// assert_eq!(rate.quantize(150), 9);
    /// assert_eq!(rate.quantize(149), 6);
    /// assert_eq!(rate.quantize(0), 0);
    /// ```
    pub fn quantize(&self, duration_ms: u32) -> u32 {
        if self.tick_ms == 0 {
            return 0;
        }
        (duration_ms / self.tick_ms).saturating_mul(self.ticks_per_step)
    }
}

/// Quantize with the default 50ms-per-3-ticks rate.
pub fn quantize(duration_ms: u32) -> u32 {
    TickRate::default().quantize(duration_ms)
}

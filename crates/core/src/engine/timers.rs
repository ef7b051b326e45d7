//! Burn-timer store: remaining burn duration per cell
//!
//! The timer field is owned state passed alongside the grid for the
//! lifetime of one run. It only ever touches its own layer; the transition
//! engine is responsible for turning expired timers into burnt cells.

use rand::Rng;
use rayon::prelude::*;

use crate::core_types::{BurnBehavior, Layer};

/// Spread applied to sampled burn durations, so burn lengths vary per fire
/// instance rather than only per land type
const DURATION_JITTER: std::ops::Range<f32> = 0.8..1.2;

/// Per-cell remaining-burn-duration counters
///
/// Zero everywhere at run start. A cell's timer is armed when it ignites,
/// decremented once per generation, and forces burnout when it reaches zero.
#[derive(Debug, Clone, PartialEq)]
pub struct BurnTimerField {
    timers: Layer<u32>,
}

impl BurnTimerField {
    /// Create a timer field with every counter at zero
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        BurnTimerField {
            timers: Layer::with_value(width, height, 0),
        }
    }

    pub fn width(&self) -> usize {
        self.timers.width()
    }

    pub fn height(&self) -> usize {
        self.timers.height()
    }

    /// Count down every cell by one generation, saturating at zero
    ///
    /// Applied once per generation, before burnout resolution.
    pub fn decrement_all(&mut self) {
        self.timers
            .as_mut_slice()
            .par_iter_mut()
            .for_each(|t| *t = t.saturating_sub(1));
    }

    /// Arm a newly ignited cell with a jittered burn duration
    ///
    /// Samples `round(duration_base * U(0.8, 1.2))` generations.
    pub fn arm<R: Rng>(&mut self, x: usize, y: usize, behavior: &BurnBehavior, rng: &mut R) {
        let jitter = rng.random_range(DURATION_JITTER);
        let duration = (behavior.duration_base as f32 * jitter).round() as u32;
        self.timers.set(x, y, duration);
    }

    /// True once the cell's timer has run out
    #[must_use]
    pub fn is_expired(&self, x: usize, y: usize) -> bool {
        self.timers.get(x, y) == 0
    }

    /// Remaining generations for a cell
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.timers.get(x, y)
    }

    /// Overwrite one cell's counter; scenario/test setup only
    pub fn set(&mut self, x: usize, y: usize, value: u32) {
        self.timers.set(x, y, value);
    }

    /// Flat row-major view of the counters
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        self.timers.as_slice()
    }
}

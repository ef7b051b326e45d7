//! Wind model: direction + speed to per-offset ignition multipliers
//!
//! The 8-neighbourhood is always traversed in the canonical order
//! NW, N, NE, W, E, SW, S, SE. For a given wind the three offsets facing
//! the wind direction are boosted by `1 + speed`, the three facing away are
//! damped by `1 - speed`, and the two lateral offsets are untouched.

use serde::{Deserialize, Serialize};

/// Neighbour offsets `(dx, dy)` in canonical order: NW, N, NE, W, E, SW, S, SE
///
/// `dy` grows southward (increasing row index).
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Cardinal wind direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDirection {
    North,
    East,
    South,
    West,
}

/// Wind state for one run (or one generation, if the host varies it)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub direction: WindDirection,
    /// Strength in [0, 1]; clamped before any weight computation
    pub speed: f32,
}

impl Wind {
    pub fn new(direction: WindDirection, speed: f32) -> Self {
        Wind { direction, speed }
    }

    /// No wind: every offset weight is 1
    pub fn calm() -> Self {
        Wind {
            direction: WindDirection::North,
            speed: 0.0,
        }
    }

    /// Per-offset ignition multipliers in canonical neighbour order
    ///
    /// Speed is clamped into [0, 1] first, so weights stay within [0, 2].
    /// Stateless; callers may cache the vector while the wind is constant.
    #[must_use]
    pub fn multiplier_vector(&self) -> [f32; 8] {
        let speed = self.speed.clamp(0.0, 1.0);
        let boost = 1.0 + speed;
        let damp = 1.0 - speed;

        // [NW, N, NE,
        //  W,      E,
        //  SW, S, SE]
        match self.direction {
            WindDirection::North => [boost, boost, boost, 1.0, 1.0, damp, damp, damp],
            WindDirection::East => [damp, 1.0, boost, damp, boost, damp, 1.0, boost],
            WindDirection::South => [damp, damp, damp, 1.0, 1.0, boost, boost, boost],
            WindDirection::West => [boost, 1.0, damp, boost, damp, boost, 1.0, damp],
        }
    }
}

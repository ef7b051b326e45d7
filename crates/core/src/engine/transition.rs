//! Per-generation transition rules
//!
//! One step is three ordered phases over the whole grid:
//!
//! 1. Burnout: timers count down; burning cells with expired timers become
//!    burnt. Runs first so a cell cannot ignite and burn out in the same
//!    evaluation.
//! 2. Ignition pressure: wind-weighted, normalized burning influence from
//!    the 8-neighbour snapshot.
//! 3. Ignition: alive burnable cells sample against a probability
//!    interpolated between the land type's bounds, except that zero
//!    pressure always means zero probability.
//!
//! The engine is pure and total over well-formed inputs: shape mismatches
//! panic before any mutation, out-of-range probabilities clamp.

use rand::Rng;
use rayon::prelude::*;

use super::neighbourhood::NeighbourSnapshot;
use super::timers::BurnTimerField;
use crate::core_types::{CellState, FireStatus, LandCoverCatalog, Layer, Wind};

/// Wind-weighted ignition pressure per cell, in `[0, 1 + speed]`
///
/// Each burning neighbour contributes 1 regardless of its land type,
/// weighted by the wind multiplier for its offset; the dot product is
/// normalized by the neighbourhood size. Off-grid offsets contribute
/// nothing.
#[must_use]
pub fn ignition_pressure(snapshot: &NeighbourSnapshot, wind: Wind) -> Layer<f32> {
    let multipliers = wind.multiplier_vector();
    let mut pressure = Layer::with_value(snapshot.width(), snapshot.height(), 0.0_f32);

    pressure
        .as_mut_slice()
        .par_iter_mut()
        .zip(snapshot.states().as_slice().par_iter())
        .zip(snapshot.burning_counts().as_slice().par_iter())
        .for_each(|((cell_pressure, neighbours), &burning)| {
            if burning == 0 {
                return;
            }
            let mut weighted = 0.0_f32;
            for (slot, neighbour) in neighbours.iter().enumerate() {
                if neighbour.is_some_and(CellState::is_burning) {
                    weighted += multipliers[slot];
                }
            }
            *cell_pressure = weighted / 8.0;
        });

    pressure
}

/// Advance the grid by one generation
///
/// `snapshot` must be captured from `grid` before the call; `timers` is
/// mutated in place (countdown in phase 1, arming in phase 3). Returns the
/// next grid. Ignition draws walk cells in row-major order, so a run is
/// fully reproducible from its seed.
///
/// # Panics
///
/// Panics when grid, snapshot and timer dimensions disagree.
pub fn step<R: Rng>(
    grid: &Layer<CellState>,
    snapshot: &NeighbourSnapshot,
    wind: Wind,
    catalog: &LandCoverCatalog,
    timers: &mut BurnTimerField,
    rng: &mut R,
) -> Layer<CellState> {
    assert!(
        snapshot.states().same_shape(grid),
        "neighbour snapshot is {}x{} but grid is {}x{}",
        snapshot.width(),
        snapshot.height(),
        grid.width(),
        grid.height()
    );
    assert!(
        timers.width() == grid.width() && timers.height() == grid.height(),
        "timer field is {}x{} but grid is {}x{}",
        timers.width(),
        timers.height(),
        grid.width(),
        grid.height()
    );

    let mut next = grid.clone();

    // Phase 1: burnout resolution
    timers.decrement_all();
    next.as_mut_slice()
        .par_iter_mut()
        .zip(timers.as_slice().par_iter())
        .for_each(|(cell, &timer)| {
            if cell.is_burning() && timer == 0 {
                cell.status = FireStatus::Burnt;
            }
        });

    // Phase 2: ignition pressure from the pre-step snapshot
    let pressure = ignition_pressure(snapshot, wind);

    // Phase 3: probabilistic ignition of alive burnable cells
    for y in 0..next.height() {
        for x in 0..next.width() {
            let cell = next.get(x, y);
            if !cell.is_alive() {
                continue;
            }
            let Some(behavior) = catalog.behavior(cell.land) else {
                continue;
            };
            let cell_pressure = pressure.get(x, y);
            if cell_pressure <= 0.0 {
                // A cell with no burning neighbours never ignites, even
                // though prob_min is nonzero.
                continue;
            }
            let prob = (behavior.prob_min
                + cell_pressure * (behavior.prob_max - behavior.prob_min))
                .clamp(0.0, 1.0);
            if rng.random::<f32>() < prob {
                next.set(
                    x,
                    y,
                    CellState {
                        land: cell.land,
                        status: FireStatus::Burning,
                    },
                );
                timers.arm(x, y, behavior, rng);
            }
        }
    }

    next
}

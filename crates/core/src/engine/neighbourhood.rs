//! Pre-step neighbourhood capture
//!
//! The transition engine never reads the live grid for neighbour data; it
//! reads a snapshot captured before the step, so no cell can observe
//! another cell's next-generation state. Edge cells have fewer than 8
//! neighbours and there is no wrap-around adjacency.

use rayon::prelude::*;

use crate::core_types::{CellState, Layer, NEIGHBOUR_OFFSETS};

/// The 8 neighbour states around one cell, in canonical offset order
///
/// `None` marks an off-grid position.
pub type NeighbourStates = [Option<CellState>; 8];

/// Per-cell neighbour data for one generation
///
/// Holds the full neighbour-state layer (positional information needed for
/// the wind-weighted dot product) and the derived burning-neighbour counts
/// (the counts-by-state view of the same snapshot).
#[derive(Debug, Clone, PartialEq)]
pub struct NeighbourSnapshot {
    states: Layer<NeighbourStates>,
    burning_counts: Layer<u8>,
}

impl NeighbourSnapshot {
    /// Capture the neighbourhood of every cell in the current grid
    #[must_use]
    pub fn capture(grid: &Layer<CellState>) -> Self {
        let width = grid.width();
        let height = grid.height();
        let mut states: Layer<NeighbourStates> = Layer::with_value(width, height, [None; 8]);
        let mut burning_counts: Layer<u8> = Layer::with_value(width, height, 0);

        states
            .as_mut_slice()
            .par_chunks_mut(width)
            .zip(burning_counts.as_mut_slice().par_chunks_mut(width))
            .enumerate()
            .for_each(|(y, (state_row, count_row))| {
                for x in 0..width {
                    let mut neighbours: NeighbourStates = [None; 8];
                    let mut burning = 0_u8;
                    for (slot, &(dx, dy)) in NEIGHBOUR_OFFSETS.iter().enumerate() {
                        let nx = x as i64 + i64::from(dx);
                        let ny = y as i64 + i64::from(dy);
                        if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                            continue;
                        }
                        let state = grid.get(nx as usize, ny as usize);
                        neighbours[slot] = Some(state);
                        if state.is_burning() {
                            burning += 1;
                        }
                    }
                    state_row[x] = neighbours;
                    count_row[x] = burning;
                }
            });

        NeighbourSnapshot {
            states,
            burning_counts,
        }
    }

    /// Full neighbour states per cell
    #[must_use]
    pub fn states(&self) -> &Layer<NeighbourStates> {
        &self.states
    }

    /// Number of burning neighbours per cell
    #[must_use]
    pub fn burning_counts(&self) -> &Layer<u8> {
        &self.burning_counts
    }

    pub fn width(&self) -> usize {
        self.states.width()
    }

    pub fn height(&self) -> usize {
        self.states.height()
    }
}

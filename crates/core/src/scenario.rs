//! Scenario setup: painting the landscape and seeding ignitions
//!
//! A scenario paints rectangular land-cover regions over a uniform
//! background, then flips selected cells to burning and arms their timers.
//! Scenarios are configuration data and can be loaded from or saved to
//! JSON files.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core_types::{CellState, FireStatus, LandCoverCatalog, LandType, Layer};
use crate::engine::BurnTimerField;

/// One rectangular land-cover override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub land: LandType,
    /// Left column of the rectangle
    pub x: usize,
    /// Top row of the rectangle
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Initial landscape description for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub width: usize,
    pub height: usize,
    /// Uniform fill applied before any region override
    pub background: LandType,
    /// Overrides painted in order; later regions win on overlap
    pub regions: Vec<Region>,
    /// Cells set alight at generation zero
    pub ignitions: Vec<(usize, usize)>,
}

impl Scenario {
    /// The stock 50x50 landscape: chaparral plain cut by a scrubland
    /// canyon, with a forest block, a lake and a town, lit at the
    /// north-west corner
    #[must_use]
    pub fn classic_landscape() -> Self {
        Scenario {
            width: 50,
            height: 50,
            background: LandType::Chaparral,
            regions: vec![
                Region {
                    land: LandType::DenseForest,
                    x: 5,
                    y: 14,
                    width: 14,
                    height: 22,
                },
                Region {
                    land: LandType::Scrubland,
                    x: 30,
                    y: 0,
                    width: 4,
                    height: 36,
                },
                Region {
                    land: LandType::Lake,
                    x: 14,
                    y: 5,
                    width: 12,
                    height: 4,
                },
                Region {
                    land: LandType::Town,
                    x: 18,
                    y: 42,
                    width: 7,
                    height: 5,
                },
            ],
            ignitions: vec![(0, 0)],
        }
    }

    /// Materialize the scenario into a state grid and an armed timer field
    ///
    /// Setup only: the sole stochastic element is the burn-duration jitter
    /// applied when arming ignition seeds.
    ///
    /// # Panics
    ///
    /// Panics when a region or ignition seed falls outside the grid, or an
    /// ignition seed targets a non-burnable cell; these are configuration
    /// errors, not runtime conditions.
    pub fn build<R: Rng>(
        &self,
        catalog: &LandCoverCatalog,
        rng: &mut R,
    ) -> (Layer<CellState>, BurnTimerField) {
        let mut grid = Layer::with_value(self.width, self.height, CellState::alive(self.background));

        for region in &self.regions {
            assert!(
                region.x + region.width <= self.width && region.y + region.height <= self.height,
                "region {:?} extends outside the {}x{} grid",
                region,
                self.width,
                self.height
            );
            for y in region.y..region.y + region.height {
                for x in region.x..region.x + region.width {
                    grid.set(x, y, CellState::alive(region.land));
                }
            }
        }

        let mut timers = BurnTimerField::new(self.width, self.height);
        for &(x, y) in &self.ignitions {
            assert!(
                x < self.width && y < self.height,
                "ignition seed ({x}, {y}) outside the {}x{} grid",
                self.width,
                self.height
            );
            let cell = grid.get(x, y);
            let Some(behavior) = catalog.behavior(cell.land) else {
                panic!(
                    "ignition seed ({x}, {y}) targets non-burnable {}",
                    cell.land.name()
                );
            };
            grid.set(
                x,
                y,
                CellState {
                    land: cell.land,
                    status: FireStatus::Burning,
                },
            );
            timers.arm(x, y, behavior, rng);
        }

        (grid, timers)
    }

    /// Load a scenario from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ScenarioError::LoadFailed(e.to_string()))?;
        let scenario: Self =
            serde_json::from_str(&contents).map_err(|e| ScenarioError::ParseFailed(e.to_string()))?;
        Ok(scenario)
    }

    /// Save a scenario to a JSON file
    ///
    /// # Errors
    /// Returns an error if the scenario cannot be serialized or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ScenarioError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ScenarioError::SerializeFailed(e.to_string()))?;
        fs::write(path, contents).map_err(|e| ScenarioError::SaveFailed(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur when loading or saving scenario files
#[derive(Debug)]
pub enum ScenarioError {
    /// Failed to load file
    LoadFailed(String),
    /// Failed to parse file contents
    ParseFailed(String),
    /// Failed to serialize scenario
    SerializeFailed(String),
    /// Failed to save file
    SaveFailed(String),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::LoadFailed(msg) => write!(f, "Failed to load: {msg}"),
            ScenarioError::ParseFailed(msg) => write!(f, "Failed to parse: {msg}"),
            ScenarioError::SerializeFailed(msg) => write!(f, "Failed to serialize: {msg}"),
            ScenarioError::SaveFailed(msg) => write!(f, "Failed to save: {msg}"),
        }
    }
}

impl std::error::Error for ScenarioError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_background_fill_and_region_precedence() {
        let scenario = Scenario {
            width: 6,
            height: 6,
            background: LandType::Chaparral,
            regions: vec![
                Region {
                    land: LandType::DenseForest,
                    x: 0,
                    y: 0,
                    width: 4,
                    height: 4,
                },
                Region {
                    land: LandType::Lake,
                    x: 2,
                    y: 2,
                    width: 2,
                    height: 2,
                },
            ],
            ignitions: Vec::new(),
        };
        let mut rng = StdRng::seed_from_u64(0);
        let (grid, timers) = scenario.build(&LandCoverCatalog::standard(), &mut rng);

        assert_eq!(grid.get(5, 5).land, LandType::Chaparral);
        assert_eq!(grid.get(1, 1).land, LandType::DenseForest);
        // Later region wins on overlap
        assert_eq!(grid.get(2, 2).land, LandType::Lake);
        assert!(grid.as_slice().iter().all(|c| c.is_alive()));
        assert!(timers.as_slice().iter().all(|&t| t == 0));
    }

    #[test]
    fn test_ignition_seed_burns_and_arms_timer() {
        let scenario = Scenario {
            width: 4,
            height: 4,
            background: LandType::Scrubland,
            regions: Vec::new(),
            ignitions: vec![(1, 2)],
        };
        let catalog = LandCoverCatalog::standard();
        let mut rng = StdRng::seed_from_u64(3);
        let (grid, timers) = scenario.build(&catalog, &mut rng);

        assert!(grid.get(1, 2).is_burning());
        let base = catalog.behavior(LandType::Scrubland).unwrap().duration_base;
        let armed = timers.get(1, 2);
        let lo = (base as f32 * 0.8).round() as u32;
        let hi = (base as f32 * 1.2).round() as u32;
        assert!((lo..=hi).contains(&armed), "armed timer {armed} out of band");
    }

    #[test]
    #[should_panic(expected = "targets non-burnable Lake")]
    fn test_ignition_on_lake_is_rejected() {
        let scenario = Scenario {
            width: 4,
            height: 4,
            background: LandType::Lake,
            regions: Vec::new(),
            ignitions: vec![(0, 0)],
        };
        let mut rng = StdRng::seed_from_u64(0);
        let _ = scenario.build(&LandCoverCatalog::standard(), &mut rng);
    }

    #[test]
    #[should_panic(expected = "extends outside")]
    fn test_out_of_bounds_region_is_rejected() {
        let scenario = Scenario {
            width: 4,
            height: 4,
            background: LandType::Chaparral,
            regions: vec![Region {
                land: LandType::Lake,
                x: 2,
                y: 2,
                width: 4,
                height: 1,
            }],
            ignitions: Vec::new(),
        };
        let mut rng = StdRng::seed_from_u64(0);
        let _ = scenario.build(&LandCoverCatalog::standard(), &mut rng);
    }

    #[test]
    fn test_classic_landscape_fits_its_grid() {
        let scenario = Scenario::classic_landscape();
        let mut rng = StdRng::seed_from_u64(0);
        let (grid, _) = scenario.build(&LandCoverCatalog::standard(), &mut rng);
        assert_eq!(grid.width(), 50);
        assert_eq!(grid.height(), 50);
        assert!(grid.get(0, 0).is_burning());
        assert_eq!(grid.get(20, 6).land, LandType::Lake);
        assert_eq!(grid.get(20, 44).land, LandType::Town);
        assert_eq!(grid.get(10, 20).land, LandType::DenseForest);
        assert_eq!(grid.get(31, 10).land, LandType::Scrubland);
    }
}

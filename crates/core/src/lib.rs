//! Wildfire Cellular Automaton Core Library
//!
//! Models wildfire propagation across a 2-D landscape as a probabilistic
//! cellular automaton. Each cell holds a land-cover type and a fire status;
//! every generation, burning cells count down a jittered burn timer while
//! their alive neighbours sample ignition against a wind-weighted pressure
//! from the 8-neighbourhood.
//!
//! ## Structure
//!
//! - [`core_types`]: cell state model, per-cell layers, land-cover catalog
//!   and wind model
//! - [`engine`]: burn timers, neighbourhood snapshots, the per-generation
//!   transition and the run orchestrator
//! - [`scenario`]: landscape painting and ignition seeding

// Core types and utilities
pub mod core_types;

// Simulation engine
pub mod engine;

// Scenario setup
pub mod scenario;

// Re-export core types
pub use core_types::{BurnBehavior, CellState, FireStatus, LandCoverCatalog, LandType};
pub use core_types::{Layer, Wind, WindDirection, NEIGHBOUR_OFFSETS};

// Re-export engine types
pub use engine::{ignition_pressure, step, BurnTimerField, FireCounts, NeighbourSnapshot, Simulation};

// Re-export scenario types
pub use scenario::{Region, Scenario, ScenarioError};

//! Core types and utilities

pub mod catalog;
pub mod cell;
pub mod layer;
pub mod wind;

pub use catalog::{BurnBehavior, LandCoverCatalog};
pub use cell::{CellState, FireStatus, LandType};
pub use layer::Layer;
pub use wind::{Wind, WindDirection, NEIGHBOUR_OFFSETS};

//! Simulation engine: timers, neighbourhood capture, transition, run loop

pub mod neighbourhood;
pub mod simulation;
pub mod timers;
pub mod transition;

pub use neighbourhood::{NeighbourSnapshot, NeighbourStates};
pub use simulation::{FireCounts, Simulation};
pub use timers::BurnTimerField;
pub use transition::{ignition_pressure, step};

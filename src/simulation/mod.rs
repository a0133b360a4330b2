//! Monte-Carlo batch simulation.
//!
//! Runs many independent games to completion and aggregates winner
//! frequencies and game lengths. Trials share nothing but the final tally,
//! so the runner can execute them serially or across a rayon thread pool
//! and produce the identical report either way.

pub mod report;
pub mod runner;

pub use report::{GameOutcome, SimulationReport};
pub use runner::{Simulation, SimulationConfig};

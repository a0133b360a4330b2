//! # panda-dice
//!
//! A dice-pool elimination game engine with a Monte-Carlo batch simulator.
//!
//! Each player rolls a pool of six-sided symbolic dice per turn. Symbols move
//! dice between players: water dice are discarded, panda dice are gifted to
//! another player, and bamboo dice flow from the previous player in turn order
//! to the current one. The first player to reach an empty pool ends the game,
//! and a winner is declared by turn-order tie-break.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows through a seedable [`GameRng`].
//!    The same seed always produces the same game, turn for turn.
//!
//! 2. **Observation Without Interference**: Game logic never prints. Callers
//!    attach a [`RoundObserver`] to receive per-turn snapshots; the engine
//!    behaves identically with or without one.
//!
//! 3. **Per-Instance State**: Every `Game` owns its players, RNG, and
//!    lowest-player tracking. Nothing is shared across games, which is what
//!    makes batch trials embarrassingly parallel.
//!
//! ## Modules
//!
//! - `core`: Dice faces, players, RNG
//! - `game`: Configuration, the round state machine, the observer boundary
//! - `simulation`: Serial and parallel Monte-Carlo batch runner

pub mod core;
pub mod game;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{Dice, Face, FaceCounts, GameRng, Player, PlayerId};

pub use crate::game::{
    face_glyph, ConfigError, Game, GameConfig, NullObserver, RecordingObserver, RoundObserver,
    RoundSnapshot, TurnPhase,
};

pub use crate::simulation::{GameOutcome, Simulation, SimulationConfig, SimulationReport};

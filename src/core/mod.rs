//! Core engine types: dice faces, players, RNG.
//!
//! These are the leaf building blocks the game engine is assembled from.
//! Nothing in here knows about rounds, transfers, or winners.

pub mod dice;
pub mod player;
pub mod rng;

pub use dice::{Dice, Face, FaceCounts};
pub use player::{Player, PlayerId};
pub use rng::GameRng;

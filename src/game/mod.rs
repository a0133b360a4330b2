//! Game configuration, the round state machine, and the observer boundary.

pub mod config;
pub mod engine;
pub mod observer;

pub use config::{ConfigError, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use engine::Game;
pub use observer::{face_glyph, NullObserver, RecordingObserver, RoundObserver, RoundSnapshot, TurnPhase};

//! The observer boundary: per-turn snapshots and display glyphs.
//!
//! Game logic never prints. It emits a [`RoundSnapshot`] before and after
//! each turn's resolution to whatever [`RoundObserver`] the caller attaches,
//! and behaves identically when none is. Display glyphs for faces live here
//! and only here; the engine compares `Face` values, never strings.

use serde::{Deserialize, Serialize};

use crate::core::{Face, PlayerId};

/// Where in a turn a snapshot was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// After the roll, before any transfers resolved.
    Before,
    /// After water, panda, and bamboo resolved.
    After,
}

/// The table as visible at one emission point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Completed full rounds so far (0 during the first round).
    pub round: u32,
    /// The player whose turn is resolving.
    pub acting_player: PlayerId,
    /// Before or after resolution.
    pub phase: TurnPhase,
    /// Every player's pool count, indexed by player id.
    pub dice_pools: Vec<u32>,
    /// Every player's visible token row, indexed by player id.
    pub tokens: Vec<Vec<Face>>,
}

impl RoundSnapshot {
    /// Render one table row: round, actor, phase, then each player's tokens
    /// as glyphs. Suitable for a console table; the engine never calls this.
    #[must_use]
    pub fn render_row(&self) -> String {
        let mut row = format!(
            "{:<3}{:<3}{:<7}",
            self.round,
            self.acting_player.index(),
            match self.phase {
                TurnPhase::Before => "before",
                TurnPhase::After => "after",
            }
        );
        for tokens in &self.tokens {
            let glyphs: String = tokens.iter().map(|f| face_glyph(*f)).collect();
            row.push_str(&format!("{:^15}", glyphs));
        }
        row
    }
}

/// Display glyph for a face.
#[must_use]
pub fn face_glyph(face: Face) -> &'static str {
    match face {
        Face::Blank => "⬜",
        Face::Panda => "🐼",
        Face::Bamboo => "🎋",
        Face::Water => "💧",
        Face::Added => "➕",
    }
}

/// Receives round-state snapshots from a running game.
///
/// Observers are presentation-only collaborators: they may not influence
/// game state, and the engine must produce the same game with or without one.
pub trait RoundObserver {
    /// Called at the two emission points of every turn.
    fn on_turn(&mut self, snapshot: &RoundSnapshot);

    /// Called when `play_round` is invoked on an already-finished game.
    fn on_finished_game(&mut self) {}
}

/// Observer that ignores everything. Used when no observer is attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl RoundObserver for NullObserver {
    fn on_turn(&mut self, _snapshot: &RoundSnapshot) {}
}

/// Observer that keeps every snapshot. Useful for tests and analysis.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    /// All snapshots in emission order.
    pub snapshots: Vec<RoundSnapshot>,
    /// How many times `play_round` was called after the game finished.
    pub finished_notices: u32,
}

impl RecordingObserver {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoundObserver for RecordingObserver {
    fn on_turn(&mut self, snapshot: &RoundSnapshot) {
        self.snapshots.push(snapshot.clone());
    }

    fn on_finished_game(&mut self) {
        self.finished_notices += 1;
    }
}

//! Player identification and per-player dice state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting up to 255 players.
//!
//! ## Player
//!
//! A player owns a dice pool (a count), the visible token row on the table,
//! and per-roll plus cumulative face statistics. The pool count and the token
//! row are maintained separately: `remove_dice` clears every token of the
//! removed face but decrements the pool by the counted quantity, so the two
//! can drift apart mid-turn. That is the table-rules behavior this engine
//! reproduces; the pool count is authoritative for all game decisions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Dice, Face, FaceCounts, GameRng};

/// Player identifier. Indices are 0-based and double as turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Inline capacity for token rows. Pools start at 4-6 dice and rarely grow
/// far past that, so most games never touch the heap.
type TokenRow = SmallVec<[Face; 8]>;

/// One player's dice state for the lifetime of a game.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    dice_pool: u32,
    tokens: TokenRow,
    last_roll: FaceCounts,
    cumulative: FaceCounts,
}

impl Player {
    /// Create a player with `dice_pool` dice, showing blank placeholders
    /// until the first roll.
    #[must_use]
    pub fn new(id: PlayerId, dice_pool: u32) -> Self {
        Self {
            id,
            dice_pool,
            tokens: std::iter::repeat(Face::Blank)
                .take(dice_pool as usize)
                .collect(),
            last_roll: FaceCounts::default(),
            cumulative: FaceCounts::default(),
        }
    }

    /// This player's ID.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Number of dice currently owned.
    #[must_use]
    pub fn dice_pool(&self) -> u32 {
        self.dice_pool
    }

    /// The visible token row, most recent roll first-to-last plus any
    /// mid-turn additions.
    #[must_use]
    pub fn tokens(&self) -> &[Face] {
        &self.tokens
    }

    /// Face counts from the most recent roll.
    #[must_use]
    pub fn last_roll(&self) -> &FaceCounts {
        &self.last_roll
    }

    /// Running face totals across all rolls this game. Observational only;
    /// no rule reads these.
    #[must_use]
    pub fn cumulative(&self) -> &FaceCounts {
        &self.cumulative
    }

    /// Roll the whole pool.
    ///
    /// Replaces the token row wholesale, recomputes the per-roll counts, and
    /// accumulates them into the cumulative totals. A player with an empty
    /// pool rolls nothing and ends up with an empty row.
    pub fn roll(&mut self, rng: &mut GameRng) {
        self.tokens.clear();
        for _ in 0..self.dice_pool {
            self.tokens.push(Dice::roll(rng));
        }
        self.last_roll = FaceCounts::from_tokens(&self.tokens);
        self.cumulative.accumulate(&self.last_roll);
    }

    /// Gain `n` dice, shown as `Added` markers until the next roll.
    pub fn add_dice(&mut self, n: u32) {
        self.dice_pool += n;
        for _ in 0..n {
            self.tokens.push(Face::Added);
        }
    }

    /// Lose `n` dice of the given face.
    ///
    /// Clears every token showing `face` from the row and decrements the pool
    /// by exactly `n`, saturating at zero. The pool never goes negative.
    pub fn remove_dice(&mut self, n: u32, face: Face) {
        self.tokens.retain(|token| *token != face);
        self.dice_pool = self.dice_pool.saturating_sub(n);
    }
}

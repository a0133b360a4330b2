//! Dice faces and the face sampler.
//!
//! A die has six slots: three blank, one panda, one bamboo, one water.
//! Blank therefore lands with probability 3/6 and each symbol with 1/6.
//! Faces are a closed enum used for all game logic; display glyphs live at
//! the observer boundary, never here.

use serde::{Deserialize, Serialize};

use super::GameRng;

/// One face of a die, or a bookkeeping marker in a player's token row.
///
/// `Added` never comes up on a roll: it marks dice gained mid-turn through
/// panda or bamboo transfers, before the owner's next re-roll replaces the
/// whole row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// No effect.
    Blank,
    /// Gifted to another player on resolution.
    Panda,
    /// Flows from the previous player in turn order.
    Bamboo,
    /// Discarded from circulation on resolution.
    Water,
    /// Placeholder for a die gained mid-turn.
    Added,
}

/// Stateless face sampler.
#[derive(Clone, Copy, Debug)]
pub struct Dice;

impl Dice {
    /// The six slots of a die. Blank occupies three of them.
    pub const FACES: [Face; 6] = [
        Face::Blank,
        Face::Blank,
        Face::Blank,
        Face::Panda,
        Face::Bamboo,
        Face::Water,
    ];

    /// Draw one face uniformly from the six slots.
    #[must_use]
    pub fn roll(rng: &mut GameRng) -> Face {
        Self::FACES[rng.gen_range_usize(0..Self::FACES.len())]
    }
}

/// Counts of each rollable face in a roll (or accumulated across rolls).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceCounts {
    /// Blank faces.
    pub blank: u32,
    /// Panda faces.
    pub panda: u32,
    /// Bamboo faces.
    pub bamboo: u32,
    /// Water faces.
    pub water: u32,
}

impl FaceCounts {
    /// Count the rollable faces in a token sequence.
    ///
    /// `Added` markers are not roll outcomes and are ignored.
    #[must_use]
    pub fn from_tokens(tokens: &[Face]) -> Self {
        let mut counts = Self::default();
        for face in tokens {
            counts.record(*face);
        }
        counts
    }

    /// Record one face.
    pub fn record(&mut self, face: Face) {
        match face {
            Face::Blank => self.blank += 1,
            Face::Panda => self.panda += 1,
            Face::Bamboo => self.bamboo += 1,
            Face::Water => self.water += 1,
            Face::Added => {}
        }
    }

    /// Add another set of counts into this one.
    pub fn accumulate(&mut self, other: &FaceCounts) {
        self.blank += other.blank;
        self.panda += other.panda;
        self.bamboo += other.bamboo;
        self.water += other.water;
    }

    /// Total faces counted.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.blank + self.panda + self.bamboo + self.water
    }
}

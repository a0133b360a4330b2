//! Aggregated results of a batch of games.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// The result of one completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Who won.
    pub winner: PlayerId,
    /// Rounds played, 1-based: a game decided during the first round
    /// reports 1.
    pub rounds: u32,
}

/// Winner frequencies and the per-game outcome log for a batch run.
///
/// Consumable by any downstream reporting layer; this crate computes
/// summary statistics but never prints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Number of players in every game of the batch.
    pub player_count: usize,
    /// Win counts indexed by player id.
    pub win_counts: Vec<u64>,
    /// One entry per completed game, in trial order.
    pub outcomes: Vec<GameOutcome>,
    /// Trials that hit the external round cap without finishing. Excluded
    /// from `win_counts` and `outcomes`.
    pub aborted: u64,
}

impl SimulationReport {
    /// Create an empty report for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            win_counts: vec![0; player_count],
            outcomes: Vec::new(),
            aborted: 0,
        }
    }

    /// Record one completed game.
    pub fn record(&mut self, outcome: GameOutcome) {
        self.win_counts[outcome.winner.index()] += 1;
        self.outcomes.push(outcome);
    }

    /// Games that ran to completion.
    #[must_use]
    pub fn completed(&self) -> u64 {
        self.outcomes.len() as u64
    }

    /// Fraction of completed games won by `player`. Zero when nothing
    /// completed.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        let completed = self.completed();
        if completed == 0 {
            return 0.0;
        }
        self.win_counts[player.index()] as f64 / completed as f64
    }

    /// Mean rounds per completed game. Zero when nothing completed.
    #[must_use]
    pub fn mean_rounds(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        let total: u64 = self.outcomes.iter().map(|o| u64::from(o.rounds)).sum();
        total as f64 / self.outcomes.len() as f64
    }
}

//! The batch runner: many independent games, one report.
//!
//! Each trial gets its own RNG derived arithmetically from the base seed and
//! the trial index, so trial k produces the same game no matter how many
//! trials run, in what order, or on which thread. The parallel path collects
//! per-trial results and folds them into the report in trial order, making
//! serial and parallel runs byte-identical.

use rayon::prelude::*;

use crate::core::GameRng;
use crate::game::{config::validate_player_count, ConfigError, Game};

use super::report::{GameOutcome, SimulationReport};

/// Configuration for a batch run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Players per game.
    pub player_count: usize,

    /// Independent games to run.
    pub games: u64,

    /// Base seed; trial k plays with the k-th derived seed.
    pub seed: u64,

    /// Safety cap on rounds per game. The state machine itself has no cap;
    /// a trial that reaches this many completed rounds is counted as
    /// aborted. Expected game length is tens of rounds, so the default is
    /// far out of reach.
    pub max_rounds: u32,

    /// Run trials on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            player_count: 3,
            games: 1000,
            seed: 0,
            max_rounds: 10_000,
            parallel: false,
        }
    }
}

impl SimulationConfig {
    /// Create a config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the players per game.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_games(mut self, games: u64) -> Self {
        self.games = games;
        self
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-game round cap.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Run trials in parallel.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Runs batches of independent games and aggregates their outcomes.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Create a simulation, validating the player count once up front.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        validate_player_count(config.player_count)?;
        Ok(Self { config })
    }

    /// The configuration this simulation runs with.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run all trials and aggregate.
    #[must_use]
    pub fn run(&self) -> SimulationReport {
        let results: Vec<Option<GameOutcome>> = if self.config.parallel {
            (0..self.config.games)
                .into_par_iter()
                .map(|trial| self.run_trial(trial))
                .collect()
        } else {
            (0..self.config.games)
                .map(|trial| self.run_trial(trial))
                .collect()
        };

        let mut report = SimulationReport::new(self.config.player_count);
        for result in results {
            match result {
                Some(outcome) => report.record(outcome),
                None => report.aborted += 1,
            }
        }
        report
    }

    /// Drive one game to completion. `None` if the round cap was hit.
    fn run_trial(&self, trial: u64) -> Option<GameOutcome> {
        let rng = GameRng::for_trial(self.config.seed, trial);
        let mut game = Game::with_rng(self.config.player_count, rng);

        while !game.is_finished() {
            if game.round_number() >= self.config.max_rounds {
                return None;
            }
            game.play_round();
        }

        let winner = game.winner().expect("finished game has a winner");
        Some(GameOutcome {
            winner,
            rounds: game.round_number() + 1,
        })
    }
}

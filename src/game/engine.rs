//! The round state machine and dice-redistribution rules.
//!
//! One game is a sequence of rounds; one round is a full pass over the
//! players in id order. A turn resolves in a fixed order:
//!
//! 1. Roll the whole pool.
//! 2. Water: every water die is discarded from circulation.
//! 3. Panda: pandas are gifted — to the tracked lowest player if that player
//!    is already at zero dice, otherwise to a uniformly random other player.
//! 4. Bamboo: if the previous player in turn order rolled more bamboos than
//!    the current one, the difference moves from previous to current. The
//!    very first turn of a game has no previous roll and skips this.
//! 5. The lowest-pool player is recomputed (first minimum wins ties).
//! 6. If the lowest pool is zero the game ends immediately: the previous
//!    player wins if they are the lowest, otherwise the acting player wins.
//!
//! Panda and bamboo transfers conserve the total dice in play; only water
//! removes dice from circulation, which is what bounds game length.

use crate::core::{Face, GameRng, Player, PlayerId};

use super::config::{initial_dice_pool, ConfigError, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
use super::observer::{NullObserver, RoundObserver, RoundSnapshot, TurnPhase};

/// One game of dice-pool elimination.
///
/// Owns its players, RNG, and lowest-player tracking; nothing is shared
/// between games.
#[derive(Clone, Debug)]
pub struct Game {
    players: Vec<Player>,
    round_number: u32,
    /// Index of the first-encountered minimum-pool player.
    lowest: usize,
    finished: bool,
    winner: Option<PlayerId>,
    rng: GameRng,
}

impl Game {
    /// Create a game from a validated configuration.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_rng(config.player_count, GameRng::new(config.seed)))
    }

    /// Create a game with an externally derived RNG (batch trials).
    ///
    /// The player count must already be validated.
    #[must_use]
    pub fn with_rng(player_count: usize, rng: GameRng) -> Self {
        assert!(
            player_count >= MIN_PLAYERS,
            "Games require at least {MIN_PLAYERS} players"
        );
        assert!(
            player_count <= MAX_PLAYERS,
            "At most {MAX_PLAYERS} players supported"
        );

        let pool = initial_dice_pool(player_count);
        let players = (0..player_count)
            .map(|i| Player::new(PlayerId::new(i as u8), pool))
            .collect();

        Self {
            players,
            round_number: 0,
            lowest: 0,
            finished: false,
            winner: None,
            rng,
        }
    }

    /// The players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Completed full rounds. A game that ends mid-round does not count the
    /// partial round.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// The player currently tracked as having the smallest pool.
    #[must_use]
    pub fn lowest_player(&self) -> PlayerId {
        self.players[self.lowest].id()
    }

    /// Has a winner been decided?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The winner, once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Sum of all pools: the dice still in circulation.
    #[must_use]
    pub fn total_dice(&self) -> u32 {
        self.players.iter().map(Player::dice_pool).sum()
    }

    /// Play one round without an observer.
    pub fn play_round(&mut self) {
        self.play_round_with(&mut NullObserver);
    }

    /// Play one round, emitting snapshots to `observer`.
    ///
    /// On an already-finished game this is a no-op: the observer gets a
    /// notice and no state changes. A win mid-round stops the round
    /// immediately; remaining players do not take their turns and the round
    /// counter is not incremented for the partial round.
    pub fn play_round_with(&mut self, observer: &mut dyn RoundObserver) {
        if self.finished {
            observer.on_finished_game();
            return;
        }

        for i in 0..self.players.len() {
            self.players[i].roll(&mut self.rng);
            observer.on_turn(&self.snapshot(i, TurnPhase::Before));

            self.resolve_water(i);
            self.resolve_panda(i);
            let first_turn_of_game = self.round_number == 0 && i == 0;
            if !first_turn_of_game {
                self.resolve_bamboo(i);
            }
            self.update_lowest();

            observer.on_turn(&self.snapshot(i, TurnPhase::After));

            if self.check_winner(i) {
                return;
            }
        }

        self.round_number += 1;
    }

    /// Previous player in turn order; index 0 wraps to the last player.
    fn previous_index(&self, i: usize) -> usize {
        (i + self.players.len() - 1) % self.players.len()
    }

    /// Water dice are discarded outright, shrinking the dice in circulation.
    fn resolve_water(&mut self, i: usize) {
        let waters = self.players[i].last_roll().water;
        self.players[i].remove_dice(waters, Face::Water);
    }

    /// Pandas are gifted: to the tracked lowest player if that player is at
    /// zero dice, otherwise to a uniformly random other player.
    fn resolve_panda(&mut self, i: usize) {
        let pandas = self.players[i].last_roll().panda;
        if pandas == 0 {
            return;
        }

        let recipient = if self.players[self.lowest].dice_pool() == 0 {
            self.lowest
        } else {
            self.pick_other_player(i)
        };
        self.players[recipient].add_dice(pandas);
        self.players[i].remove_dice(pandas, Face::Panda);
    }

    /// If the previous player rolled more bamboos, the difference moves from
    /// previous to current. The comparison is asymmetric and only ever
    /// against the immediately preceding player.
    fn resolve_bamboo(&mut self, i: usize) {
        let prev = self.previous_index(i);
        let prev_bamboos = self.players[prev].last_roll().bamboo;
        let own_bamboos = self.players[i].last_roll().bamboo;

        if prev_bamboos > own_bamboos {
            let delta = prev_bamboos - own_bamboos;
            self.players[i].add_dice(delta);
            self.players[prev].remove_dice(delta, Face::Bamboo);
        }
    }

    /// First index with the minimum pool wins ties.
    fn update_lowest(&mut self) {
        let mut lowest = 0;
        for (idx, player) in self.players.iter().enumerate() {
            if player.dice_pool() < self.players[lowest].dice_pool() {
                lowest = idx;
            }
        }
        self.lowest = lowest;
    }

    /// Decide the game if the lowest pool hit zero. The previous player in
    /// turn order wins if they are the lowest (their pool was already empty
    /// before this turn); otherwise the acting player wins.
    fn check_winner(&mut self, i: usize) -> bool {
        if self.players[self.lowest].dice_pool() > 0 {
            return false;
        }

        let prev = self.previous_index(i);
        let winner = if self.lowest == prev { prev } else { i };
        self.winner = Some(self.players[winner].id());
        self.finished = true;
        true
    }

    /// Uniform choice over all players except `exclude`. Direct sampling
    /// over n-1 ids, no retry loop.
    fn pick_other_player(&mut self, exclude: usize) -> usize {
        let n = self.players.len();
        let r = self.rng.gen_range_usize(0..n - 1);
        if r >= exclude {
            r + 1
        } else {
            r
        }
    }

    fn snapshot(&self, acting: usize, phase: TurnPhase) -> RoundSnapshot {
        RoundSnapshot {
            round: self.round_number,
            acting_player: self.players[acting].id(),
            phase,
            dice_pools: self.players.iter().map(Player::dice_pool).collect(),
            tokens: self.players.iter().map(|p| p.tokens().to_vec()).collect(),
        }
    }
}

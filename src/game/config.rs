//! Game configuration and validation.
//!
//! The whole configuration surface is the player count, a seed, and the
//! pool-size-by-player-count table: fewer than four players start with six
//! dice each, exactly four with five, more than four with four.

use serde::{Deserialize, Serialize};

/// Games need at least two players: the panda rule gifts dice to a player
/// other than the roller, which does not exist below this.
pub const MIN_PLAYERS: usize = 2;

/// Player IDs are `u8`, so 255 players is the ceiling.
pub const MAX_PLAYERS: usize = 255;

/// Configuration for a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players, in turn order. Must be in `2..=255`.
    pub player_count: usize,
    /// RNG seed for dice rolls and panda-recipient selection.
    pub seed: u64,
}

impl GameConfig {
    /// Create a configuration. Validation happens in `Game::new`.
    #[must_use]
    pub fn new(player_count: usize, seed: u64) -> Self {
        Self { player_count, seed }
    }

    /// Check the player count bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_player_count(self.player_count)
    }

    /// Starting dice per player for this player count.
    #[must_use]
    pub fn initial_dice_pool(&self) -> u32 {
        initial_dice_pool(self.player_count)
    }
}

/// Check that a player count is playable.
pub fn validate_player_count(player_count: usize) -> Result<(), ConfigError> {
    if player_count < MIN_PLAYERS {
        return Err(ConfigError::TooFewPlayers(player_count));
    }
    if player_count > MAX_PLAYERS {
        return Err(ConfigError::TooManyPlayers(player_count));
    }
    Ok(())
}

/// Starting dice per player: 6 below four players, 5 at four, 4 above.
#[must_use]
pub fn initial_dice_pool(player_count: usize) -> u32 {
    match player_count {
        0..=3 => 6,
        4 => 5,
        _ => 4,
    }
}

/// Error type for game and simulation construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Not enough players (minimum 2).
    TooFewPlayers(usize),
    /// Too many players (maximum 255).
    TooManyPlayers(usize),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewPlayers(n) => write!(f, "Too few players: {n} (minimum {MIN_PLAYERS})"),
            Self::TooManyPlayers(n) => write!(f, "Too many players: {n} (maximum {MAX_PLAYERS})"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_pool_table() {
        assert_eq!(initial_dice_pool(2), 6);
        assert_eq!(initial_dice_pool(3), 6);
        assert_eq!(initial_dice_pool(4), 5);
        assert_eq!(initial_dice_pool(5), 4);
        assert_eq!(initial_dice_pool(8), 4);
    }

    #[test]
    fn test_validate_bounds() {
        assert_eq!(
            validate_player_count(0),
            Err(ConfigError::TooFewPlayers(0))
        );
        assert_eq!(
            validate_player_count(1),
            Err(ConfigError::TooFewPlayers(1))
        );
        assert!(validate_player_count(2).is_ok());
        assert!(validate_player_count(255).is_ok());
        assert_eq!(
            validate_player_count(256),
            Err(ConfigError::TooManyPlayers(256))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", ConfigError::TooFewPlayers(1)),
            "Too few players: 1 (minimum 2)"
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new(3, 42);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

//! Game configuration.
//!
//! `GameConfig` carries the rule constants the engine consults. The default
//! configuration is the standard game: 2-6 players on a 12-square board,
//! first to an even total of at least 6 coins wins.
//!
//! The `with_*` builders assert on nonsensical values. Configurations built
//! any other way (field edits, deserialization) are checked by
//! [`GameConfig::validate`]; deserialization runs it automatically and the
//! engine runs it before play starts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum players in the standard game.
pub const MAX_PLAYERS: usize = 6;
/// Squares on the standard board.
pub const BOARD_SIZE: u32 = 12;
/// Coins needed to win (the total must also be even).
pub const WINNING_COINS: u32 = 6;
/// Streak length that must be exceeded to earn bonus points.
pub const STREAK_THRESHOLD: u32 = 3;
/// Questions prepared per category at startup.
pub const QUESTIONS_PER_CATEGORY: usize = 50;
/// Largest table any configuration may allow; seats must fit a `PlayerId`.
pub const MAX_SEATS: usize = u8::MAX as usize;

/// A configuration the engine cannot play with.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("board must have at least 1 square")]
    EmptyBoard,
    #[error("at least 1 player must be required")]
    NoPlayersRequired,
    #[error("max players ({max}) is below min players ({min})")]
    InvertedPlayerRange { min: usize, max: usize },
    #[error("max players ({max}) exceeds the limit of {limit}")]
    TooManySeats { max: usize, limit: usize },
}

/// Rule constants for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGameConfig")]
pub struct GameConfig {
    /// Players required before the game can start.
    pub min_players: usize,

    /// Players allowed at the table.
    pub max_players: usize,

    /// Squares on the board. Positions are `1..=board_size`.
    pub board_size: u32,

    /// Minimum coins for a win; the total must also be even.
    pub winning_coins: u32,

    /// A streak longer than this earns `streak_bonus_points`.
    /// A streak at least this long protects against the penalty box once.
    pub streak_threshold: u32,

    /// Coins for a correct answer.
    pub base_points: u32,

    /// Coins for a correct answer while on a streak.
    pub streak_bonus_points: u32,

    /// Questions queued per category at startup.
    pub questions_per_category: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: MAX_PLAYERS,
            board_size: BOARD_SIZE,
            winning_coins: WINNING_COINS,
            streak_threshold: STREAK_THRESHOLD,
            base_points: 1,
            streak_bonus_points: 2,
            questions_per_category: QUESTIONS_PER_CATEGORY,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allowed player range.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        assert!(min >= 1, "Must require at least 1 player");
        assert!(max >= min, "Max players must be at least min players");
        assert!(max <= MAX_SEATS, "At most 255 players supported");
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_board_size(mut self, board_size: u32) -> Self {
        assert!(board_size > 0, "Board must have at least 1 square");
        self.board_size = board_size;
        self
    }

    #[must_use]
    pub fn with_winning_coins(mut self, coins: u32) -> Self {
        self.winning_coins = coins;
        self
    }

    #[must_use]
    pub fn with_streak_threshold(mut self, threshold: u32) -> Self {
        self.streak_threshold = threshold;
        self
    }

    /// Set coins awarded per correct answer, normally and on a streak.
    #[must_use]
    pub fn with_points(mut self, base: u32, streak_bonus: u32) -> Self {
        self.base_points = base;
        self.streak_bonus_points = streak_bonus;
        self
    }

    #[must_use]
    pub fn with_questions_per_category(mut self, count: usize) -> Self {
        self.questions_per_category = count;
        self
    }

    /// Check the invariants the `with_*` builders assert.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.min_players == 0 {
            return Err(ConfigError::NoPlayersRequired);
        }
        if self.max_players < self.min_players {
            return Err(ConfigError::InvertedPlayerRange {
                min: self.min_players,
                max: self.max_players,
            });
        }
        if self.max_players > MAX_SEATS {
            return Err(ConfigError::TooManySeats {
                max: self.max_players,
                limit: MAX_SEATS,
            });
        }
        Ok(())
    }
}

/// Wire form of [`GameConfig`], validated on conversion.
#[derive(Deserialize)]
struct UncheckedGameConfig {
    min_players: usize,
    max_players: usize,
    board_size: u32,
    winning_coins: u32,
    streak_threshold: u32,
    base_points: u32,
    streak_bonus_points: u32,
    questions_per_category: usize,
}

impl TryFrom<UncheckedGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: UncheckedGameConfig) -> Result<Self, Self::Error> {
        let config = GameConfig {
            min_players: raw.min_players,
            max_players: raw.max_players,
            board_size: raw.board_size,
            winning_coins: raw.winning_coins,
            streak_threshold: raw.streak_threshold,
            base_points: raw.base_points,
            streak_bonus_points: raw.streak_bonus_points,
            questions_per_category: raw.questions_per_category,
        };
        config.validate()?;
        Ok(config)
    }
}

//! Core game types: players, categories, configuration, RNG.

pub mod category;
pub mod config;
pub mod player;
pub mod rng;

pub use category::Category;
pub use config::{
    ConfigError, GameConfig, BOARD_SIZE, MAX_PLAYERS, MAX_SEATS, QUESTIONS_PER_CATEGORY,
    STREAK_THRESHOLD, WINNING_COINS,
};
pub use player::{Player, PlayerId};
pub use rng::GameRng;

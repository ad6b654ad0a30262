//! Engine error types.
//!
//! None of these are fatal: every rejected call leaves the engine unchanged
//! and the caller may simply try something else.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::ConfigError;

/// A setup request the engine refused.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SetupError {
    #[error("cannot add new players after the game has started")]
    GameAlreadyStarted,
    #[error("cannot add more than {max} players")]
    TooManyPlayers { max: usize },
    #[error("a player named {0} already exists")]
    DuplicateName(String),
    #[error("at least {required} players are required to start the game (have {actual})")]
    NotEnoughPlayers { required: usize, actual: usize },
    #[error("invalid game configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// A turn action the engine refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game was not started and could not be started implicitly.
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("the game is over")]
    GameOver,
    #[error("the current player must answer before rolling again")]
    AnswerPending,
}

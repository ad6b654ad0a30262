//! Turn state machine.
//!
//! `GameEngine` owns the players and the question bank and implements the
//! rules: movement, category resolution, question draw, scoring, the
//! second-chance retry, streak bonuses, the penalty box and the win check.

mod error;
mod game;
mod state;

pub use error::{SetupError, TurnError};
pub use game::{GameEngine, RollOutcome};
pub use state::{GamePhase, TurnState};

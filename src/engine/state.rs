//! Game lifecycle and per-turn state.

use serde::{Deserialize, Serialize};

use crate::core::{Category, PlayerId};

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players may join; nobody has rolled.
    #[default]
    Setup,
    /// Turns are being played. No more players may join.
    InProgress,
    /// Someone won. Further turns are refused.
    Finished { winner: PlayerId },
}

/// State that only lives for the current player's turn.
///
/// Replaced wholesale whenever the turn passes, so nothing leaks from one
/// player's turn into the next.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Index of the player whose turn it is.
    pub current: usize,

    /// The current player rolled odd while in the penalty box.
    pub getting_out_of_penalty_box: bool,

    /// The current player is answering a second-chance question.
    pub second_chance_active: bool,

    /// Category of the last question asked this turn.
    pub last_category: Option<Category>,

    /// A question has been asked and not yet answered.
    pub awaiting_answer: bool,

    /// Streak the player held before missing this turn's first question.
    pub streak_before_miss: u32,
}

impl TurnState {
    /// Fresh state for the player at `current`.
    #[must_use]
    pub fn starting_at(current: usize) -> Self {
        Self {
            current,
            ..Self::default()
        }
    }
}

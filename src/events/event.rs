//! Game event types.
//!
//! The engine never prints. Every observable step of a turn is emitted as a
//! `GameEvent`, and renderers or tests consume the stream.

use serde::{Deserialize, Serialize};

use crate::core::{Category, PlayerId};
use crate::engine::SetupError;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum GameEvent {
    /// A player joined at seat `player`.
    PlayerAdded { player: PlayerId, name: String },

    /// A setup request was refused. State is unchanged.
    SetupRejected { reason: SetupError },

    /// The game moved from setup to play.
    GameStarted { player_count: usize },

    DiceRolled { player: PlayerId, value: u32 },

    /// The player landed on `position`, whose category is `category`.
    PlayerMoved {
        player: PlayerId,
        position: u32,
        category: Category,
    },

    /// A question was asked. `question` is `None` when the category is
    /// exhausted; the player still answers.
    QuestionAsked {
        category: Category,
        question: Option<String>,
        second_chance: bool,
    },

    AnswerCorrect {
        player: PlayerId,
        points: u32,
        streak: u32,
        coins: u32,
    },

    AnswerWrong { player: PlayerId },

    /// The player answers again from the same category.
    SecondChanceGranted { player: PlayerId, category: Category },

    /// The player's streak of `streak` correct answers was broken.
    StreakLost { player: PlayerId, streak: u32 },

    /// A streak kept the player out of the penalty box.
    StreakProtected { player: PlayerId },

    SentToPenaltyBox { player: PlayerId },

    /// Odd roll: the player leaves the penalty box for this turn.
    PenaltyBoxExited { player: PlayerId },

    /// Even roll: the player stays in the penalty box and loses the turn.
    PenaltyBoxRetained { player: PlayerId },

    PlayerWon { player: PlayerId, coins: u32 },

    TurnPassed { from: PlayerId, to: PlayerId },
}

impl GameEvent {
    /// The player this event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::PlayerAdded { player, .. }
            | GameEvent::DiceRolled { player, .. }
            | GameEvent::PlayerMoved { player, .. }
            | GameEvent::AnswerCorrect { player, .. }
            | GameEvent::AnswerWrong { player }
            | GameEvent::SecondChanceGranted { player, .. }
            | GameEvent::StreakLost { player, .. }
            | GameEvent::StreakProtected { player }
            | GameEvent::SentToPenaltyBox { player }
            | GameEvent::PenaltyBoxExited { player }
            | GameEvent::PenaltyBoxRetained { player }
            | GameEvent::PlayerWon { player, .. } => Some(*player),
            GameEvent::TurnPassed { from, .. } => Some(*from),
            GameEvent::SetupRejected { .. }
            | GameEvent::GameStarted { .. }
            | GameEvent::QuestionAsked { .. } => None,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::PlayerAdded { player, name } => write!(f, "{name} was added as {player}"),
            GameEvent::SetupRejected { reason } => write!(f, "Rejected: {reason}"),
            GameEvent::GameStarted { player_count } => {
                write!(f, "Game has started with {player_count} players")
            }
            GameEvent::DiceRolled { player, value } => write!(f, "{player} rolled a {value}"),
            GameEvent::PlayerMoved {
                player,
                position,
                category,
            } => write!(f, "{player}'s new location is {position}; the category is {category}"),
            GameEvent::QuestionAsked {
                category,
                question: Some(text),
                second_chance,
            } => {
                if *second_chance {
                    write!(f, "Second chance question in {category}: {text}")
                } else {
                    f.write_str(text)
                }
            }
            GameEvent::QuestionAsked {
                category,
                question: None,
                ..
            } => write!(f, "No more {category} questions!"),
            GameEvent::AnswerCorrect {
                player,
                points,
                coins,
                ..
            } => write!(f, "{player} answered correctly for {points}; now has {coins} Gold Coins"),
            GameEvent::AnswerWrong { player } => write!(f, "{player} answered incorrectly"),
            GameEvent::SecondChanceGranted { player, category } => {
                write!(f, "{player} gets a second chance in the {category} category")
            }
            GameEvent::StreakLost { player, streak } => {
                write!(f, "{player} lost their streak of {streak}")
            }
            GameEvent::StreakProtected { player } => {
                write!(f, "{player}'s streak kept them out of the penalty box")
            }
            GameEvent::SentToPenaltyBox { player } => {
                write!(f, "{player} was sent to the penalty box")
            }
            GameEvent::PenaltyBoxExited { player } => {
                write!(f, "{player} is getting out of the penalty box")
            }
            GameEvent::PenaltyBoxRetained { player } => {
                write!(f, "{player} is not getting out of the penalty box")
            }
            GameEvent::PlayerWon { player, coins } => {
                write!(f, "{player} has won the game with {coins} Gold Coins")
            }
            GameEvent::TurnPassed { from, to } => write!(f, "Turn passes from {from} to {to}"),
        }
    }
}

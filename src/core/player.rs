//! Player identification and per-player game state.
//!
//! ## PlayerId
//!
//! Seat index in turn order. Assigned by the engine when a player joins.
//!
//! ## Player
//!
//! A single competitor's mutable state: board position, coins, penalty-box
//! flag and correct-answer streak. Only the engine mutates players.

use serde::{Deserialize, Serialize};

/// Player identifier (seat in turn order).
///
/// Player indices are 0-based: the first player added is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// ID for a 0-based seat, or `None` if the seat does not fit in a `u8`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().map(Self)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One competitor's state.
///
/// Positions are 1-based and wrap around the board, never landing on 0.
/// Moves require a board of at least one square; `GameConfig::validate`
/// guarantees this for the engine.
///
/// ```
/// use trivia_engine::core::Player;
///
/// let mut player = Player::new("Chet");
/// player.move_by(5, 12);
/// assert_eq!(player.position(), 6);
/// player.move_by(7, 12);
/// assert_eq!(player.position(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    position: u32,
    coins: u32,
    in_penalty_box: bool,
    consecutive_correct_answers: u32,
}

impl Player {
    /// Create a player at position 1 with no coins.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 1,
            coins: 0,
            in_penalty_box: false,
            consecutive_correct_answers: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current board square, in `[1, board_size]`.
    #[must_use]
    pub fn position(&self) -> u32 {
        self.position
    }

    #[must_use]
    pub fn coins(&self) -> u32 {
        self.coins
    }

    #[must_use]
    pub fn is_in_penalty_box(&self) -> bool {
        self.in_penalty_box
    }

    #[must_use]
    pub fn consecutive_correct_answers(&self) -> u32 {
        self.consecutive_correct_answers
    }

    /// Advance `roll` squares with 1-based wrap-around.
    pub fn move_by(&mut self, roll: u32, board_size: u32) {
        debug_assert!(board_size > 0);
        let zero_based = (u64::from(self.position) + u64::from(roll) - 1) % u64::from(board_size);
        self.position = zero_based as u32 + 1;
    }

    pub fn add_coins(&mut self, coins: u32) {
        self.coins = self.coins.saturating_add(coins);
    }

    pub fn set_in_penalty_box(&mut self, in_penalty_box: bool) {
        self.in_penalty_box = in_penalty_box;
    }

    /// Extend the streak, returning the new count.
    pub fn increment_correct_answers(&mut self) -> u32 {
        self.consecutive_correct_answers += 1;
        self.consecutive_correct_answers
    }

    /// Break the streak, returning the count it had.
    pub fn reset_consecutive_correct_answers(&mut self) -> u32 {
        std::mem::take(&mut self.consecutive_correct_answers)
    }

    /// Winning requires at least `threshold` coins and an even total.
    #[must_use]
    pub fn has_won(&self, threshold: u32) -> bool {
        self.coins >= threshold && self.coins % 2 == 0
    }
}

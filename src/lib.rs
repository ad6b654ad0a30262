//! # trivia-engine
//!
//! A deterministic, turn-based trivia board-game engine.
//!
//! ## Rules
//!
//! Players take turns rolling a die and moving around a 12-square board.
//! Each square belongs to a question category; landing on it draws the next
//! question from that category's queue.
//!
//! - A correct answer earns a coin, or two while on a streak of more than
//!   three correct answers.
//! - A wrong answer earns a second chance from the same category. Missing
//!   that as well sends the player to the penalty box, unless they were on a
//!   streak, which only costs them the streak.
//! - A player in the penalty box escapes for the turn on an odd roll and
//!   forfeits the turn on an even one.
//! - The first player to reach at least six coins with an even total wins.
//!
//! ## Design
//!
//! - **Inputs, not randomness**: dice values and answer outcomes come from
//!   the caller. The [`simulation`] module is one such caller.
//! - **Events, not printing**: every step is reported as a [`GameEvent`]
//!   to an [`EventSink`].
//! - **Recoverable failures**: setup and turn errors are returned as values
//!   and leave the engine unchanged.
//!
//! ## Modules
//!
//! - `core`: Players, categories, configuration, RNG
//! - `questions`: Question providers and the per-category bank
//! - `events`: Game events and sinks
//! - `engine`: The turn state machine
//! - `simulation`: Seeded self-play harness

pub mod core;
pub mod engine;
pub mod events;
pub mod questions;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{Category, GameConfig, GameRng, Player, PlayerId};

pub use crate::engine::{GameEngine, GamePhase, RollOutcome, SetupError, TurnError, TurnState};

pub use crate::events::{EventLog, EventSink, GameEvent, NullSink, TracingSink};

pub use crate::questions::{
    Draw, GeneratedQuestions, ProviderError, QuestionBank, QuestionProvider, StaticQuestions,
};

pub use crate::simulation::{Simulation, SimulationConfig, SimulationOutcome, SimulationReport};

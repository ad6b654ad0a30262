//! The trivia game engine.

use im::Vector;

use crate::core::{Category, GameConfig, Player, PlayerId, MAX_SEATS};
use crate::events::{EventLog, EventSink, GameEvent};
use crate::questions::{GeneratedQuestions, QuestionBank, QuestionProvider};

use super::error::{SetupError, TurnError};
use super::state::{GamePhase, TurnState};

/// What a roll led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RollOutcome {
    /// The player moved and was asked a question. `question` is `None` when
    /// the category is exhausted; an answer is still expected.
    Asked {
        category: Category,
        question: Option<String>,
    },
    /// Even roll in the penalty box. The turn has already passed.
    StayedInPenaltyBox,
}

/// Turn-based trivia engine.
///
/// ## Turn Flow
///
/// 1. `roll(value)`: move the current player and ask a question from the
///    category of the square they land on (or, in the penalty box, escape on
///    an odd roll and forfeit the turn on an even one)
/// 2. `handle_correct_answer()` or `wrong_answer()`: score the answer and
///    pass the turn, unless a second chance or a win keeps it
///
/// Dice values and answer outcomes are inputs; the engine is deterministic.
/// Every step is reported to the sink as a [`GameEvent`].
///
/// ## Example
///
/// ```
/// use trivia_engine::core::{Category, PlayerId};
/// use trivia_engine::engine::GameEngine;
///
/// let mut game = GameEngine::standard();
/// game.add("A").unwrap();
/// game.add("B").unwrap();
/// game.start_game().unwrap();
///
/// game.roll(5).unwrap();
/// assert!(game.handle_correct_answer());
///
/// let a = game.player(PlayerId::new(0)).unwrap();
/// assert_eq!(a.position(), 6);
/// assert_eq!(a.coins(), 1);
/// assert_eq!(Category::for_position(a.position()), Category::Pop);
/// assert_eq!(game.current_player_id(), Some(PlayerId::new(1)));
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<S = EventLog> {
    config: GameConfig,
    players: Vector<Player>,
    bank: QuestionBank,
    phase: GamePhase,
    turn: TurnState,
    sink: S,
}

impl GameEngine<EventLog> {
    /// Standard rules, generated questions, recording sink.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_provider(GameConfig::default(), &GeneratedQuestions)
    }

    /// Build the question bank from `provider` and record events in a log.
    pub fn with_provider<P: QuestionProvider + ?Sized>(config: GameConfig, provider: &P) -> Self {
        let bank = QuestionBank::from_provider(provider, config.questions_per_category);
        Self::with_sink(config, bank, EventLog::new())
    }

    /// Recorded events so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        self.sink.events()
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.sink.drain()
    }
}

impl<S: EventSink> GameEngine<S> {
    /// Create an engine around an existing bank and sink.
    pub fn with_sink(config: GameConfig, bank: QuestionBank, sink: S) -> Self {
        Self {
            config,
            players: Vector::new(),
            bank,
            phase: GamePhase::Setup,
            turn: TurnState::default(),
            sink,
        }
    }

    // === Setup ===

    /// Add a player. Turn order is join order.
    ///
    /// Refused once the game has started, when the table is full, or when
    /// the name is taken.
    pub fn add(&mut self, name: impl Into<String>) -> Result<PlayerId, SetupError> {
        let name = name.into();

        if self.phase != GamePhase::Setup {
            return Err(self.reject(SetupError::GameAlreadyStarted));
        }
        let max = self.config.max_players.min(MAX_SEATS);
        let player = match PlayerId::from_index(self.players.len()) {
            Some(player) if self.players.len() < max => player,
            _ => return Err(self.reject(SetupError::TooManyPlayers { max })),
        };
        if self.players.iter().any(|p| p.name() == name) {
            return Err(self.reject(SetupError::DuplicateName(name)));
        }

        tracing::debug!(%name, seat = player.0, "player added");
        self.players.push_back(Player::new(name.clone()));
        self.sink.emit(GameEvent::PlayerAdded { player, name });
        Ok(player)
    }

    /// Close the table and begin play.
    ///
    /// Calling this again while in progress does nothing. A configuration
    /// that fails [`GameConfig::validate`] never starts.
    pub fn start_game(&mut self) -> Result<(), SetupError> {
        match self.phase {
            GamePhase::Setup => {}
            GamePhase::InProgress => return Ok(()),
            GamePhase::Finished { .. } => return Err(self.reject(SetupError::GameAlreadyStarted)),
        }

        if let Err(err) = self.config.validate() {
            return Err(self.reject(err.into()));
        }

        if !self.is_playable() {
            return Err(self.reject(SetupError::NotEnoughPlayers {
                required: self.config.min_players,
                actual: self.players.len(),
            }));
        }

        self.phase = GamePhase::InProgress;
        self.turn = TurnState::starting_at(0);
        tracing::info!(players = self.players.len(), "game started");
        self.sink.emit(GameEvent::GameStarted {
            player_count: self.players.len(),
        });
        Ok(())
    }

    /// Enough players have joined to start.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.players.len() >= self.config.min_players
    }

    fn reject(&mut self, reason: SetupError) -> SetupError {
        tracing::debug!(%reason, "setup rejected");
        self.sink.emit(GameEvent::SetupRejected {
            reason: reason.clone(),
        });
        reason
    }

    // === Turns ===

    /// Roll for the current player.
    ///
    /// Starts the game first if it is still in setup.
    pub fn roll(&mut self, value: u32) -> Result<RollOutcome, TurnError> {
        match self.phase {
            GamePhase::Setup => self.start_game()?,
            GamePhase::InProgress => {}
            GamePhase::Finished { .. } => return Err(TurnError::GameOver),
        }
        if self.turn.awaiting_answer {
            return Err(TurnError::AnswerPending);
        }

        let player = self.current_id();
        tracing::debug!(player = player.0, value, "dice rolled");
        self.sink.emit(GameEvent::DiceRolled { player, value });

        if self.players[self.turn.current].is_in_penalty_box() {
            self.turn.getting_out_of_penalty_box = value % 2 != 0;
            if !self.turn.getting_out_of_penalty_box {
                self.sink.emit(GameEvent::PenaltyBoxRetained { player });
                self.advance_turn();
                return Ok(RollOutcome::StayedInPenaltyBox);
            }
            self.sink.emit(GameEvent::PenaltyBoxExited { player });
        }

        let category = self.move_current(value);
        let question = self.ask(category, false);
        Ok(RollOutcome::Asked { category, question })
    }

    /// Score a correct answer for the current player.
    ///
    /// Returns `false` once the game has been won. A report with no
    /// question pending is ignored.
    pub fn handle_correct_answer(&mut self) -> bool {
        if !self.accepts_answer() {
            return !self.is_finished();
        }

        let index = self.turn.current;
        let player_id = self.current_id();

        self.turn.second_chance_active = false;
        self.turn.awaiting_answer = false;

        let config = &self.config;
        let player = &mut self.players[index];
        let streak = player.increment_correct_answers();
        let points = if streak > config.streak_threshold {
            config.streak_bonus_points
        } else {
            config.base_points
        };
        player.add_coins(points);
        let coins = player.coins();
        let won = player.has_won(config.winning_coins);

        self.sink.emit(GameEvent::AnswerCorrect {
            player: player_id,
            points,
            streak,
            coins,
        });

        if won {
            tracing::info!(player = player_id.0, coins, "player won");
            self.phase = GamePhase::Finished { winner: player_id };
            self.sink.emit(GameEvent::PlayerWon {
                player: player_id,
                coins,
            });
            return false;
        }

        self.advance_turn();
        true
    }

    /// Handle a wrong answer from the current player.
    ///
    /// The first miss grants a second chance from the same category. Missing
    /// that too sends the player to the penalty box, unless they were on a
    /// streak before the first miss, in which case they only lose the turn.
    ///
    /// Returns `false` only if the game is already over.
    pub fn wrong_answer(&mut self) -> bool {
        if !self.accepts_answer() {
            return !self.is_finished();
        }

        let index = self.turn.current;
        let player = self.current_id();
        self.sink.emit(GameEvent::AnswerWrong { player });

        if !self.turn.second_chance_active {
            let lost = self.players[index].reset_consecutive_correct_answers();
            self.turn.second_chance_active = true;
            self.turn.streak_before_miss = lost;
            if lost > 0 {
                self.sink.emit(GameEvent::StreakLost { player, streak: lost });
            }

            let category = self
                .turn
                .last_category
                .unwrap_or_else(|| Category::for_position(self.players[index].position()));
            self.sink.emit(GameEvent::SecondChanceGranted { player, category });
            self.ask(category, true);
            return true;
        }

        self.players[index].reset_consecutive_correct_answers();

        if self.turn.streak_before_miss >= self.config.streak_threshold {
            tracing::debug!(player = player.0, "streak protected against penalty box");
            self.sink.emit(GameEvent::StreakProtected { player });
        } else {
            self.players[index].set_in_penalty_box(true);
            tracing::debug!(player = player.0, "sent to penalty box");
            self.sink.emit(GameEvent::SentToPenaltyBox { player });
        }

        self.advance_turn();
        true
    }

    /// An answer only counts while a question is pending. A boxed player who
    /// rolled even already passed the turn in `roll`, so a report after that
    /// roll is ignored instead of advancing the turn a second time.
    fn accepts_answer(&self) -> bool {
        if self.phase != GamePhase::InProgress {
            return false;
        }
        if !self.turn.awaiting_answer {
            tracing::debug!("answer reported with no question pending; ignored");
            return false;
        }
        true
    }

    /// Move the current player and record the category landed on.
    fn move_current(&mut self, roll: u32) -> Category {
        let player = self.current_id();
        let board_size = self.config.board_size;
        let current = &mut self.players[self.turn.current];
        current.move_by(roll, board_size);
        let position = current.position();
        let category = Category::for_position(position);

        self.turn.last_category = Some(category);
        self.sink.emit(GameEvent::PlayerMoved {
            player,
            position,
            category,
        });
        category
    }

    fn ask(&mut self, category: Category, second_chance: bool) -> Option<String> {
        let question = self.bank.draw(category).into_question();
        if question.is_none() {
            tracing::warn!(%category, second_chance, "question queue exhausted");
        }

        self.turn.awaiting_answer = true;
        self.sink.emit(GameEvent::QuestionAsked {
            category,
            question: question.clone(),
            second_chance,
        });
        question
    }

    fn advance_turn(&mut self) {
        let from = self.current_id();
        let next = (self.turn.current + 1) % self.players.len();
        self.turn = TurnState::starting_at(next);
        self.sink.emit(GameEvent::TurnPassed {
            from,
            to: self.current_id(),
        });
    }

    // Seats are capped at `MAX_SEATS` in `add`, so every index fits.
    fn current_id(&self) -> PlayerId {
        PlayerId::new(self.turn.current as u8)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// State of the turn in progress.
    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != GamePhase::Setup
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Finished { .. })
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            GamePhase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Players in turn order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId::new(i as u8), p))
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Look up a player by name.
    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|p| p.name() == name)
            .map(|i| PlayerId::new(i as u8))
    }

    /// Whose turn it is, or `None` before anyone has joined.
    #[must_use]
    pub fn current_player_id(&self) -> Option<PlayerId> {
        (!self.players.is_empty()).then(|| self.current_id())
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.turn.current)
    }

    /// The current player rolled odd from the penalty box this turn.
    #[must_use]
    pub fn is_getting_out_of_penalty_box(&self) -> bool {
        self.turn.getting_out_of_penalty_box
    }

    #[must_use]
    pub fn is_second_chance_active(&self) -> bool {
        self.turn.second_chance_active
    }

    /// Category of the last question asked this turn.
    #[must_use]
    pub fn last_category(&self) -> Option<Category> {
        self.turn.last_category
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NullSink;

    fn two_player_game() -> GameEngine {
        let mut game = GameEngine::standard();
        game.add("Chet").unwrap();
        game.add("Pat").unwrap();
        game.start_game().unwrap();
        game
    }

    #[test]
    fn test_roll_moves_and_asks() {
        let mut game = two_player_game();
        let outcome = game.roll(2).unwrap();

        assert_eq!(
            outcome,
            RollOutcome::Asked {
                category: Category::Sports,
                question: Some("Sports Question 0".into()),
            }
        );
        assert_eq!(game.current_player().unwrap().position(), 3);
        assert_eq!(game.last_category(), Some(Category::Sports));
        assert!(game.turn().awaiting_answer);
    }

    #[test]
    fn test_roll_while_answer_pending_is_refused() {
        let mut game = two_player_game();
        game.roll(1).unwrap();
        assert_eq!(game.roll(1), Err(TurnError::AnswerPending));
        assert_eq!(game.current_player().unwrap().position(), 2);
    }

    #[test]
    fn test_answer_before_roll_is_ignored() {
        let mut game = two_player_game();
        assert!(game.handle_correct_answer());
        assert!(game.wrong_answer());
        assert_eq!(game.current_player_id(), Some(PlayerId::new(0)));
        assert_eq!(game.player(PlayerId::new(0)).unwrap().coins(), 0);
    }

    #[test]
    fn test_roll_auto_starts() {
        let mut game = GameEngine::standard();
        game.add("Chet").unwrap();
        game.add("Pat").unwrap();

        assert!(game.roll(1).is_ok());
        assert_eq!(game.phase(), GamePhase::InProgress);
    }

    #[test]
    fn test_roll_without_players_fails_quietly() {
        let mut game = GameEngine::standard();
        assert_eq!(
            game.roll(3),
            Err(TurnError::Setup(SetupError::NotEnoughPlayers {
                required: 2,
                actual: 0
            }))
        );
        assert!(!game.is_started());
    }

    #[test]
    fn test_turn_state_resets_on_pass() {
        let mut game = two_player_game();
        game.roll(1).unwrap();
        game.wrong_answer();
        assert!(game.is_second_chance_active());

        game.handle_correct_answer();
        assert!(!game.is_second_chance_active());
        assert_eq!(game.last_category(), None);
        assert_eq!(game.turn().current, 1);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut game = two_player_game();
        let before = game.events().len();
        assert!(game.start_game().is_ok());
        assert_eq!(game.events().len(), before);
    }

    #[test]
    fn test_custom_sink_and_config() {
        let config = GameConfig::new().with_board_size(5).with_questions_per_category(1);
        let bank = QuestionBank::from_provider(&GeneratedQuestions, 1);
        let mut game = GameEngine::with_sink(config, bank, NullSink);
        game.add("Chet").unwrap();
        game.add("Pat").unwrap();

        game.roll(7).unwrap();
        assert_eq!(game.current_player().unwrap().position(), 3);
    }

    #[test]
    fn test_player_lookup() {
        let game = two_player_game();
        assert_eq!(game.player_id("Pat"), Some(PlayerId::new(1)));
        assert_eq!(game.player_id("Sue"), None);
        let names: Vec<_> = game.players().map(|(_, p)| p.name().to_string()).collect();
        assert_eq!(names, vec!["Chet", "Pat"]);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut game = two_player_game();
        let snapshot = game.clone();

        game.roll(4).unwrap();
        game.handle_correct_answer();

        assert_eq!(snapshot.player(PlayerId::new(0)).unwrap().coins(), 0);
        assert_eq!(snapshot.bank().remaining(Category::Geography), 50);
        assert_eq!(game.bank().remaining(Category::Geography), 49);
    }
}

//! Seeded self-play of complete games.

use serde::Serialize;
use smallvec::SmallVec;

use crate::core::{GameConfig, GameRng, Player, PlayerId};
use crate::engine::{GameEngine, RollOutcome, SetupError};
use crate::events::GameEvent;
use crate::questions::{GeneratedQuestions, QuestionProvider};

const WRONG_ANSWER_SLOT: u32 = 7;

/// Configuration for simulated games.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Players, in turn order.
    pub player_names: Vec<String>,

    /// Dice roll `1..=die_faces`.
    pub die_faces: u32,

    /// Each answer is wrong with probability `1 / wrong_answer_one_in`.
    pub wrong_answer_one_in: u32,

    /// Maximum turns per game (to bound unlucky games).
    pub max_turns: usize,

    /// Seed offset (combined with game index for unique seeds).
    pub seed_offset: u64,

    /// Rules for each game.
    pub game: GameConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            player_names: vec!["Chet".into(), "Pat".into(), "Sue".into()],
            die_faces: 5,
            wrong_answer_one_in: 9,
            max_turns: 1_000,
            seed_offset: 0,
            game: GameConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_die_faces(mut self, faces: u32) -> Self {
        assert!(faces > 0, "Die must have at least 1 face");
        self.die_faces = faces;
        self
    }

    pub fn with_wrong_answer_one_in(mut self, one_in: u32) -> Self {
        assert!(one_in > 0, "Wrong-answer odds must be positive");
        self.wrong_answer_one_in = one_in;
        self
    }

    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    pub fn with_game_config(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }
}

/// An answer the harness gave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Answer {
    Correct,
    Wrong,
}

/// Everything that happened in one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    /// 0-based turn number.
    pub turn: usize,
    pub player: PlayerId,
    pub roll: u32,
    /// Answers given, in order. Two when a second chance was used.
    pub answers: SmallVec<[Answer; 2]>,
    pub events: SmallVec<[GameEvent; 8]>,
}

/// How a simulated game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SimulationOutcome {
    Winner { player: PlayerId, coins: u32 },
    /// `max_turns` passed without a winner.
    TurnLimit,
}

/// Result of one simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub seed: u64,
    pub outcome: SimulationOutcome,
    pub turns: Vec<TurnRecord>,
    /// Final player state, in turn order.
    pub standings: Vec<Player>,
}

impl SimulationReport {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            SimulationOutcome::Winner { player, .. } => Some(player),
            SimulationOutcome::TurnLimit => None,
        }
    }

    /// Every event of the game, one line each.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.turns
            .iter()
            .flat_map(|t| t.events.iter())
            .map(|e| format!("{e}\n"))
            .collect()
    }
}

/// Drives games by supplying dice values and answers from a seeded RNG.
///
/// ```
/// use trivia_engine::simulation::{Simulation, SimulationConfig};
///
/// let sim = Simulation::new(SimulationConfig::default());
/// let a = sim.run(7).unwrap();
/// let b = sim.run(7).unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play one game with generated questions.
    pub fn run(&self, seed: u64) -> Result<SimulationReport, SetupError> {
        self.run_with_provider(seed, &GeneratedQuestions)
    }

    /// Play one game with questions from `provider`.
    pub fn run_with_provider<P: QuestionProvider + ?Sized>(
        &self,
        seed: u64,
        provider: &P,
    ) -> Result<SimulationReport, SetupError> {
        let mut engine = GameEngine::with_provider(self.config.game.clone(), provider);
        for name in &self.config.player_names {
            engine.add(name.as_str())?;
        }
        engine.start_game()?;
        engine.drain_events();

        let mut rng = GameRng::new(seed);
        let mut turns = Vec::new();

        for turn in 0..self.config.max_turns {
            if engine.is_finished() {
                break;
            }
            let Some(player) = engine.current_player_id() else {
                break;
            };

            let roll = rng.roll_die(self.config.die_faces);
            let mut answers = SmallVec::new();

            match engine.roll(roll) {
                Ok(RollOutcome::Asked { .. }) => {
                    while engine.turn().awaiting_answer {
                        if self.draws_wrong_answer(&mut rng) {
                            answers.push(Answer::Wrong);
                            engine.wrong_answer();
                        } else {
                            answers.push(Answer::Correct);
                            engine.handle_correct_answer();
                        }
                    }
                }
                Ok(RollOutcome::StayedInPenaltyBox) => {}
                Err(err) => {
                    tracing::warn!(%err, turn, "simulation stopped on refused roll");
                    break;
                }
            }

            turns.push(TurnRecord {
                turn,
                player,
                roll,
                answers,
                events: engine.drain_events().into_iter().collect(),
            });
        }

        let outcome = match engine.winner() {
            Some(player) => SimulationOutcome::Winner {
                player,
                coins: engine.player(player).map_or(0, Player::coins),
            },
            None => SimulationOutcome::TurnLimit,
        };
        tracing::debug!(seed, turns = turns.len(), ?outcome, "simulation finished");

        Ok(SimulationReport {
            seed,
            outcome,
            turns,
            standings: engine.players().map(|(_, p)| p.clone()).collect(),
        })
    }

    /// One draw from `0..wrong_answer_one_in`; slot 7 (or the last slot on
    /// shorter odds) is the wrong answer.
    fn draws_wrong_answer(&self, rng: &mut GameRng) -> bool {
        let one_in = self.config.wrong_answer_one_in;
        rng.gen_range(0..one_in) == WRONG_ANSWER_SLOT.min(one_in - 1)
    }

    /// Play `count` games with seeds `seed_offset..seed_offset + count`.
    pub fn run_many(&self, count: usize) -> Result<Vec<SimulationReport>, SetupError> {
        (0..count)
            .map(|i| self.run(self.config.seed_offset.wrapping_add(i as u64)))
            .collect()
    }
}

//! Self-play harness.
//!
//! The engine takes dice values and answer outcomes as inputs. This module
//! is a caller that generates them from a seeded [`GameRng`](crate::core::GameRng),
//! producing reproducible game records for regression and statistics.
//!
//! ## Usage
//!
//! ```
//! use trivia_engine::simulation::{Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::default()
//!     .with_players(["Chet", "Pat", "Sue"])
//!     .with_seed_offset(1);
//!
//! let reports = Simulation::new(config).run_many(10).unwrap();
//! assert_eq!(reports.len(), 10);
//! ```

mod runner;

pub use runner::{
    Answer, Simulation, SimulationConfig, SimulationOutcome, SimulationReport, TurnRecord,
};

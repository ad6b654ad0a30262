//! Deterministic random number generation for driving simulated games.
//!
//! The engine itself never draws random numbers: dice values and answer
//! outcomes are inputs. `GameRng` is what a harness uses to produce them
//! reproducibly.
//!
//! ```
//! use trivia_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll_die(5), b.roll_die(5));
//! assert_eq!(a.gen_range(0..9), b.gen_range(0..9));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Roll a die with faces `1..=faces`.
    pub fn roll_die(&mut self, faces: u32) -> u32 {
        self.inner.gen_range(1..=faces.max(1))
    }
}

//! Question supply: providers and the per-category bank.
//!
//! - [`QuestionProvider`]: where question text comes from (injected)
//! - [`QuestionBank`]: FIFO queues the engine draws from, backfilled so every
//!   category starts non-empty

mod bank;
mod provider;

pub use bank::{Draw, QuestionBank};
pub use provider::{GeneratedQuestions, ProviderError, QuestionProvider, StaticQuestions};

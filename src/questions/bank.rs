//! Per-category question queues.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Category;

use super::provider::QuestionProvider;

/// Result of drawing from a category queue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Draw {
    /// The next question in the category.
    Question(String),
    /// The category has no questions left. Play continues regardless.
    Exhausted,
}

impl Draw {
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Draw::Exhausted)
    }

    /// Question text, or `None` when exhausted.
    #[must_use]
    pub fn into_question(self) -> Option<String> {
        match self {
            Draw::Question(text) => Some(text),
            Draw::Exhausted => None,
        }
    }
}

/// FIFO question queues, one per category.
///
/// Queues are filled once at construction and consumed destructively; an
/// empty queue stays empty.
///
/// ## Backfill
///
/// Each queue is topped up to the requested count with synthetic questions
/// named `"<Category> Question <n>"`, where `n` is the 0-based slot the
/// question occupies in the queue. A provider error leaves the whole queue
/// synthetic; a list longer than the count is truncated.
///
/// ```
/// use trivia_engine::core::Category;
/// use trivia_engine::questions::{Draw, GeneratedQuestions, QuestionBank};
///
/// let mut bank = QuestionBank::from_provider(&GeneratedQuestions, 2);
/// assert_eq!(bank.draw(Category::Pop), Draw::Question("Pop Question 0".into()));
/// assert_eq!(bank.draw(Category::Pop), Draw::Question("Pop Question 1".into()));
/// assert_eq!(bank.draw(Category::Pop), Draw::Exhausted);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    queues: [Vector<String>; Category::COUNT],
}

impl QuestionBank {
    /// A bank with every queue empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a bank with `count` questions per category.
    pub fn from_provider<P: QuestionProvider + ?Sized>(provider: &P, count: usize) -> Self {
        let mut bank = Self::empty();
        for category in Category::ALL {
            bank.queues[category.index()] = Self::load_category(provider, category, count);
        }
        bank
    }

    fn load_category<P: QuestionProvider + ?Sized>(
        provider: &P,
        category: Category,
        count: usize,
    ) -> Vector<String> {
        let mut questions = provider.load_questions(category).unwrap_or_else(|err| {
            tracing::warn!(%err, %category, "using generated questions instead");
            Vec::new()
        });

        questions.truncate(count);
        let loaded = questions.len();
        tracing::debug!(%category, loaded, "loaded questions");

        if loaded < count {
            tracing::debug!(%category, generated = count - loaded, "backfilling questions");
            questions.extend((loaded..count).map(|n| synthetic_question(category, n)));
        }

        questions.into_iter().collect()
    }

    /// Take the next question from a category.
    pub fn draw(&mut self, category: Category) -> Draw {
        match self.queues[category.index()].pop_front() {
            Some(text) => Draw::Question(text),
            None => Draw::Exhausted,
        }
    }

    /// Questions left in a category.
    #[must_use]
    pub fn remaining(&self, category: Category) -> usize {
        self.queues[category.index()].len()
    }

    #[must_use]
    pub fn is_exhausted(&self, category: Category) -> bool {
        self.queues[category.index()].is_empty()
    }

    /// Peek at the next question without consuming it.
    #[must_use]
    pub fn peek(&self, category: Category) -> Option<&str> {
        self.queues[category.index()].front().map(String::as_str)
    }
}

fn synthetic_question(category: Category, n: usize) -> String {
    format!("{category} Question {n}")
}

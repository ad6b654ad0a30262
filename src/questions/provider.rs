//! Question sources.
//!
//! A `QuestionProvider` supplies the raw question text for a category. The
//! `QuestionBank` decides what to do when a provider comes up short, so
//! providers only report what they have.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::Category;

/// Failure to load questions for a category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("no questions registered for category {0}")]
    MissingCategory(Category),
    #[error("question source for {category} unavailable: {reason}")]
    Unavailable { category: Category, reason: String },
}

/// Source of question text, consulted once per category at bank construction.
pub trait QuestionProvider {
    /// Questions for `category`, in the order they should be asked.
    ///
    /// Returning fewer than the bank needs is fine; the bank backfills.
    fn load_questions(&self, category: Category) -> Result<Vec<String>, ProviderError>;
}

impl<P: QuestionProvider + ?Sized> QuestionProvider for &P {
    fn load_questions(&self, category: Category) -> Result<Vec<String>, ProviderError> {
        (**self).load_questions(category)
    }
}

impl<P: QuestionProvider + ?Sized> QuestionProvider for Box<P> {
    fn load_questions(&self, category: Category) -> Result<Vec<String>, ProviderError> {
        (**self).load_questions(category)
    }
}

/// Provider with no questions of its own; every queue is fully backfilled.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeneratedQuestions;

impl QuestionProvider for GeneratedQuestions {
    fn load_questions(&self, _category: Category) -> Result<Vec<String>, ProviderError> {
        Ok(Vec::new())
    }
}

/// In-memory provider.
///
/// ```
/// use trivia_engine::core::Category;
/// use trivia_engine::questions::{QuestionProvider, StaticQuestions};
///
/// let provider = StaticQuestions::new()
///     .with_questions(Category::Rock, ["Who sang Purple Rain?"]);
///
/// assert_eq!(provider.load_questions(Category::Rock).unwrap().len(), 1);
/// assert!(provider.load_questions(Category::Pop).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticQuestions {
    questions: FxHashMap<Category, Vec<String>>,
}

impl StaticQuestions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append questions for a category (builder pattern).
    #[must_use]
    pub fn with_questions<I, S>(mut self, category: Category, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(category, questions);
        self
    }

    /// Append questions for a category.
    pub fn insert<I, S>(&mut self, category: Category, questions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.questions
            .entry(category)
            .or_default()
            .extend(questions.into_iter().map(Into::into));
    }
}

impl QuestionProvider for StaticQuestions {
    fn load_questions(&self, category: Category) -> Result<Vec<String>, ProviderError> {
        self.questions
            .get(&category)
            .cloned()
            .ok_or(ProviderError::MissingCategory(category))
    }
}

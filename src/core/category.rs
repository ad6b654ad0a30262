//! Question categories and board-square resolution.

use serde::{Deserialize, Serialize};

/// Fixed set of question categories.
///
/// Board squares cycle through the categories in declaration order, so the
/// category of a square is a pure function of its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Pop,
    Science,
    Sports,
    Rock,
    Geography,
}

impl Category {
    /// All categories in board order.
    pub const ALL: [Category; 5] = [
        Category::Pop,
        Category::Science,
        Category::Sports,
        Category::Rock,
        Category::Geography,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Category of a 1-based board position.
    ///
    /// ```
    /// use trivia_engine::core::Category;
    ///
    /// assert_eq!(Category::for_position(1), Category::Pop);
    /// assert_eq!(Category::for_position(6), Category::Pop);
    /// assert_eq!(Category::for_position(10), Category::Geography);
    /// ```
    #[must_use]
    pub fn for_position(position: u32) -> Self {
        let index = position.saturating_sub(1) as usize % Self::COUNT;
        Self::ALL[index]
    }

    /// Stable index into `Category::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Pop => "Pop",
            Category::Science => "Science",
            Category::Sports => "Sports",
            Category::Rock => "Rock",
            Category::Geography => "Geography",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

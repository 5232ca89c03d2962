//! Question entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored trivia question.
///
/// Serializes to the formatted representation returned by every endpoint:
/// `{id, question, answer, difficulty, category}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    /// Unique identifier. Assigned by the store, never reused.
    pub id: i32,
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
    /// Difficulty, nominally 1 to 5. Not range checked.
    pub difficulty: Option<i32>,
    /// Category id. Not checked against existing categories.
    pub category: Option<i32>,
}

impl Question {
    /// Whether the question text contains `term`, ignoring case.
    pub fn matches(&self, term: &str) -> bool {
        self.question.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Data required to insert a new question.
///
/// Text fields are optional so that an absent value reaches the store
/// unchanged; the store rejects it, the service does not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewQuestion {
    /// Question text.
    pub question: Option<String>,
    /// Answer text.
    pub answer: Option<String>,
    /// Difficulty.
    pub difficulty: Option<i32>,
    /// Category id.
    pub category: Option<i32>,
}

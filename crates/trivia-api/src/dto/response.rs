//! Response DTOs.
//!
//! Field names follow the wire format the trivia frontend expects,
//! including `"current category"` on the unfiltered listing.

use serde::{Deserialize, Serialize};

use trivia_entity::category::CategoryMap;
use trivia_entity::question::Question;

/// GET /categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    /// Always `true`.
    pub success: bool,
    /// Category id to name.
    pub categories: CategoryMap,
}

/// GET /questions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    /// Always `true`.
    pub success: bool,
    /// Questions on the page.
    pub questions: Vec<Question>,
    /// Questions across all pages.
    pub total_questions: usize,
    /// Always null for the unfiltered listing.
    #[serde(rename = "current category")]
    pub current_category: Option<i32>,
    /// Category id to name.
    pub categories: CategoryMap,
}

/// GET /categories/{id}/questions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryQuestionsResponse {
    /// Always `true`.
    pub success: bool,
    /// Questions on the page.
    pub questions: Vec<Question>,
    /// Questions in the category across all pages.
    pub total_questions: usize,
    /// The listed category.
    pub current_category: i32,
}

/// POST /search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Always `true`.
    pub success: bool,
    /// Matches on the page.
    pub questions: Vec<Question>,
    /// Number of matches on this page.
    pub total_questions: usize,
    /// Always null.
    pub current_category: Option<i32>,
}

/// POST /questions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Always `true`.
    pub success: bool,
    /// Id of the new question.
    pub created: i32,
    /// First page after the insert.
    pub questions: Vec<Question>,
    /// Questions after the insert.
    pub total_questions: usize,
}

/// DELETE /questions/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// Always `true`.
    pub success: bool,
    /// Id of the removed question.
    pub deleted: i32,
}

/// POST /quizzes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    /// Always `true`.
    pub success: bool,
    /// The drawn question, or null once the round is exhausted.
    pub question: Option<Question>,
}

/// GET /health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `true`.
    pub success: bool,
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Crate version.
    pub version: String,
}

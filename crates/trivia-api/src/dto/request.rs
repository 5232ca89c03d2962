//! Request DTOs.

use serde::{Deserialize, Serialize};

use trivia_core::error::AppError;
use trivia_service::CreateQuestionRequest;

/// An integer that clients may send either as a JSON number or as a
/// numeric string (form fields and object keys arrive as strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LenientInt {
    /// A JSON number.
    Number(i32),
    /// A JSON string holding a number.
    Text(String),
}

impl LenientInt {
    /// The integer value. Non-numeric text is unprocessable.
    pub fn resolve(&self, field: &str) -> Result<i32, AppError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| AppError::unprocessable(format!("{field} must be an integer"))),
        }
    }
}

fn resolve_optional(value: Option<LenientInt>, field: &str) -> Result<Option<i32>, AppError> {
    value.map(|v| v.resolve(field)).transpose()
}

/// POST /questions body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateQuestionBody {
    /// Question text.
    pub question: Option<String>,
    /// Answer text.
    pub answer: Option<String>,
    /// Difficulty.
    pub difficulty: Option<LenientInt>,
    /// Category id.
    pub category: Option<LenientInt>,
}

impl TryFrom<CreateQuestionBody> for CreateQuestionRequest {
    type Error = AppError;

    fn try_from(body: CreateQuestionBody) -> Result<Self, Self::Error> {
        Ok(Self {
            question: body.question,
            answer: body.answer,
            difficulty: resolve_optional(body.difficulty, "difficulty")?,
            category: resolve_optional(body.category, "category")?,
        })
    }
}

/// POST /search body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchBody {
    /// Text to look for in question text. Absent matches everything.
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// The category object sent with a quiz request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCategoryBody {
    /// Category id; `0` selects every category.
    pub id: Option<LenientInt>,
    /// Display name. Informational only.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// POST /quizzes body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizBody {
    /// Category to draw from.
    pub quiz_category: Option<QuizCategoryBody>,
    /// Ids already served this round.
    pub previous_questions: Option<Vec<i32>>,
}

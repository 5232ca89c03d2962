//! Quiz handler.

use axum::Json;
use axum::extract::State;

use trivia_core::error::AppError;
use trivia_service::QuizCategory;

use crate::dto::request::QuizBody;
use crate::dto::response::QuizResponse;
use crate::error::ApiError;
use crate::extractors::AppJson;
use crate::state::AppState;

/// POST /quizzes
pub async fn next_question(
    State(state): State<AppState>,
    AppJson(body): AppJson<QuizBody>,
) -> Result<Json<QuizResponse>, ApiError> {
    let category = body
        .quiz_category
        .ok_or_else(|| AppError::not_found("quiz_category is required"))?;

    let category_id = category
        .id
        .ok_or_else(|| AppError::unprocessable("quiz_category.id is required"))?
        .resolve("quiz_category.id")?;

    let previous = body
        .previous_questions
        .ok_or_else(|| AppError::unprocessable("previous_questions is required"))?;

    let question = state
        .quiz_service
        .next_question(QuizCategory::from_id(category_id), &previous)
        .await?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

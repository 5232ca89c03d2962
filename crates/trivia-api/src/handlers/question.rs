//! Question list, create, and delete handlers.

use axum::Json;
use axum::extract::{Path, State};

use trivia_service::CreateQuestionRequest;

use crate::dto::request::CreateQuestionBody;
use crate::dto::response::{CreatedResponse, DeletedResponse, QuestionsResponse};
use crate::error::ApiError;
use crate::extractors::{AppJson, PageParams, parse_id};
use crate::state::AppState;

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    params: PageParams,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let listing = state
        .question_service
        .list_questions(params.window())
        .await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total_questions,
        current_category: None,
        categories: listing.categories,
    }))
}

/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateQuestionBody>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let req = CreateQuestionRequest::try_from(body)?;
    let created = state.question_service.create_question(req).await?;

    Ok(Json(CreatedResponse {
        success: true,
        created: created.created,
        questions: created.questions,
        total_questions: created.total_questions,
    }))
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let question_id = parse_id(&id)?;
    let deleted = state.question_service.delete_question(question_id).await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}

//! Category handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::response::{CategoriesResponse, CategoryQuestionsResponse};
use crate::error::ApiError;
use crate::extractors::{PageParams, parse_id};
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.category_service.list_categories().await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{id}/questions?page=N
pub async fn list_category_questions(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: PageParams,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category_id = parse_id(&id)?;
    let listing = state
        .question_service
        .list_by_category(category_id, params.window())
        .await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total_questions,
        current_category: listing.current_category,
    }))
}

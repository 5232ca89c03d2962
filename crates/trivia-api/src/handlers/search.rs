//! Question search handler.

use axum::Json;
use axum::extract::State;

use crate::dto::request::SearchBody;
use crate::dto::response::SearchResponse;
use crate::error::ApiError;
use crate::extractors::{AppJson, PageParams};
use crate::state::AppState;

/// POST /search?page=N
///
/// `total_questions` is the size of the returned page, which is what
/// existing clients display.
pub async fn search_questions(
    State(state): State<AppState>,
    params: PageParams,
    AppJson(body): AppJson<SearchBody>,
) -> Result<Json<SearchResponse>, ApiError> {
    let results = state
        .question_service
        .search(body.search_term.as_deref(), params.window())
        .await?;

    Ok(Json(SearchResponse {
        success: true,
        total_questions: results.questions.len(),
        questions: results.questions,
        current_category: None,
    }))
}

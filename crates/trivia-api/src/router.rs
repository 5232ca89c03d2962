//! Route definitions for the Trivia HTTP API.
//!
//! Routes are grouped by resource and merged into one router. Requests
//! that match no route, or match a path but not its method, get the same
//! JSON error body as handler failures.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the router with every route, bound to `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(category_routes())
        .merge(question_routes())
        .merge(search_routes())
        .merge(quiz_routes())
        .merge(health_routes())
        .fallback(handlers::fallback::not_found)
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed)
        .with_state(state)
}

/// Category listing and per-category questions
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::category::list_categories))
        .route(
            "/categories/{id}/questions",
            get(handlers::category::list_category_questions),
        )
}

/// Question listing, creation, and deletion
fn question_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/questions",
            get(handlers::question::list_questions).post(handlers::question::create_question),
        )
        .route("/questions/{id}", delete(handlers::question::delete_question))
}

/// Substring search over question text
fn search_routes() -> Router<AppState> {
    Router::new().route("/search", post(handlers::search::search_questions))
}

/// Quiz draws
fn quiz_routes() -> Router<AppState> {
    Router::new().route("/quizzes", post(handlers::quiz::next_question))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

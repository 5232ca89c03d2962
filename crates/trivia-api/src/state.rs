//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use trivia_core::config::AppConfig;
use trivia_database::TriviaStore;
use trivia_service::{CategoryService, QuestionService, QuizService, RandomSource, StdRandom};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Question and category store
    pub store: Arc<dyn TriviaStore>,

    // ── Services ─────────────────────────────────────────────
    /// Category listing
    pub category_service: Arc<CategoryService>,
    /// Question listing, search, and mutation
    pub question_service: Arc<QuestionService>,
    /// Quiz draws
    pub quiz_service: Arc<QuizService>,
}

impl AppState {
    /// Wire services over `store`, drawing quiz questions from a random
    /// source seeded per `config.quiz.seed`.
    pub fn new(config: AppConfig, store: Arc<dyn TriviaStore>) -> Self {
        let random = Arc::new(StdRandom::from_seed(config.quiz.seed));
        Self::with_random(config, store, random)
    }

    /// Wire services with an explicit random source.
    pub fn with_random(
        config: AppConfig,
        store: Arc<dyn TriviaStore>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        let category_service = Arc::new(CategoryService::new(Arc::clone(&store)));
        let question_service = Arc::new(QuestionService::new(Arc::clone(&store)));
        let quiz_service = Arc::new(QuizService::new(
            Arc::clone(&store),
            random,
            config.quiz.exhaustion,
        ));

        Self {
            config: Arc::new(config),
            store,
            category_service,
            question_service,
            quiz_service,
        }
    }
}

//! PostgreSQL-backed store.

use async_trait::async_trait;
use sqlx::PgPool;

use trivia_core::error::{AppError, ErrorKind};
use trivia_core::result::AppResult;
use trivia_entity::category::Category;
use trivia_entity::question::{NewQuestion, Question};

use super::TriviaStore;
use crate::repositories::{CategoryRepository, QuestionRepository};

/// Store that delegates to the sqlx repositories.
#[derive(Debug, Clone)]
pub struct PgTriviaStore {
    pool: PgPool,
    questions: QuestionRepository,
    categories: CategoryRepository,
}

impl PgTriviaStore {
    /// Create a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            questions: QuestionRepository::new(pool.clone()),
            categories: CategoryRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl TriviaStore for PgTriviaStore {
    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.categories.find_all().await
    }

    async fn find_category(&self, id: i32) -> AppResult<Option<Category>> {
        self.categories.find_by_id(id).await
    }

    async fn list_questions(&self) -> AppResult<Vec<Question>> {
        self.questions.find_all().await
    }

    async fn list_questions_in_category(&self, category_id: i32) -> AppResult<Vec<Question>> {
        self.questions.find_by_category(category_id).await
    }

    async fn search_questions(&self, term: &str) -> AppResult<Vec<Question>> {
        self.questions.search(term).await
    }

    async fn questions_excluding(
        &self,
        category_id: Option<i32>,
        excluded: &[i32],
    ) -> AppResult<Vec<Question>> {
        self.questions.find_excluding(category_id, excluded).await
    }

    async fn find_question(&self, id: i32) -> AppResult<Option<Question>> {
        self.questions.find_by_id(id).await
    }

    async fn insert_question(&self, data: &NewQuestion) -> AppResult<Question> {
        self.questions.create(data).await
    }

    async fn delete_question(&self, id: i32) -> AppResult<bool> {
        self.questions.delete(id).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}

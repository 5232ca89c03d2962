//! Question repository implementation.

use sqlx::PgPool;

use trivia_core::error::{AppError, ErrorKind};
use trivia_core::result::AppResult;
use trivia_entity::question::{NewQuestion, Question};

const COLUMNS: &str = "id, question, answer, difficulty, category";

/// Repository for question queries, inserts, and deletes.
///
/// Every listing is ordered by id, which is the canonical question order.
#[derive(Debug, Clone)]
pub struct QuestionRepository {
    pool: PgPool,
}

impl QuestionRepository {
    /// Create a new question repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a question by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Question>> {
        sqlx::query_as::<_, Question>(&format!("SELECT {COLUMNS} FROM questions WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find question", e))
    }

    /// All questions.
    pub async fn find_all(&self) -> AppResult<Vec<Question>> {
        sqlx::query_as::<_, Question>(&format!("SELECT {COLUMNS} FROM questions ORDER BY id ASC"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list questions", e))
    }

    /// Questions in one category.
    pub async fn find_by_category(&self, category_id: i32) -> AppResult<Vec<Question>> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id ASC"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list questions by category", e)
        })
    }

    /// Questions whose text contains `term`, ignoring case.
    pub async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {COLUMNS} FROM questions WHERE question ILIKE $1 ORDER BY id ASC"
        ))
        .bind(contains_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search questions", e))
    }

    /// Questions not in `excluded`, optionally restricted to one category.
    pub async fn find_excluding(
        &self,
        category_id: Option<i32>,
        excluded: &[i32],
    ) -> AppResult<Vec<Question>> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE NOT (id = ANY($1)) AND ($2::INTEGER IS NULL OR category = $2) \
             ORDER BY id ASC"
        ))
        .bind(excluded)
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list quiz candidates", e)
        })
    }

    /// Insert a question and return the stored row.
    pub async fn create(&self, data: &NewQuestion) -> AppResult<Question> {
        sqlx::query_as::<_, Question>(&format!(
            "INSERT INTO questions (question, answer, difficulty, category) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(&data.question)
        .bind(&data.answer)
        .bind(data.difficulty)
        .bind(data.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create question", e))
    }

    /// Delete a question. Returns `false` if no row had that id.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete question", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build an `ILIKE` pattern matching `term` anywhere, with wildcards in
/// `term` itself escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

//! The question store contract and its implementations.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use trivia_core::result::AppResult;
use trivia_entity::category::Category;
use trivia_entity::question::{NewQuestion, Question};

pub use memory::MemoryTriviaStore;
pub use postgres::PgTriviaStore;

/// Ordered query, filter, insert, and delete operations over questions
/// and categories.
///
/// Every method returning questions yields them ordered by id ascending.
/// Implementations provide their own locking; callers never compose
/// multi-step transactions.
#[async_trait]
pub trait TriviaStore: Send + Sync + std::fmt::Debug + 'static {
    /// All categories, ordered by id.
    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    /// Find a category by id.
    async fn find_category(&self, id: i32) -> AppResult<Option<Category>>;

    /// All questions.
    async fn list_questions(&self) -> AppResult<Vec<Question>>;

    /// Questions whose category equals `category_id`.
    async fn list_questions_in_category(&self, category_id: i32) -> AppResult<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case.
    async fn search_questions(&self, term: &str) -> AppResult<Vec<Question>>;

    /// Questions whose id is not in `excluded`, restricted to `category_id`
    /// when one is given.
    async fn questions_excluding(
        &self,
        category_id: Option<i32>,
        excluded: &[i32],
    ) -> AppResult<Vec<Question>>;

    /// Find a question by id.
    async fn find_question(&self, id: i32) -> AppResult<Option<Question>>;

    /// Store a new question under the next id.
    ///
    /// Fails with a database error if the question or answer text is absent.
    async fn insert_question(&self, data: &NewQuestion) -> AppResult<Question>;

    /// Remove a question. Returns `false` if the id was unknown.
    async fn delete_question(&self, id: i32) -> AppResult<bool>;

    /// Check that the store can serve queries.
    async fn health_check(&self) -> AppResult<bool>;
}

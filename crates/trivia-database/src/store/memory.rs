//! In-memory store for single-process deployments and tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use trivia_core::error::AppError;
use trivia_core::result::AppResult;
use trivia_entity::category::Category;
use trivia_entity::question::{NewQuestion, Question};

use super::TriviaStore;

/// The categories shipped with the trivia application, in id order.
pub const STANDARD_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(Debug, Default)]
struct InnerState {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    /// Highest question id ever assigned. Deleted ids are not handed out again.
    last_question_id: i32,
}

/// Store holding everything in ordered maps behind a Tokio `RwLock`.
#[derive(Debug, Clone, Default)]
pub struct MemoryTriviaStore {
    state: Arc<RwLock<InnerState>>,
}

impl MemoryTriviaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding [`STANDARD_CATEGORIES`] with ids 1 to 6.
    pub fn with_standard_categories() -> Self {
        let categories = STANDARD_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(name, id)| Category {
                id,
                kind: name.to_string(),
            })
            .collect();
        Self::with_categories(categories)
    }

    /// Create a store holding the given categories.
    pub fn with_categories(categories: Vec<Category>) -> Self {
        let state = InnerState {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            ..InnerState::default()
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Store a question under an explicit id, as a fixture or import would.
    ///
    /// Later inserts continue numbering after the highest id seen.
    pub async fn put_question(&self, question: Question) {
        let mut state = self.state.write().await;
        state.last_question_id = state.last_question_id.max(question.id);
        state.questions.insert(question.id, question);
    }

    async fn filter_questions(&self, keep: impl Fn(&Question) -> bool) -> Vec<Question> {
        let state = self.state.read().await;
        state
            .questions
            .values()
            .filter(|q| keep(q))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TriviaStore for MemoryTriviaStore {
    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        let state = self.state.read().await;
        Ok(state.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: i32) -> AppResult<Option<Category>> {
        let state = self.state.read().await;
        Ok(state.categories.get(&id).cloned())
    }

    async fn list_questions(&self) -> AppResult<Vec<Question>> {
        Ok(self.filter_questions(|_| true).await)
    }

    async fn list_questions_in_category(&self, category_id: i32) -> AppResult<Vec<Question>> {
        Ok(self
            .filter_questions(|q| q.category == Some(category_id))
            .await)
    }

    async fn search_questions(&self, term: &str) -> AppResult<Vec<Question>> {
        Ok(self.filter_questions(|q| q.matches(term)).await)
    }

    async fn questions_excluding(
        &self,
        category_id: Option<i32>,
        excluded: &[i32],
    ) -> AppResult<Vec<Question>> {
        Ok(self
            .filter_questions(|q| {
                !excluded.contains(&q.id)
                    && category_id.is_none_or(|id| q.category == Some(id))
            })
            .await)
    }

    async fn find_question(&self, id: i32) -> AppResult<Option<Question>> {
        let state = self.state.read().await;
        Ok(state.questions.get(&id).cloned())
    }

    async fn insert_question(&self, data: &NewQuestion) -> AppResult<Question> {
        let (Some(question), Some(answer)) = (&data.question, &data.answer) else {
            return Err(AppError::database(
                "Failed to create question: question and answer must not be null",
            ));
        };

        let mut state = self.state.write().await;
        let id = state
            .last_question_id
            .checked_add(1)
            .ok_or_else(|| AppError::database("Failed to create question: id space exhausted"))?;

        let stored = Question {
            id,
            question: question.clone(),
            answer: answer.clone(),
            difficulty: data.difficulty,
            category: data.category,
        };
        state.last_question_id = id;
        state.questions.insert(id, stored.clone());
        debug!(question_id = id, "Stored question in memory");
        Ok(stored)
    }

    async fn delete_question(&self, id: i32) -> AppResult<bool> {
        let mut state = self.state.write().await;
        Ok(state.questions.remove(&id).is_some())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

//! Question listing, search, creation, and deletion.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use validator::Validate;

use trivia_core::error::AppError;
use trivia_core::types::PageWindow;
use trivia_database::TriviaStore;
use trivia_entity::category::{Category, CategoryMap};
use trivia_entity::question::{NewQuestion, Question};

/// One page of all questions.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionListing {
    /// Questions on the requested page.
    pub questions: Vec<Question>,
    /// Number of questions across all pages.
    pub total_questions: usize,
    /// Every category, for rendering the sidebar.
    pub categories: CategoryMap,
}

/// One page of the questions in a category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    /// Questions on the requested page. May be empty.
    pub questions: Vec<Question>,
    /// Number of questions in the category across all pages.
    pub total_questions: usize,
    /// The category that was listed.
    pub current_category: i32,
}

/// One page of search matches.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    /// Matches on the requested page. Never empty.
    pub questions: Vec<Question>,
    /// Number of matches across all pages.
    pub total_matches: usize,
}

/// Outcome of creating a question.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedQuestion {
    /// Id assigned to the new question.
    pub created: i32,
    /// First page of all questions after the insert.
    pub questions: Vec<Question>,
    /// Number of questions after the insert.
    pub total_questions: usize,
}

/// Fields accepted when creating a question.
///
/// Only an empty string is rejected here. An absent value passes
/// validation and is refused by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    /// Question text.
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: Option<String>,
    /// Answer text.
    #[validate(length(min = 1, message = "answer must not be empty"))]
    pub answer: Option<String>,
    /// Difficulty, stored as given.
    pub difficulty: Option<i32>,
    /// Category id, stored as given.
    pub category: Option<i32>,
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(req: CreateQuestionRequest) -> Self {
        Self {
            question: req.question,
            answer: req.answer,
            difficulty: req.difficulty,
            category: req.category,
        }
    }
}

/// Pagination, filtering, and mutation over the question store.
#[derive(Debug, Clone)]
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
}

impl QuestionService {
    /// Creates a new question service.
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Lists one page of all questions with the category mapping.
    ///
    /// An empty page is reported as not found.
    pub async fn list_questions(&self, window: PageWindow) -> Result<QuestionListing, AppError> {
        let all = self.store.list_questions().await?;
        let questions = window.apply(&all, Question::clone);
        if questions.is_empty() {
            return Err(AppError::not_found(format!(
                "Page {} is empty ({} questions)",
                window.page,
                all.len()
            )));
        }

        let categories = self.store.list_categories().await?;

        Ok(QuestionListing {
            questions,
            total_questions: all.len(),
            categories: Category::to_map(&categories),
        })
    }

    /// Lists one page of the questions in a category.
    ///
    /// The category must exist. Unlike [`Self::list_questions`], an empty
    /// page is returned as-is.
    pub async fn list_by_category(
        &self,
        category_id: i32,
        window: PageWindow,
    ) -> Result<CategoryListing, AppError> {
        self.store
            .find_category(category_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {category_id} not found")))?;

        let in_category = self.store.list_questions_in_category(category_id).await?;

        Ok(CategoryListing {
            questions: window.apply(&in_category, Question::clone),
            total_questions: in_category.len(),
            current_category: category_id,
        })
    }

    /// Searches question text for `term`, ignoring case.
    ///
    /// An absent term matches every question. An empty page, or a failing
    /// store query, is reported as unprocessable.
    pub async fn search(
        &self,
        term: Option<&str>,
        window: PageWindow,
    ) -> Result<SearchResults, AppError> {
        let term = term.unwrap_or_default();
        let matches = self
            .store
            .search_questions(term)
            .await
            .map_err(AppError::into_unprocessable)?;

        let questions = window.apply(&matches, Question::clone);
        debug!(term, matches = matches.len(), page = window.page, "Searched questions");

        if questions.is_empty() {
            return Err(AppError::unprocessable(format!(
                "No questions match '{term}' on page {}",
                window.page
            )));
        }

        Ok(SearchResults {
            questions,
            total_matches: matches.len(),
        })
    }

    /// Stores a new question and returns the first page of the updated set.
    pub async fn create_question(
        &self,
        req: CreateQuestionRequest,
    ) -> Result<CreatedQuestion, AppError> {
        req.validate()
            .map_err(|e| AppError::unprocessable(format!("Invalid question: {e}")))?;

        let question = self.store.insert_question(&req.into()).await?;
        info!(
            question_id = question.id,
            category = ?question.category,
            "Question created"
        );

        let all = self.store.list_questions().await?;

        Ok(CreatedQuestion {
            created: question.id,
            questions: PageWindow::first().apply(&all, Question::clone),
            total_questions: all.len(),
        })
    }

    /// Deletes a question by id and returns the id.
    pub async fn delete_question(&self, question_id: i32) -> Result<i32, AppError> {
        if !self.store.delete_question(question_id).await? {
            return Err(AppError::not_found(format!(
                "Question {question_id} not found"
            )));
        }

        info!(question_id, "Question deleted");
        Ok(question_id)
    }
}

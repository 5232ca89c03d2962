//! Quiz round orchestration.

use std::sync::Arc;

use tracing::debug;

use trivia_core::config::ExhaustionRule;
use trivia_core::error::AppError;
use trivia_database::TriviaStore;
use trivia_entity::question::Question;

use super::random::RandomSource;
use super::selection::select_candidate;

/// Which questions a quiz round draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    /// Every category. Sent by clients as id `0`.
    All,
    /// A single category.
    Category(i32),
}

impl QuizCategory {
    /// Interpret a client-supplied category id.
    pub fn from_id(id: i32) -> Self {
        match id {
            0 => Self::All,
            id => Self::Category(id),
        }
    }

    fn filter(self) -> Option<i32> {
        match self {
            Self::All => None,
            Self::Category(id) => Some(id),
        }
    }
}

/// Serves one unserved question per round.
///
/// Holds no per-client state; the client resubmits every previously
/// served id with each request.
#[derive(Debug, Clone)]
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
    random: Arc<dyn RandomSource>,
    rule: ExhaustionRule,
}

impl QuizService {
    /// Creates a new quiz service.
    pub fn new(
        store: Arc<dyn TriviaStore>,
        random: Arc<dyn RandomSource>,
        rule: ExhaustionRule,
    ) -> Self {
        Self {
            store,
            random,
            rule,
        }
    }

    /// Draw the next question, or `None` when the round is exhausted.
    ///
    /// Store failures are reported as unprocessable.
    pub async fn next_question(
        &self,
        category: QuizCategory,
        previous_questions: &[i32],
    ) -> Result<Option<Question>, AppError> {
        let pool = self
            .store
            .questions_excluding(category.filter(), previous_questions)
            .await
            .map_err(AppError::into_unprocessable)?;

        let candidates = pool.len();
        let picked = select_candidate(pool, previous_questions.len(), self.rule, &*self.random);

        debug!(
            ?category,
            served = previous_questions.len(),
            candidates,
            picked = ?picked.as_ref().map(|q| q.id),
            "Quiz draw"
        );

        Ok(picked)
    }
}

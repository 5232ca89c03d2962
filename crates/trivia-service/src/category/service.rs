//! Category listing.

use std::sync::Arc;

use trivia_core::error::AppError;
use trivia_database::TriviaStore;
use trivia_entity::category::{Category, CategoryMap};

/// Serves the read-only category list.
#[derive(Debug, Clone)]
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// All categories as an id to name mapping.
    ///
    /// An empty category table is reported as not found.
    pub async fn list_categories(&self) -> Result<CategoryMap, AppError> {
        let categories = self.store.list_categories().await?;
        if categories.is_empty() {
            return Err(AppError::not_found("No categories defined"));
        }
        Ok(Category::to_map(&categories))
    }
}

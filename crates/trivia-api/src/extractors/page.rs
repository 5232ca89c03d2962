//! `page` query parameter extractor.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use trivia_core::error::AppError;
use trivia_core::types::PageWindow;

use crate::error::ApiError;

/// Query parameters for paginated endpoints.
///
/// `page` is kept as raw text so that a non-numeric value falls back to
/// the first page instead of rejecting the request. When `page` repeats,
/// the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    /// Page number (1-based, default: 1).
    pub page: Option<String>,
}

impl PageParams {
    /// Picks `page` out of decoded query pairs.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let page = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "page").then_some(value));
        Self { page }
    }

    /// Converts to a [`PageWindow`].
    pub fn window(&self) -> PageWindow {
        PageWindow::from_param(self.page.as_deref())
    }
}

impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
        Ok(Self::from_pairs(pairs))
    }
}

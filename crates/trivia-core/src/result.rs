//! Convenience result type alias for the Trivia API.

use crate::error::AppError;

/// A specialized `Result` type for Trivia operations.
pub type AppResult<T> = Result<T, AppError>;

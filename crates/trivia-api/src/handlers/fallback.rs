//! Handlers for requests no route accepts.

use trivia_core::error::AppError;

use crate::error::ApiError;

/// Unknown path.
pub async fn not_found() -> ApiError {
    AppError::not_found("No route for path").into()
}

/// Known path, unsupported method.
pub async fn method_not_allowed() -> ApiError {
    AppError::method_not_allowed("Method not supported for path").into()
}

//! Typed path parameter helpers.

use trivia_core::error::AppError;

/// Parses an integer id from a path segment.
///
/// A segment that is not an integer names no resource, so it is reported
/// as not found rather than as a bad request.
pub fn parse_id(s: &str) -> Result<i32, AppError> {
    s.parse::<i32>()
        .map_err(|_| AppError::not_found(format!("No resource with id '{s}'")))
}

//! # trivia-api
//!
//! HTTP API layer for the Trivia application built on Axum.
//!
//! Provides the REST endpoints, request logging and CORS middleware,
//! extractors, DTOs, and the mapping from [`AppError`](trivia_core::AppError)
//! kinds to status codes.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;

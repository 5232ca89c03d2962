//! # trivia-core
//!
//! Core crate for the Trivia API. Contains configuration schemas, the
//! page window type used for question listings, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other Trivia crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

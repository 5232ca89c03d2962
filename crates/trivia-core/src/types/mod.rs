//! Core type definitions used across the Trivia workspace.

pub mod pagination;

pub use pagination::{PAGE_SIZE, PageWindow};

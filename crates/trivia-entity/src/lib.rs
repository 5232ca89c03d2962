//! # trivia-entity
//!
//! Domain entity models for the Trivia API. Every struct in this crate
//! represents a database table row or the data needed to create one.
//! Row types derive `sqlx::FromRow`.

pub mod category;
pub mod question;

pub use category::{Category, CategoryMap};
pub use question::{NewQuestion, Question};

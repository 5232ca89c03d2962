//! # trivia-database
//!
//! Persistence for the Trivia API. Defines the [`TriviaStore`] contract
//! used by the service layer, a PostgreSQL implementation built on sqlx
//! repositories, and an in-memory implementation for single-process
//! deployments and tests.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{MemoryTriviaStore, PgTriviaStore, TriviaStore};

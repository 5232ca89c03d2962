//! Category lookups.

pub mod service;

pub use service::CategoryService;

//! Custom Axum extractors.

pub mod json;
pub mod page;
pub mod path;

pub use json::AppJson;
pub use page::PageParams;
pub use path::parse_id;

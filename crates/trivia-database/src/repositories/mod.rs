//! Repository implementations for questions and categories.

pub mod category;
pub mod question;

pub use category::CategoryRepository;
pub use question::QuestionRepository;

//! Question listing, search, creation, and deletion.

pub mod service;

pub use service::{
    CategoryListing, CreateQuestionRequest, CreatedQuestion, QuestionListing, QuestionService,
    SearchResults,
};

//! # trivia-service
//!
//! Business logic for the Trivia API. Services hold an `Arc` to the
//! [`TriviaStore`](trivia_database::TriviaStore) and turn store results
//! into paginated listings, validated inserts, and quiz draws.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time.

pub mod category;
pub mod question;
pub mod quiz;


pub use category::CategoryService;
pub use question::{
    CategoryListing, CreateQuestionRequest, CreatedQuestion, QuestionListing, QuestionService,
    SearchResults,
};
pub use quiz::{QuizCategory, QuizService, RandomSource, StdRandom};

//! Quiz draws: random selection of an unserved question.

pub mod random;
pub mod selection;
pub mod service;

pub use random::{RandomSource, StdRandom};
pub use selection::select_candidate;
pub use service::{QuizCategory, QuizService};

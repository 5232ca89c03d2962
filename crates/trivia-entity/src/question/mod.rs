//! Question domain entities.

pub mod model;

pub use model::{NewQuestion, Question};

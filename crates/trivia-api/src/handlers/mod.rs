//! Route handlers organized by resource.

pub mod category;
pub mod fallback;
pub mod health;
pub mod question;
pub mod quiz;
pub mod search;

//! Quiz draw configuration.

use serde::{Deserialize, Serialize};

/// When a quiz round counts as exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionRule {
    /// The round ends once no candidate question remains.
    #[default]
    EmptyPool,
    /// The round ends once the candidate pool is no larger than the number
    /// of previously served questions. Kept for clients that depend on it.
    Legacy,
}

/// Quiz settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Fixed seed for the random source. Draws are reproducible when set.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Exhaustion rule applied before drawing.
    #[serde(default)]
    pub exhaustion: ExhaustionRule,
}

//! Question store configuration.

use serde::{Deserialize, Serialize};

/// Which backend holds questions and categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreProvider {
    /// PostgreSQL via sqlx.
    #[default]
    Postgres,
    /// Process-local in-memory store. Data is lost on restart.
    Memory,
}

/// Store selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend to use.
    #[serde(default)]
    pub provider: StoreProvider,
    /// Seed the in-memory store with the standard trivia categories.
    #[serde(default = "default_seed_categories")]
    pub seed_categories: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: StoreProvider::default(),
            seed_categories: default_seed_categories(),
        }
    }
}

fn default_seed_categories() -> bool {
    true
}

//! Category entity model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A question category such as "Science".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique identifier.
    pub id: i32,
    /// Display name.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Category id to display name, ordered by id.
///
/// Serializes as a JSON object keyed by the stringified id.
pub type CategoryMap = BTreeMap<i32, String>;

impl Category {
    /// Collect categories into an id to name mapping.
    pub fn to_map(categories: &[Category]) -> CategoryMap {
        categories
            .iter()
            .map(|c| (c.id, c.kind.clone()))
            .collect()
    }
}

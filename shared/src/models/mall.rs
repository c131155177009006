//! Mall Model

use serde::{Deserialize, Serialize};

use crate::types::CategoryId;

/// Shopping mall entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mall {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub image: String,
    pub boutiques_count: i32,
    /// A mall belongs to every category listed here (membership, not equality)
    #[serde(default)]
    pub categories: Vec<CategoryId>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_image: Option<String>,
}

impl Mall {
    /// Whether the mall is listed under the given category
    pub fn has_category(&self, category_id: CategoryId) -> bool {
        self.categories.contains(&category_id)
    }
}

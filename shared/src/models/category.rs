//! Category Model

use serde::{Deserialize, Serialize};

use crate::types::{ALL_CATEGORIES, CategoryId};

/// Category entity
///
/// Id `0` is reserved for "All" and never appears as a real category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Icon name (e.g. "shirt", "watch"), rendered by presentation
    pub icon: String,
}

impl Category {
    /// Whether this record illegally uses the reserved "All" id
    pub fn is_reserved(&self) -> bool {
        self.id == ALL_CATEGORIES
    }
}

//! Filter criteria value object

use serde::{Deserialize, Serialize};
use shared::types::{CategoryId, normalize_category};

/// Active filter criteria for one screen
///
/// Owned by the screen controller and passed by reference into
/// [`filter`](super::filter). `category_id` is `None` when no category is
/// selected; a stored `Some(0)` is treated the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

impl FilterCriteria {
    /// No criteria: everything matches
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Builder form of [`select_category`](Self::select_category)
    pub fn with_category(mut self, id: CategoryId) -> Self {
        self.select_category(id);
        self
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select a category chip; the "All" sentinel clears the selection
    pub fn select_category(&mut self, id: CategoryId) {
        self.category_id = normalize_category(id);
    }

    pub fn clear_category(&mut self) {
        self.category_id = None;
    }

    /// Clear query and category
    pub fn reset(&mut self) {
        self.query.clear();
        self.category_id = None;
    }

    /// Selected category with the sentinel folded to `None`
    pub fn category(&self) -> Option<CategoryId> {
        self.category_id.and_then(normalize_category)
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Whether any criterion narrows the result
    pub fn is_active(&self) -> bool {
        self.has_query() || self.category().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::types::ALL_CATEGORIES;

    #[test]
    fn test_default_is_inactive() {
        let criteria = FilterCriteria::new();
        assert!(!criteria.is_active());
        assert_eq!(criteria.category(), None);
    }

    #[test]
    fn test_select_sentinel_clears() {
        let mut criteria = FilterCriteria::new().with_category(3);
        assert_eq!(criteria.category_id, Some(3));

        criteria.select_category(ALL_CATEGORIES);
        assert_eq!(criteria.category_id, None);
        assert!(!criteria.is_active());
    }

    #[test]
    fn test_stored_sentinel_is_inactive() {
        let criteria = FilterCriteria {
            query: String::new(),
            category_id: Some(0),
        };
        assert_eq!(criteria.category(), None);
        assert!(!criteria.is_active());
    }

    #[test]
    fn test_reset() {
        let mut criteria = FilterCriteria::new().with_query("x").with_category(2);
        assert!(criteria.is_active());

        criteria.reset();
        assert_eq!(criteria, FilterCriteria::new());
    }

    #[test]
    fn test_serde_shape() {
        let criteria = FilterCriteria::new().with_query("zara").with_category(4);
        let json = serde_json::to_value(&criteria).unwrap();
        assert_eq!(json, serde_json::json!({ "query": "zara", "categoryId": 4 }));

        let back: FilterCriteria = serde_json::from_str("{}").unwrap();
        assert_eq!(back, FilterCriteria::new());
    }
}

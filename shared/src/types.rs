//! Common types for the shared crate

/// Category identifier
pub type CategoryId = i64;

/// Reserved category id meaning "All" (no category filter)
pub const ALL_CATEGORIES: CategoryId = 0;

/// Normalize a tapped category id: the sentinel clears the selection
pub fn normalize_category(id: CategoryId) -> Option<CategoryId> {
    if id == ALL_CATEGORIES { None } else { Some(id) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category(ALL_CATEGORIES), None);
        assert_eq!(normalize_category(3), Some(3));
    }
}

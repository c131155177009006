//! Catalog Matcher
//!
//! Text and category predicates shared by every screen's list filtering.

use shared::types::{ALL_CATEGORIES, CategoryId};

/// How an entity kind is matched against a selected category
///
/// Malls list several categories (membership), boutiques carry exactly one
/// (equality), products are never filtered by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryPredicate<'a> {
    /// Selected id must be a member of the set
    Membership(&'a [CategoryId]),
    /// Selected id must equal the value
    Equality(CategoryId),
    /// Category selection is ignored
    Unscoped,
}

impl CategoryPredicate<'_> {
    /// Check the predicate against a selection; `None` and the sentinel pass
    pub fn matches(&self, selected: Option<CategoryId>) -> bool {
        let Some(target) = selected.filter(|id| *id != ALL_CATEGORIES) else {
            return true;
        };
        match self {
            CategoryPredicate::Membership(ids) => ids.contains(&target),
            CategoryPredicate::Equality(id) => *id == target,
            CategoryPredicate::Unscoped => true,
        }
    }
}

/// Case-insensitive substring match of `query` against any of the fields
///
/// An empty query matches everything. The query is not trimmed.
pub fn matches_text<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

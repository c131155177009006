//! Catalog Filter
//!
//! Pure, stable selection of catalog entities against a [`FilterCriteria`].
//!
//! # Matching
//!
//! An entity is kept when it passes every active criterion:
//!
//! | Entity   | Text (case-insensitive substring)          | Category            |
//! |----------|--------------------------------------------|---------------------|
//! | Mall     | name                                       | membership          |
//! | Boutique | name, or name + description on search      | equality            |
//! | Product  | name                                       | never filtered      |
//!
//! Results keep the input order. Filtering never fails: an empty input
//! gives an empty output, empty criteria give the whole input back.

mod criteria;
mod matcher;

pub use criteria::FilterCriteria;
pub use matcher::{CategoryPredicate, matches_text};

use shared::models::{Boutique, Mall, Product};

/// Which text fields the query is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextScope {
    /// Name only
    #[default]
    Name,
    /// Name or description (boutique search)
    NameAndDescription,
}

/// An entity the catalog filter can select
pub trait Filterable {
    fn name(&self) -> &str;

    /// Secondary text searched under [`TextScope::NameAndDescription`]
    fn description(&self) -> Option<&str> {
        None
    }

    fn category_predicate(&self) -> CategoryPredicate<'_>;
}

impl Filterable for Mall {
    fn name(&self) -> &str {
        &self.name
    }

    fn category_predicate(&self) -> CategoryPredicate<'_> {
        CategoryPredicate::Membership(&self.categories)
    }
}

impl Filterable for Boutique {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }

    fn category_predicate(&self) -> CategoryPredicate<'_> {
        CategoryPredicate::Equality(self.category)
    }
}

impl Filterable for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn category_predicate(&self) -> CategoryPredicate<'_> {
        CategoryPredicate::Unscoped
    }
}

impl<T: Filterable + ?Sized> Filterable for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> Option<&str> {
        (**self).description()
    }

    fn category_predicate(&self) -> CategoryPredicate<'_> {
        (**self).category_predicate()
    }
}

/// Check a single entity against the criteria
pub fn matches<E: Filterable + ?Sized>(
    entity: &E,
    criteria: &FilterCriteria,
    scope: TextScope,
) -> bool {
    let text_ok = match scope {
        TextScope::Name => matches_text(&criteria.query, [entity.name()]),
        TextScope::NameAndDescription => matches_text(
            &criteria.query,
            std::iter::once(entity.name()).chain(entity.description()),
        ),
    };
    text_ok && entity.category_predicate().matches(criteria.category())
}

/// Borrowing filter: references to the matching entities, in input order
pub fn select<'a, E: Filterable>(
    entities: &'a [E],
    criteria: &FilterCriteria,
    scope: TextScope,
) -> Vec<&'a E> {
    let selected: Vec<&E> = entities
        .iter()
        .filter(|e| matches(*e, criteria, scope))
        .collect();
    tracing::trace!(
        total = entities.len(),
        selected = selected.len(),
        query = %criteria.query,
        category = ?criteria.category(),
        "catalog filter applied"
    );
    selected
}

/// Owning filter: clones of the matching entities, in input order
pub fn filter<E: Filterable + Clone>(
    entities: &[E],
    criteria: &FilterCriteria,
    scope: TextScope,
) -> Vec<E> {
    select(entities, criteria, scope)
        .into_iter()
        .cloned()
        .collect()
}

//! Explore screen: all malls, searchable by name, filterable by category

use shared::models::Mall;
use shared::types::CategoryId;

use super::selection::{CategoryChip, ResultState, category_chips};
use crate::catalog::Catalog;
use crate::filter::{FilterCriteria, TextScope, select};

#[derive(Debug, Clone)]
pub struct ExploreScreen<'a> {
    catalog: &'a Catalog,
    criteria: FilterCriteria,
}

impl<'a> ExploreScreen<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::new(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.set_query(query);
    }

    pub fn select_category(&mut self, id: CategoryId) {
        self.criteria.select_category(id);
    }

    /// "Reset filters" from the empty state
    pub fn reset(&mut self) {
        self.criteria.reset();
    }

    pub fn chips(&self) -> Vec<CategoryChip> {
        category_chips(self.catalog.categories(), self.criteria.category())
    }

    /// Malls matching name query AND category membership
    pub fn malls(&self) -> Vec<&'a Mall> {
        select(self.catalog.malls(), &self.criteria, TextScope::Name)
    }

    pub fn result_state(&self) -> ResultState {
        ResultState::classify(&self.criteria, self.malls().len())
    }
}

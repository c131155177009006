//! Mall detail screen: one mall and its boutiques, filterable by category

use shared::models::{Boutique, Mall};
use shared::types::CategoryId;

use super::selection::{CategoryChip, ResultState, category_chips};
use crate::catalog::Catalog;
use crate::filter::{FilterCriteria, TextScope, select};

#[derive(Debug, Clone)]
pub struct MallDetailScreen<'a> {
    catalog: &'a Catalog,
    mall: &'a Mall,
    boutiques: Vec<&'a Boutique>,
    criteria: FilterCriteria,
}

impl<'a> MallDetailScreen<'a> {
    /// Open the detail view; `None` renders "Mall not found"
    pub fn open(catalog: &'a Catalog, mall_id: i64) -> Option<Self> {
        let Some(mall) = catalog.mall(mall_id) else {
            tracing::debug!(mall_id, "mall detail requested for unknown id");
            return None;
        };
        Some(Self {
            catalog,
            mall,
            boutiques: catalog.boutiques_in_mall(mall_id),
            criteria: FilterCriteria::new(),
        })
    }

    pub fn mall(&self) -> &'a Mall {
        self.mall
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn select_category(&mut self, id: CategoryId) {
        self.criteria.select_category(id);
    }

    pub fn reset(&mut self) {
        self.criteria.reset();
    }

    pub fn chips(&self) -> Vec<CategoryChip> {
        category_chips(self.catalog.categories(), self.criteria.category())
    }

    /// Every boutique in the mall, unfiltered
    pub fn all_boutiques(&self) -> &[&'a Boutique] {
        &self.boutiques
    }

    /// Boutiques of this mall whose single category equals the selection
    pub fn boutiques(&self) -> Vec<&'a Boutique> {
        select(&self.boutiques, &self.criteria, TextScope::Name)
            .into_iter()
            .copied()
            .collect()
    }

    pub fn result_state(&self) -> ResultState {
        ResultState::classify(&self.criteria, self.boutiques().len())
    }
}

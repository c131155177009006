//! Home screen: featured malls, trending products, recently added malls,
//! search entry point

use serde::{Deserialize, Serialize};
use shared::models::{Mall, Product};
use shared::types::CategoryId;

use super::search::SearchParams;
use super::selection::{CategoryChip, category_chips};
use crate::catalog::Catalog;
use crate::filter::FilterCriteria;

/// Default length of the "Recently Added" section
pub const RECENT_MALLS_PREVIEW: usize = 3;

/// Request to navigate to the search screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

impl From<SearchRequest> for SearchParams {
    fn from(req: SearchRequest) -> Self {
        SearchParams::query(req.query)
    }
}

#[derive(Debug, Clone)]
pub struct HomeScreen<'a> {
    catalog: &'a Catalog,
    // Highlight state only; the home lists are not filtered by it
    criteria: FilterCriteria,
    recent_preview: usize,
}

impl<'a> HomeScreen<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::new(),
            recent_preview: RECENT_MALLS_PREVIEW,
        }
    }

    pub fn with_recent_preview(mut self, count: usize) -> Self {
        self.recent_preview = count;
        self
    }

    pub fn select_category(&mut self, id: CategoryId) {
        self.criteria.select_category(id);
    }

    pub fn selected_category(&self) -> Option<CategoryId> {
        self.criteria.category()
    }

    pub fn chips(&self) -> Vec<CategoryChip> {
        category_chips(self.catalog.categories(), self.criteria.category())
    }

    pub fn featured_malls(&self) -> Vec<&'a Mall> {
        self.catalog.malls().iter().filter(|m| m.featured).collect()
    }

    pub fn trending_products(&self) -> &'a [Product] {
        self.catalog.products()
    }

    /// Leading malls in dataset order; there is no creation timestamp
    pub fn recent_malls(&self) -> &'a [Mall] {
        let malls = self.catalog.malls();
        &malls[..self.recent_preview.min(malls.len())]
    }

    /// Submit the search bar; blank text stays on the home screen
    pub fn submit_search(&self, text: &str) -> Option<SearchRequest> {
        if text.trim().is_empty() {
            return None;
        }
        Some(SearchRequest {
            query: text.to_string(),
        })
    }
}

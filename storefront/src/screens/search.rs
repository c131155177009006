//! Search screen
//!
//! Two tabs over one shared set of criteria: boutiques (name OR
//! description, category equality) and trending products (name only,
//! category ignored).

use serde::{Deserialize, Serialize};
use shared::models::{Boutique, Product};
use shared::types::CategoryId;

use super::selection::{CategoryChip, ResultState, SearchTab, category_chips};
use crate::catalog::Catalog;
use crate::filter::{FilterCriteria, TextScope, select};

/// Navigation parameters the search screen is opened with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// `"trending"` preselects the products tab
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl SearchParams {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            filter: None,
        }
    }

    /// "See all" on the trending section
    pub fn trending() -> Self {
        Self {
            query: None,
            filter: Some("trending".to_string()),
        }
    }
}

/// Results of the active tab
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults<'a> {
    Boutiques(Vec<&'a Boutique>),
    Products(Vec<&'a Product>),
}

impl SearchResults<'_> {
    pub fn len(&self) -> usize {
        match self {
            Self::Boutiques(b) => b.len(),
            Self::Products(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
pub struct SearchScreen<'a> {
    catalog: &'a Catalog,
    criteria: FilterCriteria,
    active_tab: SearchTab,
}

impl<'a> SearchScreen<'a> {
    pub fn open(catalog: &'a Catalog, params: &SearchParams) -> Self {
        let criteria = FilterCriteria::new().with_query(params.query.clone().unwrap_or_default());
        let active_tab = SearchTab::from_filter_param(params.filter.as_deref());
        tracing::debug!(query = %criteria.query, tab = active_tab.as_str(), "search screen opened");
        Self {
            catalog,
            criteria,
            active_tab,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn active_tab(&self) -> SearchTab {
        self.active_tab
    }

    /// Switching tabs keeps the shared query and category
    pub fn select_tab(&mut self, tab: SearchTab) {
        self.active_tab = tab;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.set_query(query);
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

    pub fn boutiques(&self) -> Vec<&'a Boutique> {
        select(
            self.catalog.boutiques(),
            &self.criteria,
            TextScope::NameAndDescription,
        )
    }

    pub fn products(&self) -> Vec<&'a Product> {
        select(self.catalog.products(), &self.criteria, TextScope::Name)
    }

    pub fn results(&self) -> SearchResults<'a> {
        match self.active_tab {
            SearchTab::Boutiques => SearchResults::Boutiques(self.boutiques()),
            SearchTab::Products => SearchResults::Products(self.products()),
        }
    }

    pub fn result_state(&self) -> ResultState {
        ResultState::classify(&self.criteria, self.results().len())
    }
}

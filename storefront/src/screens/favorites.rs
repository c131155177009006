//! Favorites screen
//!
//! Placeholder: there is no favorite tracking. The screen previews a fixed
//! leading slice of the catalog.

use shared::models::{Boutique, Mall};

use super::selection::FavoritesTab;
use crate::catalog::Catalog;

#[derive(Debug, Clone)]
pub struct FavoritesScreen<'a> {
    catalog: &'a Catalog,
    active_tab: FavoritesTab,
    malls_preview: usize,
    boutiques_preview: usize,
}

impl<'a> FavoritesScreen<'a> {
    pub fn new(catalog: &'a Catalog, malls_preview: usize, boutiques_preview: usize) -> Self {
        Self {
            catalog,
            active_tab: FavoritesTab::default(),
            malls_preview,
            boutiques_preview,
        }
    }

    pub fn active_tab(&self) -> FavoritesTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: FavoritesTab) {
        self.active_tab = tab;
    }

    pub fn malls(&self) -> &'a [Mall] {
        let malls = self.catalog.malls();
        &malls[..self.malls_preview.min(malls.len())]
    }

    pub fn boutiques(&self) -> &'a [Boutique] {
        let boutiques = self.catalog.boutiques();
        &boutiques[..self.boutiques_preview.min(boutiques.len())]
    }

    /// Number of entries on the active tab
    pub fn count(&self) -> usize {
        match self.active_tab {
            FavoritesTab::Boutiques => self.boutiques().len(),
            FavoritesTab::Malls => self.malls().len(),
        }
    }
}

//! Storefront state: configuration plus the frozen catalog

use std::sync::Arc;

use shared::error::AppResult;

use super::config::Config;
use crate::catalog::Catalog;
use crate::screens::{
    BoutiqueDetailScreen, ExploreScreen, FavoritesScreen, HomeScreen, MallDetailScreen,
    SearchParams, SearchScreen,
};

/// Process-lifetime state; cheap to clone
#[derive(Debug, Clone)]
pub struct StorefrontState {
    config: Config,
    catalog: Arc<Catalog>,
}

impl StorefrontState {
    /// Load the catalog named by the config (or the bundled sample)
    pub fn initialize(config: &Config) -> AppResult<Self> {
        config.validate()?;
        let catalog = match &config.data_path {
            Some(path) => Catalog::from_path(path)?,
            None => {
                tracing::info!("no CATALOG_DATA_PATH set, using bundled sample catalog");
                Catalog::bundled()?
            }
        };
        Ok(Self::with_catalog(config.clone(), catalog))
    }

    pub fn with_catalog(config: Config, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn shared_catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    // ========== Screens ==========

    pub fn home(&self) -> HomeScreen<'_> {
        HomeScreen::new(&self.catalog).with_recent_preview(self.config.recent_malls_preview)
    }

    pub fn explore(&self) -> ExploreScreen<'_> {
        ExploreScreen::new(&self.catalog)
    }

    pub fn search(&self, params: &SearchParams) -> SearchScreen<'_> {
        SearchScreen::open(&self.catalog, params)
    }

    pub fn mall_detail(&self, mall_id: i64) -> Option<MallDetailScreen<'_>> {
        MallDetailScreen::open(&self.catalog, mall_id)
    }

    pub fn boutique_detail(&self, boutique_id: i64) -> Option<BoutiqueDetailScreen<'_>> {
        BoutiqueDetailScreen::open(&self.catalog, boutique_id)
    }

    pub fn favorites(&self) -> FavoritesScreen<'_> {
        FavoritesScreen::new(
            &self.catalog,
            self.config.favorite_malls_preview,
            self.config.favorite_boutiques_preview,
        )
    }
}

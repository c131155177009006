//! Catalog snapshot
//!
//! The frozen, read-only dataset every screen filters. Loaded once at
//! startup and never mutated afterwards; share it as `&Catalog` or
//! `Arc<Catalog>`.

mod loader;

pub use loader::CatalogData;

use std::path::Path;

use shared::error::{AppError, AppResult};
use shared::models::{Boutique, Category, Mall, Product};

/// Sample dataset shipped with the crate
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Immutable catalog of malls, boutiques, products and categories
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    data: CatalogData,
}

impl Catalog {
    /// Validate and freeze a dataset
    pub fn from_data(data: CatalogData) -> AppResult<Self> {
        data.validate()?;
        tracing::info!(
            malls = data.malls.len(),
            boutiques = data.boutiques.len(),
            products = data.products.len(),
            categories = data.categories.len(),
            "catalog loaded"
        );
        Ok(Self { data })
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        Self::from_data(CatalogData::from_json(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        tracing::debug!(path = %path.as_ref().display(), "loading catalog from file");
        Self::from_data(CatalogData::from_path(path)?)
    }

    /// The sample dataset compiled into the crate
    pub fn bundled() -> AppResult<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    // ========== Collections ==========

    pub fn malls(&self) -> &[Mall] {
        &self.data.malls
    }

    pub fn boutiques(&self) -> &[Boutique] {
        &self.data.boutiques
    }

    pub fn products(&self) -> &[Product] {
        &self.data.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.data.categories
    }

    pub fn is_empty(&self) -> bool {
        self.data.malls.is_empty()
            && self.data.boutiques.is_empty()
            && self.data.products.is_empty()
    }

    // ========== Point lookups ==========
    // `None` is the not-found marker; presentation renders a not-found state.

    pub fn mall(&self, id: i64) -> Option<&Mall> {
        self.data.malls.iter().find(|m| m.id == id)
    }

    pub fn boutique(&self, id: i64) -> Option<&Boutique> {
        self.data.boutiques.iter().find(|b| b.id == id)
    }

    pub fn product(&self, id: i64) -> Option<&Product> {
        self.data.products.iter().find(|p| p.id == id)
    }

    pub fn category(&self, id: i64) -> Option<&Category> {
        self.data.categories.iter().find(|c| c.id == id)
    }

    /// Boutiques located in a mall, in dataset order
    pub fn boutiques_in_mall(&self, mall_id: i64) -> Vec<&Boutique> {
        self.data
            .boutiques
            .iter()
            .filter(|b| b.mall_id == mall_id)
            .collect()
    }

    /// The mall a boutique belongs to; `None` for a dangling reference
    pub fn mall_of(&self, boutique: &Boutique) -> Option<&Mall> {
        self.mall(boutique.mall_id)
    }

    /// Products sold by a boutique, in dataset order
    pub fn products_of(&self, boutique_id: i64) -> Vec<&Product> {
        self.data
            .products
            .iter()
            .filter(|p| p.boutique_id == boutique_id)
            .collect()
    }

    /// Like [`mall`](Self::mall) but as an error for `?` callers
    pub fn require_mall(&self, id: i64) -> AppResult<&Mall> {
        self.mall(id).ok_or_else(|| AppError::mall_not_found(id))
    }

    pub fn require_boutique(&self, id: i64) -> AppResult<&Boutique> {
        self.boutique(id)
            .ok_or_else(|| AppError::boutique_not_found(id))
    }

    pub fn require_product(&self, id: i64) -> AppResult<&Product> {
        self.product(id).ok_or_else(|| AppError::product_not_found(id))
    }
}

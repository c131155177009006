//! Boutique detail screen: gallery, contact info, hosting mall, products

use shared::models::{Boutique, Category, Mall, Product};

use crate::actions::{ActionOutcome, StorefrontActions};
use crate::catalog::Catalog;

#[derive(Debug, Clone)]
pub struct BoutiqueDetailScreen<'a> {
    boutique: &'a Boutique,
    mall: Option<&'a Mall>,
    category: Option<&'a Category>,
    products: Vec<&'a Product>,
    // Heart highlight only; never persisted
    favorite: bool,
}

impl<'a> BoutiqueDetailScreen<'a> {
    /// Open the detail view; `None` renders "Boutique not found"
    pub fn open(catalog: &'a Catalog, boutique_id: i64) -> Option<Self> {
        let Some(boutique) = catalog.boutique(boutique_id) else {
            tracing::debug!(boutique_id, "boutique detail requested for unknown id");
            return None;
        };
        let mall = catalog.mall_of(boutique);
        if mall.is_none() {
            tracing::debug!(
                boutique_id,
                mall_id = boutique.mall_id,
                "boutique references an unknown mall"
            );
        }
        Some(Self {
            boutique,
            mall,
            category: catalog.category(boutique.category),
            products: catalog.products_of(boutique_id),
            favorite: false,
        })
    }

    pub fn boutique(&self) -> &'a Boutique {
        self.boutique
    }

    /// Hosting mall; `None` hides the "Located in" card
    pub fn mall(&self) -> Option<&'a Mall> {
        self.mall
    }

    pub fn category(&self) -> Option<&'a Category> {
        self.category
    }

    /// Gallery in display order; may be empty
    pub fn photos(&self) -> &'a [String] {
        &self.boutique.photos
    }

    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    pub fn toggle_favorite(&mut self, actions: &mut impl StorefrontActions) -> ActionOutcome {
        self.favorite = !self.favorite;
        actions.toggle_favorite(self.boutique)
    }

    pub fn call(&self, actions: &impl StorefrontActions) -> ActionOutcome {
        actions.call_seller(self.boutique)
    }

    pub fn open_social(&self, actions: &impl StorefrontActions) -> ActionOutcome {
        actions.open_social(self.boutique)
    }

    pub fn share(&self, actions: &impl StorefrontActions) -> ActionOutcome {
        actions.share(self.boutique)
    }
}

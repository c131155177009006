//! Dataset loading and integrity checks

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Boutique, Category, Mall, Product};

/// Raw dataset document: `{ "malls": [...], "boutiques": [...], ... }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub malls: Vec<Mall>,
    #[serde(default)]
    pub boutiques: Vec<Boutique>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl CatalogData {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::from(e).with_detail("path", path.display().to_string())
        })?;
        Self::from_json(&json).map_err(|e| e.with_detail("path", path.display().to_string()))
    }

    /// Reject data the filter contract cannot represent
    ///
    /// Hard errors: a category using the reserved id, duplicate ids within
    /// one entity kind. Dangling references only produce warnings.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(category) = self.categories.iter().find(|c| c.is_reserved()) {
            return Err(AppError::new(ErrorCode::CategoryReservedId)
                .with_detail("name", category.name.clone()));
        }

        ensure_unique("mall", self.malls.iter().map(|m| m.id))?;
        ensure_unique("boutique", self.boutiques.iter().map(|b| b.id))?;
        ensure_unique("product", self.products.iter().map(|p| p.id))?;
        ensure_unique("category", self.categories.iter().map(|c| c.id))?;

        for issue in self.integrity_issues() {
            tracing::warn!(code = %issue.code, "{}", issue.message);
        }
        Ok(())
    }

    /// Soft inconsistencies: references to missing malls, boutiques or categories
    pub fn integrity_issues(&self) -> Vec<AppError> {
        let mall_ids: HashSet<i64> = self.malls.iter().map(|m| m.id).collect();
        let boutique_ids: HashSet<i64> = self.boutiques.iter().map(|b| b.id).collect();
        let category_ids: HashSet<i64> = self.categories.iter().map(|c| c.id).collect();

        let mut issues = Vec::new();
        for boutique in &self.boutiques {
            if !mall_ids.contains(&boutique.mall_id) {
                issues.push(
                    AppError::with_message(
                        ErrorCode::BoutiqueMallMissing,
                        format!(
                            "Boutique {} references unknown mall {}",
                            boutique.id, boutique.mall_id
                        ),
                    )
                    .with_detail("boutique_id", boutique.id)
                    .with_detail("mall_id", boutique.mall_id),
                );
            }
            if !category_ids.contains(&boutique.category) {
                issues.push(
                    AppError::with_message(
                        ErrorCode::CategoryNotFound,
                        format!(
                            "Boutique {} uses unknown category {}",
                            boutique.id, boutique.category
                        ),
                    )
                    .with_detail("boutique_id", boutique.id),
                );
            }
        }
        for mall in &self.malls {
            for category in mall.categories.iter().filter(|c| !category_ids.contains(*c)) {
                issues.push(
                    AppError::with_message(
                        ErrorCode::CategoryNotFound,
                        format!("Mall {} uses unknown category {}", mall.id, category),
                    )
                    .with_detail("mall_id", mall.id),
                );
            }
        }
        for product in &self.products {
            if !boutique_ids.contains(&product.boutique_id) {
                issues.push(
                    AppError::with_message(
                        ErrorCode::BoutiqueNotFound,
                        format!(
                            "Product {} references unknown boutique {}",
                            product.id, product.boutique_id
                        ),
                    )
                    .with_detail("product_id", product.id),
                );
            }
            if !mall_ids.contains(&product.mall_id) {
                issues.push(
                    AppError::with_message(
                        ErrorCode::MallNotFound,
                        format!(
                            "Product {} references unknown mall {}",
                            product.id, product.mall_id
                        ),
                    )
                    .with_detail("product_id", product.id),
                );
            }
        }
        issues
    }
}

fn ensure_unique(kind: &str, ids: impl Iterator<Item = i64>) -> AppResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::duplicate_id(kind, id));
        }
    }
    Ok(())
}

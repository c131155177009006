//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// `boutique_name` and `mall_name` duplicate the owning entities' names.
/// Nothing keeps them in sync; the dataset is static after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Pre-formatted display price (e.g. "25 000 ₸"), never parsed
    pub price: String,
    pub image: String,
    pub boutique_id: i64,
    pub boutique_name: String,
    pub mall_id: i64,
    pub mall_name: String,
}

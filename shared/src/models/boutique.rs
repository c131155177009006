//! Boutique Model

use serde::{Deserialize, Serialize};

use crate::types::CategoryId;

/// Boutique entity (a shop inside a mall)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boutique {
    pub id: i64,
    /// Mall reference (not enforced; lookups may fail on inconsistent data)
    pub mall_id: i64,
    pub name: String,
    /// Single category (equality match, unlike `Mall::categories`)
    pub category: CategoryId,
    pub description: String,
    /// Location inside the mall, e.g. "2nd floor, 214"
    #[serde(alias = "locationInMall")]
    pub location: String,
    pub contact_number: String,
    /// Social handle
    pub instagram: String,
    #[serde(default)]
    pub has_delivery: bool,
    /// Ordered photo gallery
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Boutique {
    /// First photo, used as the card cover
    pub fn cover_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }
}

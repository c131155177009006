//! Data models
//!
//! Read-only catalog entities. Field names are camelCase on the wire so the
//! storefront seed documents load as-is. All IDs are `i64`.

pub mod boutique;
pub mod category;
pub mod mall;
pub mod product;

// Re-exports
pub use boutique::*;
pub use category::*;
pub use mall::*;
pub use product::*;

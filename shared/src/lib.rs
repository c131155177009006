//! Shared types for the storefront directory
//!
//! Catalog entity models, category id conventions and the unified error
//! types used by the `storefront` crate and any presentation layer on top
//! of it.

pub mod error;
pub mod models;
pub mod types;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Boutique, Category, Mall, Product};
pub use serde::{Deserialize, Serialize};
pub use types::{ALL_CATEGORIES, CategoryId};

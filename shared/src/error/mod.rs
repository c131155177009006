//! Unified error system for the storefront
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Mall errors
//! - 2xxx: Boutique errors
//! - 3xxx: Product errors
//! - 4xxx: Category errors
//! - 5xxx: Dataset errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::mall_not_found(9);
//! assert_eq!(err.code, ErrorCode::MallNotFound);
//!
//! let err = AppError::validation("Category id 0 is reserved")
//!     .with_detail("field", "categories");
//! assert_eq!(err.code.category().name(), "general");
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};

//! Error types

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the error type for everything in the storefront that can fail:
/// loading the catalog dataset, reading configuration, and the `require_*`
/// lookups. Filtering itself never fails.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (entity id, field, source error, ...)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a detail entry
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref().and_then(|d| d.get(key))
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a mall not found error
    pub fn mall_not_found(id: i64) -> Self {
        Self::with_message(ErrorCode::MallNotFound, format!("Mall {} not found", id))
            .with_detail("id", id)
    }

    /// Create a boutique not found error
    pub fn boutique_not_found(id: i64) -> Self {
        Self::with_message(
            ErrorCode::BoutiqueNotFound,
            format!("Boutique {} not found", id),
        )
        .with_detail("id", id)
    }

    /// Create a product not found error
    pub fn product_not_found(id: i64) -> Self {
        Self::with_message(
            ErrorCode::ProductNotFound,
            format!("Product {} not found", id),
        )
        .with_detail("id", id)
    }

    /// Create a duplicate id error
    pub fn duplicate_id(kind: &str, id: i64) -> Self {
        Self::with_message(
            ErrorCode::DuplicateId,
            format!("Duplicate {} id {}", kind, id),
        )
        .with_detail("kind", kind)
        .with_detail("id", id)
    }

    /// Create an invalid configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigInvalid, msg)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_message(ErrorCode::DatasetParseFailed, err.to_string())
            .with_detail("line", err.line())
            .with_detail("column", err.column())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_message(ErrorCode::DatasetReadFailed, err.to_string())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::CategoryNotFound);
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
        assert_eq!(err.message, "Category not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Bad dataset")
            .with_detail("field", "categories")
            .with_detail("index", 3);

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.detail("field").unwrap(), "categories");
        assert_eq!(err.detail("index").unwrap(), 3);
        assert!(err.detail("missing").is_none());
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        let err = AppError::mall_not_found(42);
        assert_eq!(err.code, ErrorCode::MallNotFound);
        assert_eq!(err.message, "Mall 42 not found");
        assert_eq!(err.detail("id").unwrap(), 42);

        let err = AppError::boutique_not_found(7);
        assert_eq!(err.code, ErrorCode::BoutiqueNotFound);

        let err = AppError::product_not_found(7);
        assert_eq!(err.code, ErrorCode::ProductNotFound);

        let err = AppError::duplicate_id("mall", 1);
        assert_eq!(err.code, ErrorCode::DuplicateId);
        assert_eq!(err.message, "Duplicate mall id 1");

        let err = AppError::config("LOG_LEVEL");
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{ not json");
        let err: AppError = parse.unwrap_err().into();
        assert_eq!(err.code, ErrorCode::DatasetParseFailed);
        assert!(err.detail("line").is_some());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: AppError = io.into();
        assert_eq!(err.code, ErrorCode::DatasetReadFailed);
        assert!(err.message.contains("missing.json"));
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::BoutiqueNotFound, "Boutique not found");
        assert_eq!(format!("{}", err), "Boutique not found");
    }
}

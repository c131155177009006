//! Unified error codes for the storefront catalog
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Mall errors
//! - 2xxx: Boutique errors
//! - 3xxx: Product errors
//! - 4xxx: Category errors
//! - 5xxx: Dataset errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values so presentation layers in any language can
/// match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,

    // ==================== 1xxx: Mall ====================
    /// Mall not found
    MallNotFound = 1001,

    // ==================== 2xxx: Boutique ====================
    /// Boutique not found
    BoutiqueNotFound = 2001,
    /// Boutique references a mall that does not exist
    BoutiqueMallMissing = 2002,

    // ==================== 3xxx: Product ====================
    /// Product not found
    ProductNotFound = 3001,

    // ==================== 4xxx: Category ====================
    /// Category not found
    CategoryNotFound = 4001,
    /// Category uses the reserved "All" id
    CategoryReservedId = 4002,

    // ==================== 5xxx: Dataset ====================
    /// Dataset document could not be parsed
    DatasetParseFailed = 5001,
    /// Dataset file could not be read
    DatasetReadFailed = 5002,
    /// Two entities of the same kind share an id
    DuplicateId = 5003,

    // ==================== 9xxx: System ====================
    /// Configuration value is invalid
    ConfigInvalid = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",

            // Mall
            ErrorCode::MallNotFound => "Mall not found",

            // Boutique
            ErrorCode::BoutiqueNotFound => "Boutique not found",
            ErrorCode::BoutiqueMallMissing => "Boutique references an unknown mall",

            // Product
            ErrorCode::ProductNotFound => "Product not found",

            // Category
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::CategoryReservedId => "Category id 0 is reserved for \"All\"",

            // Dataset
            ErrorCode::DatasetParseFailed => "Catalog dataset could not be parsed",
            ErrorCode::DatasetReadFailed => "Catalog dataset could not be read",
            ErrorCode::DuplicateId => "Duplicate entity id in catalog dataset",

            // System
            ErrorCode::ConfigInvalid => "Invalid configuration",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),

            1001 => Ok(ErrorCode::MallNotFound),

            2001 => Ok(ErrorCode::BoutiqueNotFound),
            2002 => Ok(ErrorCode::BoutiqueMallMissing),

            3001 => Ok(ErrorCode::ProductNotFound),

            4001 => Ok(ErrorCode::CategoryNotFound),
            4002 => Ok(ErrorCode::CategoryReservedId),

            5001 => Ok(ErrorCode::DatasetParseFailed),
            5002 => Ok(ErrorCode::DatasetReadFailed),
            5003 => Ok(ErrorCode::DuplicateId),

            9002 => Ok(ErrorCode::ConfigInvalid),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

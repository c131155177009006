//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Mall errors
/// - 2xxx: Boutique errors
/// - 3xxx: Product errors
/// - 4xxx: Category errors
/// - 5xxx: Dataset errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Mall errors (1xxx)
    Mall,
    /// Boutique errors (2xxx)
    Boutique,
    /// Product errors (3xxx)
    Product,
    /// Category errors (4xxx)
    Category,
    /// Dataset errors (5xxx)
    Dataset,
    /// System errors (6xxx-9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Mall,
            2000..3000 => Self::Boutique,
            3000..4000 => Self::Product,
            4000..5000 => Self::Category,
            5000..6000 => Self::Dataset,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Mall => "mall",
            Self::Boutique => "boutique",
            Self::Product => "product",
            Self::Category => "category",
            Self::Dataset => "dataset",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

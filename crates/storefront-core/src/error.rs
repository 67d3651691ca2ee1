//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                     │
//! │  ├── CoreError        - Not-found, empty cart, bad catalog              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-cli errors (app crate)                                      │
//! │  └── ApiError         - What the front-end sees (code + message)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front-end              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart operations themselves never fail: an update or removal for an
//! id that is not in the cart is a no-op. These errors only cover catalog
//! loading, detail lookup, checkout of an empty cart and user input.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core storefront errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id exists in the catalog.
    ///
    /// ## User Workflow
    /// ```text
    /// Open /product/42
    ///      │
    ///      ▼
    /// catalog.find(42) → ProductNotFound(42)
    ///      │
    ///      ▼
    /// Front-end returns to the catalog root
    /// ```
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Checkout was requested with nothing in the cart.
    #[error("Cart is empty, nothing to check out")]
    EmptyCart,

    /// The catalog violates one of its invariants (duplicate id, price above
    /// original price, ...).
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// The catalog source could not be decoded.
    #[error("Could not parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any core logic runs, typically while turning user input
/// into a [`QuerySpec`](crate::query::QuerySpec) or a quantity.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a non-numeric product id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound(ProductId::new(42));
        assert_eq!(err.to_string(), "Product not found: 42");

        let err = CoreError::InvalidCatalog {
            reason: "price above original price".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid catalog: price above original price");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "query".to_string(),
        };
        assert_eq!(err.to_string(), "query is required");

        let err = ValidationError::NotAllowed {
            field: "sort".to_string(),
            allowed: vec!["relevance".to_string(), "rating".to_string()],
        };
        assert_eq!(err.to_string(), "sort must be one of: [\"relevance\", \"rating\"]");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_json_error_converts_to_core_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::CatalogParse(_)));
    }
}

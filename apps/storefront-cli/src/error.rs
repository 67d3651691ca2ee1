//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Front-end (REPL / subcommand)          Commands                        │
//! │  ─────────────────────────────          ────────                        │
//! │                                                                         │
//! │  show 42                                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad input? ───── ValidationError ──────────────┐                │  │
//! │  │         │                                       │                │  │
//! │  │         ▼                                       ▼                │  │
//! │  │  Domain error? ── CoreError::ProductNotFound ── ApiError ───────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  "[NotFound] Product not found: 42"   or, with --json:                  │
//! │  { "code": "NOT_FOUND", "message": "Product not found: 42" }            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::{CoreError, ValidationError};

use crate::state::ConfigError;

/// Error returned from every command.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id not in the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed (e.g. checking out an empty cart)
    CartError,

    /// Catalog could not be loaded
    CatalogError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }


    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CatalogError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::EmptyCart => ApiError::cart("Your cart is empty"),
            CoreError::InvalidCatalog { reason } => {
                ApiError::catalog(format!("Invalid catalog: {}", reason))
            }
            CoreError::CatalogParse(e) => {
                tracing::error!("Catalog parse failed: {}", e);
                ApiError::catalog(format!("Could not parse catalog: {}", e))
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::ProductNotFound(ProductId::new(42)));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 42");

        assert_eq!(ApiError::from(CoreError::EmptyCart).code, ErrorCode::CartError);

        let parse = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        assert_eq!(ApiError::from(CoreError::CatalogParse(parse)).code, ErrorCode::CatalogError);
    }

    #[test]
    fn test_validation_mapping() {
        let err = ApiError::from(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "quantity must be positive");
    }

    #[test]
    fn test_serialization() {
        let err = ApiError::not_found("Product", 7);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 7");
        assert_eq!(err.to_string(), "[NotFound] Product not found: 7");
    }

    #[test]
    fn test_every_code_has_a_wire_name() {
        let codes = [
            (ErrorCode::NotFound, "NOT_FOUND"),
            (ErrorCode::ValidationError, "VALIDATION_ERROR"),
            (ErrorCode::CartError, "CART_ERROR"),
            (ErrorCode::CatalogError, "CATALOG_ERROR"),
        ];
        for (code, name) in codes {
            assert_eq!(serde_json::to_value(code).unwrap(), name);
        }
    }
}

//! # Validation Module
//!
//! Input validation utilities for the storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end                                                    │
//! │  ├── Raw text from the search box, quantity steppers, filter buttons   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command layer                                                │
//! │  └── THIS MODULE: turn raw input into well-formed core values          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Core                                                         │
//! │  └── Total operations: cart and query never fail on valid types        │
//! │                                                                         │
//! │  Catalog loading runs validate_product on every record once.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_quantity, validate_search_query};
//!
//! let query = validate_search_query("  iphone ").unwrap();
//! assert_eq!(query, "iphone");
//!
//! let qty = validate_quantity(2).unwrap();
//! assert_eq!(qty.get(), 2);
//! ```

use std::num::NonZeroU32;

use crate::error::ValidationError;
use crate::money::Money;
use crate::query::PriceRange;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest search query accepted from the search box.
pub const MAX_QUERY_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches every product)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity for "add to cart".
///
/// ## Rules
/// - Must be positive (> 0)
/// - No business upper bound; values beyond `u32::MAX` cannot be
///   represented and are rejected as out of range
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product Detail: Add to Cart                                            │
/// │                                                                         │
/// │  User picks quantity: 2                                                 │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(2) ← THIS FUNCTION                                   │
/// │       │                                                                 │
/// │       ├── qty <= 0?  → Error: "quantity must be positive"               │
/// │       ├── > u32::MAX? → Error: out of range (cannot be represented)     │
/// │       │                                                                 │
/// │       └── OK → Cart::add(product, NonZeroU32)                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<NonZeroU32> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(qty)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: i64::from(u32::MAX),
        })
}

/// Largest price bound, in whole rupees, that still fits in [`Money`].
pub const MAX_PRICE_RUPEES: i64 = Money::MAX.rupees();

/// Validates a price filter given in whole rupees.
///
/// ## Rules
/// - Both bounds non-negative and at most [`MAX_PRICE_RUPEES`]
/// - `min <= max`
/// - A missing `max` means "no upper bound"
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_price_range;
///
/// assert!(validate_price_range(1_000, Some(5_000)).is_ok());
/// assert!(validate_price_range(0, None).is_ok());
/// assert!(validate_price_range(5_000, Some(1_000)).is_err());
/// assert!(validate_price_range(-1, None).is_err());
/// assert!(validate_price_range(100_000_000_000_000_000, None).is_err());
/// ```
pub fn validate_price_range(min_rupees: i64, max_rupees: Option<i64>) -> ValidationResult<PriceRange> {
    if !(0..=MAX_PRICE_RUPEES).contains(&min_rupees) {
        return Err(ValidationError::OutOfRange {
            field: "min price".to_string(),
            min: 0,
            max: MAX_PRICE_RUPEES,
        });
    }

    let max = match max_rupees {
        Some(max) if !(min_rupees..=MAX_PRICE_RUPEES).contains(&max) => {
            return Err(ValidationError::OutOfRange {
                field: "max price".to_string(),
                min: min_rupees,
                max: MAX_PRICE_RUPEES,
            });
        }
        Some(max) => Money::from_rupees(max),
        None => Money::MAX,
    };

    Ok(PriceRange::new(Money::from_rupees(min_rupees), max))
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a single catalog record.
///
/// ## Rules
/// - Title and brand must not be blank
/// - Prices non-negative, `price <= original_price`
/// - Discount at most 100%
/// - Rating finite and non-negative
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: format!("title of product {}", product.id),
        });
    }

    if product.brand.trim().is_empty() {
        return Err(ValidationError::Required {
            field: format!("brand of product {}", product.id),
        });
    }

    if product.price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: format!("price of product {}", product.id),
            min: 0,
            max: i64::MAX,
        });
    }

    if product.price > product.original_price {
        return Err(ValidationError::OutOfRange {
            field: format!("price of product {}", product.id),
            min: 0,
            max: product.original_price.paise(),
        });
    }

    if product.discount > 100 {
        return Err(ValidationError::OutOfRange {
            field: format!("discount of product {}", product.id),
            min: 0,
            max: 100,
        });
    }

    if !product.rating.is_finite() || product.rating < 0.0 {
        return Err(ValidationError::InvalidFormat {
            field: format!("rating of product {}", product.id),
            reason: "must be a non-negative number".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

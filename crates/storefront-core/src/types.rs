//! # Domain Types
//!
//! Catalog types shared by the query engine and the cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      Product        │        │     ProductId       │                │
//! │  │  ─────────────────  │        │  ─────────────────  │                │
//! │  │  id: ProductId      │───────►│  u32, unique in the │                │
//! │  │  title / brand      │        │  catalog            │                │
//! │  │  category           │        └─────────────────────┘                │
//! │  │  price: Money       │                                               │
//! │  │  original_price     │        Immutable once loaded. The cart keeps  │
//! │  │  discount / rating  │        a frozen copy per line item.           │
//! │  └─────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Unique product identifier within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parses the id segment of a detail route (`/product/:id`).
///
/// ## Example
/// ```rust
/// use storefront_core::types::ProductId;
///
/// let id: ProductId = " 7 ".parse().unwrap();
/// assert_eq!(id.get(), 7);
/// assert!("seven".parse::<ProductId>().is_err());
/// ```
impl FromStr for ProductId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "product id".to_string(),
            });
        }

        s.parse::<u32>()
            .map(ProductId)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "product id".to_string(),
                reason: "must be a non-negative integer".to_string(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Monetary fields are in paise; see [`Money`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    pub id: ProductId,

    /// Display name.
    pub title: String,

    pub brand: String,

    pub category: String,

    pub description: String,

    /// Selling price.
    pub price: Money,

    /// List price before discount. Never below `price`.
    pub original_price: Money,

    /// Discount percentage shown on the card, 0 when not discounted.
    #[serde(default)]
    pub discount: u8,

    /// Average review score.
    pub rating: f32,

    /// Number of ratings behind `rating`.
    #[serde(default)]
    pub reviews: u32,

    /// Image URL.
    pub image: String,

    /// Carries the "Assured" quality badge.
    #[serde(default)]
    pub assured: bool,

    #[serde(default)]
    pub free_delivery: bool,

    /// Bullet points for the detail page, in display order.
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Product {
    /// Whether the product is sold below its list price.
    #[inline]
    pub fn has_discount(&self) -> bool {
        self.discount > 0
    }

    /// Amount saved against the list price.
    ///
    /// ## Example
    /// ```rust,ignore
    /// // price ₹799, original ₹999
    /// assert_eq!(product.savings(), Money::from_rupees(200));
    /// ```
    #[inline]
    pub fn savings(&self) -> Money {
        self.original_price - self.price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

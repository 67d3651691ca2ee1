//! # storefront-core: Pure Storefront Logic
//!
//! The cart state manager and the catalog query engine, as pure functions
//! and plain data with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-end (rendering)                        │   │
//! │  │    Home ──► Search Results ──► Product Detail ──► Cart          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Commands (storefront-cli)                    │   │
//! │  │    search_products, add_to_cart, place_order, ...              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  money  │ │ catalog │ │  query  │ │  cart   │ │checkout │  │   │
//! │  │   │  Money  │ │ Catalog │ │QuerySpec│ │  Cart   │ │ Summary │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO LOGGING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and ProductId
//! - [`money`] - Money type with integer arithmetic (paise, no floats)
//! - [`catalog`] - Validated, read-only product list
//! - [`query`] - Search / filter / sort pipeline
//! - [`cart`] - Cart store: add, update, remove, clear, totals
//! - [`checkout`] - Delivery policy, order summary, placing an order
//! - [`validation`] - Input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use std::num::NonZeroU32;
//! use storefront_core::{Cart, Catalog, QuerySpec, SortKey};
//!
//! let catalog = Catalog::from_json(r#"[
//!   {"id": 1, "title": "Kurta", "brand": "Biba", "category": "fashion",
//!    "description": "Cotton kurta", "price": 79900, "originalPrice": 149900,
//!    "discount": 47, "rating": 4.1, "image": "kurta.jpg"},
//!   {"id": 2, "title": "Sneakers", "brand": "Puma", "category": "fashion",
//!    "description": "Running shoes", "price": 249900, "originalPrice": 499900,
//!    "discount": 50, "rating": 4.4, "image": "shoes.jpg"}
//! ]"#).unwrap();
//!
//! let results = catalog.search(&QuerySpec::new("fashion").sorted_by(SortKey::Rating));
//! assert_eq!(results[0].title, "Sneakers");
//!
//! let mut cart = Cart::new();
//! cart.add_item(&results[0], NonZeroU32::new(2).unwrap());
//! assert_eq!(cart.count(), 2);
//! assert_eq!(cart.total().rupees(), 4_998);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod query;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLineItem};
pub use catalog::Catalog;
pub use checkout::{DeliveryPolicy, Order, OrderSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use query::{query, PriceRange, QuerySpec, SortKey, PRICE_PRESETS};
pub use types::{Product, ProductId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Products shown in each home page row ("Featured", "Top Rated").
pub const HOME_ROW_SIZE: usize = 4;

// =============================================================================
// Test Fixtures
// =============================================================================

//! # Cart Store
//!
//! Owns the shopping cart's line items and its mutation rules.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Operation                 State Change        │
//! │  ───────────              ─────────                 ────────────        │
//! │                                                                         │
//! │  Add to Cart ───────────► add_item(p, q) ─────────► merge or push       │
//! │                                                                         │
//! │  +/- Stepper ───────────► update_quantity(id, n) ─► qty = max(n, 1)     │
//! │                                                                         │
//! │  Remove (confirmed) ────► remove_item(id) ────────► line deleted        │
//! │                                                                         │
//! │  Order placed ──────────► clear() ────────────────► items emptied       │
//! │                                                                         │
//! │  Badge / summary ───────► total(), count() ───────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id (adding again merges quantities)
//! - Every quantity is at least 1; a line only disappears through
//!   `remove_item` or `clear`
//! - `total()` and `count()` are computed from the lines on every call, so
//!   they cannot drift from the items
//!
//! None of the operations fail. Updating or removing an id that is not in
//! the cart does nothing.

use std::num::NonZeroU32;

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Cart Line Item
// =============================================================================

/// One row of the cart: a product plus quantity.
///
/// ## Design Notes
/// `product` is a frozen copy taken when the line was created, so the cart
/// keeps showing the price the customer added at.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    pub product: Product,

    /// Always >= 1.
    quantity: u32,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    fn new(product: &Product, quantity: NonZeroU32) -> Self {
        CartLineItem {
            product: product.clone(),
            quantity: quantity.get(),
            added_at: Utc::now(),
        }
    }

    #[inline]
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart of one session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order.
    items: Vec<CartLineItem>,

    /// When the cart was created/last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product, or grows the existing line for the same product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by `quantity`
    ///   (saturating, no upper bound otherwise)
    /// - Product not in cart: new line appended at the end
    ///
    /// ## Example
    /// ```rust,ignore
    /// cart.add_item(&p1, NonZeroU32::new(2).unwrap());
    /// cart.add_item(&p1, NonZeroU32::new(3).unwrap());
    /// assert_eq!(cart.items().len(), 1);
    /// assert_eq!(cart.items()[0].quantity(), 5);
    /// ```
    pub fn add_item(&mut self, product: &Product, quantity: NonZeroU32) {
        match self.line_mut(product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity.get()),
            None => self.items.push(CartLineItem::new(product, quantity)),
        }
    }

    /// Sets a line's quantity, clamped to at least 1.
    ///
    /// Quantities above `u32::MAX` clamp to `u32::MAX`. Returns whether a
    /// line for `product_id` existed; an absent id is a no-op.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        let clamped = quantity.clamp(1, i64::from(u32::MAX)) as u32;
        match self.line_mut(product_id) {
            Some(item) => {
                item.quantity = clamped;
                true
            }
            None => false,
        }
    }

    /// Removes the line for `product_id`.
    ///
    /// Unconditional once called; any "are you sure?" step belongs to the
    /// caller. Returns whether a line was removed.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id() != product_id);
        self.items.len() != initial_len
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// The line for a product, if present.
    pub fn get(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Σ(price × quantity) over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Σ quantity over all lines (the cart badge).
    pub fn count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|i| i.product_id() == product_id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

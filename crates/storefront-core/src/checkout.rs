//! # Checkout
//!
//! Order summary math and the simulated "Place Order" step.
//!
//! ## Order Summary
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Order Summary                               │
//! │  ──────────────────────────────────────────  │
//! │  Items (2)                        ₹449.00    │
//! │  Delivery Charges                  ₹40.00    │
//! │  Add items worth ₹51.00 more for free        │
//! │  delivery                                    │
//! │  ──────────────────────────────────────────  │
//! │  Total Amount                     ₹489.00    │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Delivery is free only when the cart total is strictly above the
//! threshold. A cart worth exactly ₹500 still pays the charge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, CartLineItem};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Delivery Policy
// =============================================================================

/// When delivery is free and what it costs otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DeliveryPolicy {
    /// Carts worth more than this ship free.
    pub free_above: Money,

    /// Flat charge for everything else.
    pub charge: Money,
}

impl DeliveryPolicy {
    /// Delivery charge for a cart subtotal.
    pub fn charge_for(&self, subtotal: Money) -> Money {
        if subtotal > self.free_above {
            Money::zero()
        } else {
            self.charge
        }
    }

    /// How much more must be added before delivery is free, if anything.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::checkout::DeliveryPolicy;
    /// use storefront_core::Money;
    ///
    /// let policy = DeliveryPolicy::default();
    /// assert_eq!(policy.shortfall(Money::from_rupees(449)), Some(Money::from_rupees(51)));
    /// assert_eq!(policy.shortfall(Money::from_rupees(501)), None);
    /// ```
    pub fn shortfall(&self, subtotal: Money) -> Option<Money> {
        if subtotal > self.free_above {
            None
        } else {
            Some(self.free_above - subtotal)
        }
    }
}

impl Default for DeliveryPolicy {
    /// Free above ₹500, ₹40 otherwise.
    fn default() -> Self {
        DeliveryPolicy {
            free_above: Money::from_rupees(500),
            charge: Money::from_rupees(40),
        }
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// Totals shown beside the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderSummary {
    /// Distinct lines ("Items (n)").
    pub line_count: usize,

    /// Σ quantity.
    pub item_count: u64,

    pub subtotal: Money,

    pub delivery_charge: Money,

    /// subtotal + delivery charge.
    pub grand_total: Money,

    /// Amount still needed for free delivery, `None` once it is free.
    pub free_delivery_shortfall: Option<Money>,
}

impl OrderSummary {
    pub fn for_cart(cart: &Cart, policy: &DeliveryPolicy) -> Self {
        let subtotal = cart.total();
        let delivery_charge = policy.charge_for(subtotal);

        OrderSummary {
            line_count: cart.line_count(),
            item_count: cart.count(),
            subtotal,
            delivery_charge,
            grand_total: subtotal + delivery_charge,
            free_delivery_shortfall: policy.shortfall(subtotal),
        }
    }

    #[inline]
    pub fn has_free_delivery(&self) -> bool {
        self.delivery_charge.is_zero()
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order: what was in the cart at checkout, and what it cost.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    #[ts(as = "String")]
    pub id: Uuid,

    pub items: Vec<CartLineItem>,

    pub summary: OrderSummary,

    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl Cart {
    /// Places the order and empties the cart.
    ///
    /// ## Flow
    /// ```text
    /// checkout()
    ///    │
    ///    ├── cart empty? ──► Err(EmptyCart), cart untouched
    ///    │
    ///    ├── snapshot lines + summary into Order
    ///    │
    ///    └── clear() ──► Ok(Order)
    /// ```
    ///
    /// There is no payment step, so a non-empty cart always succeeds. The
    /// cart is cleared only after the order exists.
    pub fn checkout(&mut self, policy: &DeliveryPolicy) -> CoreResult<Order> {
        if self.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let order = Order {
            id: Uuid::new_v4(),
            items: self.items().to_vec(),
            summary: OrderSummary::for_cart(self, policy),
            placed_at: Utc::now(),
        };

        self.clear();
        Ok(order)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Cart State
//!
//! Holds the cart of one shopping session.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every cart command may modify the cart
//! 2. One mutation must finish before the next starts, or merge-on-add
//!    could lose an update
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  User Action              Command                 Cart Change           │
//! │  ───────────              ───────                 ───────────           │
//! │                                                                         │
//! │  add 3 2 ────────────────► add_to_cart() ───────► add_item / merge      │
//! │                                                                         │
//! │  qty 3 5 ────────────────► update_cart_item() ──► quantity = clamp(5)   │
//! │                                                                         │
//! │  remove 3 ───────────────► remove_from_cart() ──► line deleted          │
//! │                                                                         │
//! │  checkout ───────────────► place_order() ───────► order, then clear()   │
//! │                                                                         │
//! │  cart ───────────────────► get_cart() ──────────► (read only)           │
//! │                                                                         │
//! │  NOTE: Every operation holds the lock for the whole closure.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use storefront_core::{Cart, Money};

/// Cart totals for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct products.
    pub line_count: usize,
    /// Badge count: Σ quantity.
    pub item_count: u64,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            item_count: cart.count(),
            total: cart.total(),
        }
    }
}

/// Session-scoped cart state.
///
/// Cloning shares the same cart; every session in the
/// [`SessionRegistry`](super::SessionRegistry) owns its own.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|c| CartTotals::from(c));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&product, qty));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.lock();
        f(&mut cart)
    }

    /// A panic inside a closure cannot leave the cart half-updated (every
    /// `Cart` method is a single step), so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use storefront_core::{Product, ProductId};

    fn test_product(id: u32, rupees: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {}", id),
            brand: "Brand".to_string(),
            category: "general".to_string(),
            description: String::new(),
            price: Money::from_rupees(rupees),
            original_price: Money::from_rupees(rupees),
            discount: 0,
            rating: 4.0,
            image: String::new(),
            assured: false,
            free_delivery: false,
            reviews: 0,
            highlights: Vec::new(),
        }
    }

    #[test]
    fn test_totals_follow_mutations() {
        let state = CartState::new();
        let product = test_product(1, 250);

        state.with_cart_mut(|c| c.add_item(&product, NonZeroU32::new(2).unwrap()));
        let totals = state.with_cart(|c| CartTotals::from(c));

        assert_eq!(totals.line_count, 1);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total, Money::from_rupees(500));
    }

    #[test]
    fn test_clones_share_the_cart() {
        let state = CartState::new();
        let other = state.clone();

        other.with_cart_mut(|c| c.add_item(&test_product(1, 10), NonZeroU32::MIN));
        assert_eq!(state.with_cart(|c| c.count()), 1);

        assert!(CartState::new().with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_poisoned_lock_still_usable() {
        let state = CartState::new();
        let poisoner = state.clone();

        let _ = std::thread::spawn(move || {
            poisoner.with_cart_mut(|_| panic!("boom"));
        })
        .join();

        state.with_cart_mut(|c| c.add_item(&test_product(1, 10), NonZeroU32::MIN));
        assert_eq!(state.with_cart(|c| c.count()), 1);
    }

    #[test]
    fn test_concurrent_adds_merge() {
        let state = CartState::new();
        let product = test_product(7, 1);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                let product = product.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        state.with_cart_mut(|c| c.add_item(&product, NonZeroU32::MIN));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        state.with_cart(|c| {
            assert_eq!(c.line_count(), 1);
            assert_eq!(c.count(), 800);
            assert_eq!(c.total(), Money::from_rupees(800));
        });
    }
}

//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│  Order   │────►│  Empty   │       │
//! │  │  Cart    │     │          │     │  Summary │     │  Cart    │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       place_order                        │
//! │                   update_cart_item  (checkout.rs)                      │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Updating or removing a product that is not in the cart is a no-op, not
//! an error: the response is simply the unchanged cart.

use serde::Serialize;
use storefront_core::validation::validate_quantity;
use storefront_core::{Cart, CartLineItem, ProductId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CartTotals, CatalogState};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: appended as a new line
/// - The product is copied into the line, so later catalog changes do
///   not alter what the cart shows
///
/// ## Arguments
/// * `product_id` - Product to add
/// * `quantity` - Quantity to add (default: 1, must be positive)
///
/// ## Returns
/// Updated cart, `NOT_FOUND` for an unknown product, or
/// `VALIDATION_ERROR` for a non-positive quantity
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: ProductId,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    let quantity = validate_quantity(quantity)?;
    let product = catalog.catalog().find(product_id)?;

    Ok(cart.with_cart_mut(|c| {
        c.add_item(product, quantity);
        CartResponse::from(&*c)
    }))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity below 1 is raised to 1 (use `remove_from_cart` to delete)
/// - Product not in cart: nothing changes
///
/// ## Returns
/// Updated cart
pub fn update_cart_item(cart: &CartState, product_id: ProductId, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        if !c.update_quantity(product_id, quantity) {
            debug!(product_id = %product_id, "Not in cart, update ignored");
        }
        CartResponse::from(&*c)
    })
}

/// Removes a line from the cart.
///
/// ## Returns
/// Updated cart (unchanged when the product was not in it)
pub fn remove_from_cart(cart: &CartState, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        if !c.remove_item(product_id) {
            debug!(product_id = %product_id, "Not in cart, remove ignored");
        }
        CartResponse::from(&*c)
    })
}

/// Clears all items from the cart.
///
/// ## Returns
/// Empty cart
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}

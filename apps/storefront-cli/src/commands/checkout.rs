//! # Checkout Commands
//!
//! Order summary and the simulated "Place Order".
//!
//! ## Place Order Flow
//! ```text
//! place_order()
//!    │
//!    ├── wait (simulated order processing)
//!    │
//!    ├── Cart::checkout(delivery policy)
//!    │      ├── empty cart ──► CART_ERROR, nothing changes
//!    │      └── Order { id, items, summary } and the cart is cleared
//!    │
//!    └── Order
//! ```

use storefront_core::{Order, OrderSummary};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::latency::Latency;
use crate::state::{CartState, ConfigState};

/// Totals for the cart page: subtotal, delivery charge, grand total.
pub fn order_summary(cart: &CartState, config: &ConfigState) -> OrderSummary {
    debug!("order_summary command");
    cart.with_cart(|c| OrderSummary::for_cart(c, &config.delivery))
}

/// Places the order for everything in the cart.
///
/// There is no payment step; a non-empty cart always produces an order.
/// The cart is emptied only once the order exists.
pub async fn place_order(
    cart: &CartState,
    config: &ConfigState,
    latency: &Latency,
) -> Result<Order, ApiError> {
    debug!("place_order command");

    let result = latency
        .checkout(|| cart.with_cart_mut(|c| c.checkout(&config.delivery)))
        .await;

    match result {
        Ok(order) => {
            info!(
                order_id = %order.id,
                items = order.summary.item_count,
                total = %order.summary.grand_total,
                "Order placed"
            );
            Ok(order)
        }
        Err(e) => {
            warn!(error = %e, "Order not placed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, get_cart};
    use crate::error::ErrorCode;
    use crate::test_support::catalog_state;
    use storefront_core::{DeliveryPolicy, Money, ProductId};

    #[test]
    fn test_summary_charges_delivery_below_threshold() {
        let catalog = catalog_state();
        let cart = CartState::new();
        let config = ConfigState::default();

        add_to_cart(&catalog, &cart, ProductId::new(4), None).unwrap();
        let summary = order_summary(&cart, &config);

        assert_eq!(summary.subtotal, Money::from_rupees(499));
        assert_eq!(summary.delivery_charge, Money::from_rupees(40));
        assert_eq!(summary.grand_total, Money::from_rupees(539));
        assert_eq!(summary.free_delivery_shortfall, Some(Money::from_rupees(1)));
    }

    #[test]
    fn test_summary_uses_configured_policy() {
        let catalog = catalog_state();
        let cart = CartState::new();
        let config = ConfigState {
            delivery: DeliveryPolicy {
                free_above: Money::from_rupees(100),
                charge: Money::from_rupees(60),
            },
            ..ConfigState::default()
        };

        add_to_cart(&catalog, &cart, ProductId::new(4), None).unwrap();
        let summary = order_summary(&cart, &config);
        assert!(summary.has_free_delivery());
        assert_eq!(summary.grand_total, Money::from_rupees(499));
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_clears_cart() {
        let catalog = catalog_state();
        let cart = CartState::new();
        let config = ConfigState::default();

        add_to_cart(&catalog, &cart, ProductId::new(3), Some(2)).unwrap();

        let start = tokio::time::Instant::now();
        let order = place_order(&cart, &config, &Latency::default()).await.unwrap();

        assert!(start.elapsed() >= std::time::Duration::from_secs(2));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.summary.subtotal, Money::from_rupees(1_998));
        assert!(order.summary.has_free_delivery());
        assert!(get_cart(&cart).items.is_empty());
    }

    #[tokio::test]
    async fn test_place_order_on_empty_cart() {
        let cart = CartState::new();
        let err = place_order(&cart, &ConfigState::default(), &Latency::disabled())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }
}

//! # Text Rendering
//!
//! Plain-text views of command responses for the terminal. With `--json`
//! the responses are printed with `serde_json` instead and nothing here
//! is used.

use std::fmt::{self, Write};

use storefront_core::money::group_indian;
use storefront_core::{Money, Order, OrderSummary, PriceRange, Product};

use crate::commands::cart::CartResponse;
use crate::commands::product::{HomePage, PricePresetDto, SearchResponse};
use crate::state::ConfigState;

/// One-line product card used in lists.
///
/// ```text
/// #2    Galaxy M34 5G (Samsung)      ₹16,999  ₹24,999  32% off  ★ 4.3
/// ```
pub fn product_line(out: &mut impl Write, product: &Product, config: &ConfigState) -> fmt::Result {
    write!(
        out,
        "#{:<4} {} ({})  {}",
        product.id,
        product.title,
        product.brand,
        config.format_money(product.price)
    )?;
    if product.has_discount() {
        write!(
            out,
            "  {}  {}% off",
            config.format_money(product.original_price),
            product.discount
        )?;
    }
    writeln!(out, "  ★ {:.1}", product.rating)
}

pub fn search(out: &mut impl Write, response: &SearchResponse, config: &ConfigState) -> fmt::Result {
    let spec = &response.spec;

    if spec.text.is_empty() {
        write!(out, "All products")?;
    } else {
        write!(out, "Results for \"{}\"", spec.text)?;
    }
    writeln!(out, " ({} found, sorted by {})", response.results.len(), spec.sort_key.label())?;

    if !spec.brands.is_empty() {
        let brands: Vec<&str> = spec.brands.iter().map(String::as_str).collect();
        writeln!(out, "Brands: {}", brands.join(", "))?;
    }
    if spec.price_range != PriceRange::ANY {
        let range = spec.price_range;
        if range.max() == Money::MAX {
            writeln!(out, "Price: {} and above", config.format_money(range.min()))?;
        } else {
            writeln!(
                out,
                "Price: {} - {}",
                config.format_money(range.min()),
                config.format_money(range.max())
            )?;
        }
    }

    if response.results.is_empty() {
        return writeln!(out, "No products found. Try a different search or clear the filters.");
    }

    for product in &response.results {
        product_line(out, product, config)?;
    }
    Ok(())
}

pub fn product_detail(out: &mut impl Write, product: &Product, config: &ConfigState) -> fmt::Result {
    writeln!(out, "{}", product.title)?;
    writeln!(out, "by {} in {}", product.brand, product.category)?;
    writeln!(
        out,
        "★ {:.1}  {} ratings",
        product.rating,
        group_indian(u64::from(product.reviews))
    )?;

    write!(out, "{}", config.format_money(product.price))?;
    if product.has_discount() {
        write!(
            out,
            "  {}  {}% off (save {})",
            config.format_money(product.original_price),
            product.discount,
            config.format_money(product.savings())
        )?;
    }
    writeln!(out)?;

    if product.assured {
        writeln!(out, "Assured")?;
    }
    if product.free_delivery {
        writeln!(out, "Free delivery")?;
    }

    writeln!(out)?;
    writeln!(out, "{}", product.description)?;

    if !product.highlights.is_empty() {
        writeln!(out)?;
        writeln!(out, "Highlights:")?;
        for highlight in &product.highlights {
            writeln!(out, "  • {}", highlight)?;
        }
    }
    Ok(())
}

pub fn brands(out: &mut impl Write, brands: &[String]) -> fmt::Result {
    for brand in brands {
        writeln!(out, "{}", brand)?;
    }
    Ok(())
}

pub fn price_presets(out: &mut impl Write, presets: &[PricePresetDto]) -> fmt::Result {
    for preset in presets {
        writeln!(out, "  {}: {}", preset.index, preset.label)?;
    }
    Ok(())
}

pub fn config(out: &mut impl Write, config: &ConfigState) -> fmt::Result {
    writeln!(out, "Store: {}", config.store_name)?;
    writeln!(
        out,
        "Free delivery above {}, otherwise {}",
        config.format_money(config.delivery.free_above),
        config.format_money(config.delivery.charge)
    )?;
    writeln!(
        out,
        "Latency: search {}ms, detail {}ms, checkout {}ms",
        config.latency.search_ms, config.latency.detail_ms, config.latency.checkout_ms
    )?;
    match &config.catalog_path {
        Some(path) => writeln!(out, "Catalog: {}", path.display())?,
        None => writeln!(out, "Catalog: bundled")?,
    }
    match config.featured_seed {
        Some(seed) => writeln!(out, "Featured seed: {}", seed),
        None => writeln!(out, "Featured seed: random"),
    }
}

pub fn cart(
    out: &mut impl Write,
    cart: &CartResponse,
    summary: &OrderSummary,
    config: &ConfigState,
) -> fmt::Result {
    if cart.items.is_empty() {
        return writeln!(out, "Your cart is empty!");
    }

    writeln!(out, "My Cart ({})", cart.totals.item_count)?;
    for line in &cart.items {
        writeln!(
            out,
            "#{:<4} {} × {}  {}",
            line.product_id(),
            line.product.title,
            line.quantity(),
            config.format_money(line.line_total())
        )?;
    }
    writeln!(out)?;
    order_summary(out, summary, config)
}

pub fn order_summary(out: &mut impl Write, summary: &OrderSummary, config: &ConfigState) -> fmt::Result {
    writeln!(out, "Items ({})  {}", summary.line_count, config.format_money(summary.subtotal))?;

    if summary.has_free_delivery() {
        writeln!(out, "Delivery Charges  FREE")?;
    } else {
        writeln!(out, "Delivery Charges  {}", config.format_money(summary.delivery_charge))?;
    }
    if let Some(shortfall) = summary.free_delivery_shortfall {
        writeln!(
            out,
            "Add items worth {} more for free delivery",
            config.format_money(shortfall)
        )?;
    }

    writeln!(out, "Total Amount  {}", config.format_money(summary.grand_total))
}

pub fn order(out: &mut impl Write, order: &Order, config: &ConfigState) -> fmt::Result {
    writeln!(out, "Order placed successfully!")?;
    writeln!(out, "Order id: {}", order.id)?;
    writeln!(
        out,
        "{} item(s), paid {}",
        order.summary.item_count,
        config.format_money(order.summary.grand_total)
    )
}

pub fn home(out: &mut impl Write, home: &HomePage, config: &ConfigState) -> fmt::Result {
    writeln!(out, "Welcome to {}", home.store_name)?;
    writeln!(out)?;
    writeln!(out, "Featured")?;
    for product in &home.featured {
        product_line(out, product, config)?;
    }
    writeln!(out)?;
    writeln!(out, "Top Rated")?;
    for product in &home.top_rated {
        product_line(out, product, config)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, get_cart};
    use crate::commands::checkout::order_summary as summarize;
    use crate::commands::product::{search_products, SearchRequest};
    use crate::latency::Latency;
    use crate::state::CartState;
    use crate::test_support::catalog_state;
    use storefront_core::validation::MAX_PRICE_RUPEES;
    use storefront_core::ProductId;

    #[test]
    fn test_product_line_with_discount() {
        let catalog = catalog_state();
        let product = catalog.catalog().get(ProductId::new(2)).unwrap();

        let mut out = String::new();
        product_line(&mut out, product, &ConfigState::default()).unwrap();

        assert!(out.starts_with("#2"));
        assert!(out.contains("(Samsung)"));
        assert!(out.contains("₹24,999"));
        assert!(out.contains("₹34,999"));
        assert!(out.contains("28% off"));
    }

    #[test]
    fn test_cart_view() {
        let catalog = catalog_state();
        let cart = CartState::new();
        let config = ConfigState::default();

        let mut out = String::new();
        super::cart(&mut out, &get_cart(&cart), &summarize(&cart, &config), &config).unwrap();
        assert_eq!(out, "Your cart is empty!\n");

        add_to_cart(&catalog, &cart, ProductId::new(4), Some(2)).unwrap();
        let mut out = String::new();
        super::cart(&mut out, &get_cart(&cart), &summarize(&cart, &config), &config).unwrap();

        assert!(out.contains("My Cart (2)"));
        assert!(out.contains("× 2  ₹998"));
        assert!(out.contains("Delivery Charges  FREE"));
        assert!(out.contains("Total Amount  ₹998"));
    }

    #[test]
    fn test_summary_shows_shortfall() {
        let catalog = catalog_state();
        let cart = CartState::new();
        let config = ConfigState::default();
        add_to_cart(&catalog, &cart, ProductId::new(4), None).unwrap();

        let mut out = String::new();
        order_summary(&mut out, &summarize(&cart, &config), &config).unwrap();

        assert!(out.contains("Delivery Charges  ₹40"));
        assert!(out.contains("Add items worth ₹1 more"));
        assert!(out.contains("Total Amount  ₹539"));
    }

    #[tokio::test]
    async fn test_search_header_at_highest_price_bound() {
        let catalog = catalog_state();
        let request = SearchRequest {
            min_price: Some(MAX_PRICE_RUPEES),
            ..SearchRequest::default()
        };
        let response = search_products(&catalog, &Latency::disabled(), request)
            .await
            .unwrap();

        let mut out = String::new();
        search(&mut out, &response, &ConfigState::default()).unwrap();

        assert!(out.contains("Price: ₹92,23,37,20,36,85,47,758 and above"));
        assert!(out.contains("No products found."));
    }
}

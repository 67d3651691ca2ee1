//! # Catalog Query Engine
//!
//! Derives a display list from the catalog and a [`QuerySpec`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    query(catalog, spec)                                 │
//! │                                                                         │
//! │  catalog (fixed order)                                                  │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  1. Text    ── "sam" in title/brand/category/description (any case)     │
//! │      │         empty text keeps everything                              │
//! │      ▼                                                                  │
//! │  2. Brand   ── brand ∈ spec.brands                                      │
//! │      │         EMPTY SET KEEPS EVERYTHING (not "keep none")             │
//! │      ▼                                                                  │
//! │  3. Price   ── min <= price <= max, always applied                      │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  4. Sort    ── stable; relevance = catalog order                        │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Vec<Product>                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is a pure function. It never mutates the catalog, and for a
//! given catalog and spec it always returns the same list.
//!
//! ## Example
//! ```rust
//! use storefront_core::query::{QuerySpec, SortKey};
//!
//! let spec = QuerySpec::new("phone")
//!     .with_brand("Samsung")
//!     .sorted_by(SortKey::PriceLow);
//! assert_eq!(spec.text, "phone");
//! assert!(spec.brands.contains("Samsung"));
//! ```

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Price Range
// =============================================================================

/// Inclusive `[min, max]` price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceRange {
    min: Money,
    max: Money,
}

impl PriceRange {
    /// Range that keeps every product.
    pub const ANY: PriceRange = PriceRange {
        min: Money::zero(),
        max: Money::MAX,
    };

    /// Creates a range. Bounds are taken as given; a range with
    /// `min > max` simply matches nothing.
    pub const fn new(min: Money, max: Money) -> Self {
        PriceRange { min, max }
    }

    pub const fn min(&self) -> Money {
        self.min
    }

    pub const fn max(&self) -> Money {
        self.max
    }

    #[inline]
    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        PriceRange::ANY
    }
}

/// A labelled price bracket from the filter sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePreset {
    pub label: &'static str,
    pub range: PriceRange,
}

/// The sidebar's fixed brackets.
///
/// Adjacent brackets share their boundary (₹1,000 falls in both "Under
/// ₹1,000" and "₹1,000 - ₹5,000") because every bound is inclusive.
pub const PRICE_PRESETS: [PricePreset; 5] = [
    PricePreset {
        label: "Under ₹1,000",
        range: PriceRange::new(Money::from_rupees(0), Money::from_rupees(1_000)),
    },
    PricePreset {
        label: "₹1,000 - ₹5,000",
        range: PriceRange::new(Money::from_rupees(1_000), Money::from_rupees(5_000)),
    },
    PricePreset {
        label: "₹5,000 - ₹10,000",
        range: PriceRange::new(Money::from_rupees(5_000), Money::from_rupees(10_000)),
    },
    PricePreset {
        label: "₹10,000 - ₹20,000",
        range: PriceRange::new(Money::from_rupees(10_000), Money::from_rupees(20_000)),
    },
    PricePreset {
        label: "Above ₹20,000",
        range: PriceRange::new(Money::from_rupees(20_000), Money::from_rupees(200_000)),
    },
];

// =============================================================================
// Sort Key
// =============================================================================

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SortKey {
    /// Catalog order, no resort.
    #[default]
    Relevance,
    /// Ascending price.
    PriceLow,
    /// Descending price.
    PriceHigh,
    /// Descending rating.
    Rating,
    /// Descending discount.
    Discount,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Relevance,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Discount,
    ];

    /// Wire name, as used in query strings.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceLow => "price_low",
            SortKey::PriceHigh => "price_high",
            SortKey::Rating => "rating",
            SortKey::Discount => "discount",
        }
    }

    /// Label shown on the sort buttons.
    pub const fn label(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Top Rated",
            SortKey::Discount => "Discount",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "sort".to_string(),
                allowed: SortKey::ALL.iter().map(|k| k.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Query Spec
// =============================================================================

/// One search invocation: text, brand filter, price range, sort order.
///
/// The default spec (empty text, no brands, [`PriceRange::ANY`], relevance)
/// returns the whole catalog in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuerySpec {
    /// Free text; empty matches everything.
    #[serde(default)]
    pub text: String,

    /// Brands to keep; empty keeps every brand.
    #[serde(default)]
    pub brands: BTreeSet<String>,

    #[serde(default)]
    pub price_range: PriceRange,

    #[serde(default)]
    pub sort_key: SortKey,
}

impl QuerySpec {
    pub fn new(text: impl Into<String>) -> Self {
        QuerySpec {
            text: text.into(),
            ..QuerySpec::default()
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// Adds the brand if absent, removes it if present (checkbox behaviour).
    pub fn toggle_brand(&mut self, brand: &str) {
        if !self.brands.remove(brand) {
            self.brands.insert(brand.to_string());
        }
    }

    /// "Clear all": resets brands, price range and sort. The search text is
    /// part of the route, not the sidebar, so it stays.
    pub fn clear_filters(&mut self) {
        self.brands.clear();
        self.price_range = PriceRange::ANY;
        self.sort_key = SortKey::Relevance;
    }
}

// =============================================================================
// Query
// =============================================================================

/// Runs the filter/sort pipeline over `catalog`.
///
/// ## Example
/// ```rust
/// use storefront_core::query::{query, QuerySpec, SortKey};
/// # use storefront_core::{Money, Product, ProductId};
/// # fn product(id: u32, rupees: i64, brand: &str) -> Product {
/// #     Product {
/// #         id: ProductId::new(id), title: format!("Item {id}"), brand: brand.into(),
/// #         category: "misc".into(), description: String::new(),
/// #         price: Money::from_rupees(rupees), original_price: Money::from_rupees(rupees),
/// #         discount: 0, rating: 4.0, image: String::new(), assured: false,
/// #         free_delivery: false, reviews: 0, highlights: vec![],
/// #     }
/// # }
///
/// let catalog = vec![product(1, 100, "A"), product(2, 50, "B")];
/// let spec = QuerySpec::default().sorted_by(SortKey::PriceLow);
///
/// let ids: Vec<u32> = query(&catalog, &spec).iter().map(|p| p.id.get()).collect();
/// assert_eq!(ids, vec![2, 1]);
/// ```
pub fn query(catalog: &[Product], spec: &QuerySpec) -> Vec<Product> {
    let needle = spec.text.to_lowercase();

    let mut results: Vec<Product> = catalog
        .iter()
        .filter(|p| needle.is_empty() || matches_text(p, &needle))
        .filter(|p| spec.brands.is_empty() || spec.brands.contains(&p.brand))
        .filter(|p| spec.price_range.contains(p.price))
        .cloned()
        .collect();

    // sort_by is stable: ties keep catalog order
    match spec.sort_key {
        SortKey::Relevance => {}
        SortKey::PriceLow => results.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => results.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Discount => results.sort_by(|a, b| b.discount.cmp(&a.discount)),
    }

    results
}

/// Case-insensitive substring match on the searchable fields.
/// `needle` must already be lowercase.
fn matches_text(product: &Product, needle: &str) -> bool {
    [
        &product.title,
        &product.brand,
        &product.category,
        &product.description,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Distinct brands in first-seen catalog order.
///
/// ## Example
/// ```rust,ignore
/// // catalog brands: Apple, Samsung, Apple, boAt
/// assert_eq!(brands(&catalog), vec!["Apple", "Samsung", "boAt"]);
/// ```
pub fn brands(catalog: &[Product]) -> Vec<&str> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .map(|p| p.brand.as_str())
        .filter(|brand| seen.insert(*brand))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{product, rated};

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    fn catalog() -> Vec<Product> {
        let mut phone = product(1, 79_999, "Apple");
        phone.title = "iPhone 15".to_string();
        phone.category = "mobiles".to_string();
        phone.discount = 5;

        let mut galaxy = product(2, 24_999, "Samsung");
        galaxy.title = "Galaxy M34".to_string();
        galaxy.category = "mobiles".to_string();
        galaxy.discount = 30;

        let mut tv = product(3, 24_999, "Samsung");
        tv.title = "Crystal 4K TV".to_string();
        tv.category = "electronics".to_string();
        tv.description = "Smart TV with PurColor".to_string();
        tv.discount = 30;

        let mut earbuds = product(4, 1_299, "boAt");
        earbuds.title = "Airdopes 141".to_string();
        earbuds.category = "electronics".to_string();
        earbuds.description = "Bluetooth earbuds, works with any PHONE".to_string();
        earbuds.discount = 67;

        vec![phone, galaxy, tv, earbuds]
    }

    #[test]
    fn test_default_spec_returns_full_catalog_in_order() {
        let catalog = catalog();
        let results = query(&catalog, &QuerySpec::default());
        assert_eq!(results, catalog);
    }

    #[test]
    fn test_spec_example_price_low() {
        let catalog = vec![product(1, 100, "A"), product(2, 50, "B")];
        let spec = QuerySpec::default()
            .with_price_range(PriceRange::new(Money::zero(), Money::from_rupees(1_000)))
            .sorted_by(SortKey::PriceLow);

        assert_eq!(ids(&query(&catalog, &spec)), vec![2, 1]);
    }

    #[test]
    fn test_text_filter_is_case_insensitive_across_fields() {
        let catalog = catalog();

        // title
        assert_eq!(ids(&query(&catalog, &QuerySpec::new("GALAXY"))), vec![2]);
        // brand
        assert_eq!(ids(&query(&catalog, &QuerySpec::new("samsung"))), vec![2, 3]);
        // category
        assert_eq!(ids(&query(&catalog, &QuerySpec::new("Mobiles"))), vec![1, 2]);
        // description, uppercase in the data
        assert_eq!(ids(&query(&catalog, &QuerySpec::new("phone"))), vec![1, 4]);

        assert!(query(&catalog, &QuerySpec::new("toaster")).is_empty());
    }

    #[test]
    fn test_empty_brand_set_keeps_everything() {
        let catalog = catalog();
        let spec = QuerySpec::default();
        assert!(spec.brands.is_empty());
        assert_eq!(query(&catalog, &spec).len(), catalog.len());
    }

    #[test]
    fn test_brand_filter() {
        let catalog = catalog();
        let spec = QuerySpec::default().with_brand("Samsung").with_brand("boAt");
        assert_eq!(ids(&query(&catalog, &spec)), vec![2, 3, 4]);

        // brand match is exact, not substring
        let spec = QuerySpec::default().with_brand("Sam");
        assert!(query(&catalog, &spec).is_empty());
    }

    #[test]
    fn test_price_filter_is_inclusive() {
        let catalog = catalog();
        let spec = QuerySpec::default().with_price_range(PriceRange::new(
            Money::from_rupees(1_299),
            Money::from_rupees(24_999),
        ));
        assert_eq!(ids(&query(&catalog, &spec)), vec![2, 3, 4]);

        let inverted = QuerySpec::default().with_price_range(PriceRange::new(
            Money::from_rupees(10),
            Money::from_rupees(1),
        ));
        assert!(query(&catalog, &inverted).is_empty());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let catalog = catalog();
        let spec = QuerySpec::new("electronics")
            .with_brand("Samsung")
            .with_price_range(PRICE_PRESETS[4].range);
        assert_eq!(ids(&query(&catalog, &spec)), vec![3]);
    }

    #[test]
    fn test_sort_orders() {
        let catalog = catalog();

        let low = query(&catalog, &QuerySpec::default().sorted_by(SortKey::PriceLow));
        assert!(low.windows(2).all(|w| w[0].price <= w[1].price));
        // ties on price keep catalog order
        assert_eq!(ids(&low), vec![4, 2, 3, 1]);

        let high = query(&catalog, &QuerySpec::default().sorted_by(SortKey::PriceHigh));
        assert!(high.windows(2).all(|w| w[0].price >= w[1].price));
        assert_eq!(ids(&high), vec![1, 2, 3, 4]);

        let discount = query(&catalog, &QuerySpec::default().sorted_by(SortKey::Discount));
        assert_eq!(ids(&discount), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_sort_by_rating_descending_and_stable() {
        let catalog = vec![rated(1, 3.9), rated(2, 4.6), rated(3, 4.2), rated(4, 4.6)];
        let spec = QuerySpec::default().sorted_by(SortKey::Rating);
        assert_eq!(ids(&query(&catalog, &spec)), vec![2, 4, 3, 1]);
    }

    #[test]
    fn test_query_does_not_mutate_catalog() {
        let catalog = catalog();
        let before = catalog.clone();
        let _ = query(&catalog, &QuerySpec::default().sorted_by(SortKey::PriceHigh));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_brands_first_seen_order() {
        let catalog = catalog();
        assert_eq!(brands(&catalog), vec!["Apple", "Samsung", "boAt"]);
        assert!(brands(&[]).is_empty());
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("price_low".parse::<SortKey>().unwrap(), SortKey::PriceLow);
        assert_eq!(" RATING ".parse::<SortKey>().unwrap(), SortKey::Rating);
        assert!(matches!(
            "cheapest".parse::<SortKey>(),
            Err(ValidationError::NotAllowed { .. })
        ));
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_sort_key_serde_names() {
        assert_eq!(serde_json::to_string(&SortKey::PriceHigh).unwrap(), "\"price_high\"");
        let key: SortKey = serde_json::from_str("\"discount\"").unwrap();
        assert_eq!(key, SortKey::Discount);
    }

    #[test]
    fn test_toggle_and_clear_filters() {
        let mut spec = QuerySpec::new("tv")
            .with_price_range(PRICE_PRESETS[0].range)
            .sorted_by(SortKey::Rating);

        spec.toggle_brand("LG");
        assert!(spec.brands.contains("LG"));
        spec.toggle_brand("LG");
        assert!(spec.brands.is_empty());

        spec.toggle_brand("Sony");
        spec.clear_filters();
        assert_eq!(spec, QuerySpec::new("tv"));
    }
}

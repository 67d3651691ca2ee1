//! # Product Commands
//!
//! Search, product detail, brand list and the home page rows.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  search phone --brand Samsung --preset 2 --sort price_low              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SearchRequest ──► validate (query length, price bounds, preset)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  QuerySpec { text, brands, price_range, sort_key }                     │
//! │       │                                                                 │
//! │       ▼  (after the simulated search delay)                             │
//! │  Catalog::search ──► text ─► brand ─► price ─► stable sort             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SearchResponse { spec, results, brands }                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use storefront_core::validation::{validate_price_range, validate_search_query};
use storefront_core::{
    PriceRange, Product, ProductId, QuerySpec, SortKey, ValidationError, HOME_ROW_SIZE,
    PRICE_PRESETS,
};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::latency::Latency;
use crate::state::{CatalogState, ConfigState};

/// Parameters of one search, as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// Free text; empty lists the whole catalog.
    pub query: String,

    /// Brands to keep; empty keeps every brand.
    pub brands: Vec<String>,

    /// Lower price bound in rupees.
    pub min_price: Option<i64>,

    /// Upper price bound in rupees.
    pub max_price: Option<i64>,

    /// Index into the sidebar's price presets (0-based). Cannot be
    /// combined with `min_price` / `max_price`.
    pub price_preset: Option<usize>,

    pub sort: SortKey,
}

impl SearchRequest {
    /// Turns the request into a validated query.
    pub fn to_spec(&self) -> Result<QuerySpec, ValidationError> {
        let text = validate_search_query(&self.query)?;
        let price_range = self.price_range()?;

        let mut spec = QuerySpec::new(text)
            .with_price_range(price_range)
            .sorted_by(self.sort);
        for brand in &self.brands {
            spec = spec.with_brand(brand.trim());
        }

        Ok(spec)
    }

    fn price_range(&self) -> Result<PriceRange, ValidationError> {
        let has_bounds = self.min_price.is_some() || self.max_price.is_some();

        match self.price_preset {
            Some(_) if has_bounds => Err(ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: "use either a preset or min/max, not both".to_string(),
            }),
            Some(index) => PRICE_PRESETS
                .get(index)
                .map(|preset| preset.range)
                .ok_or(ValidationError::OutOfRange {
                    field: "price preset".to_string(),
                    min: 0,
                    max: PRICE_PRESETS.len() as i64 - 1,
                }),
            None if has_bounds => validate_price_range(self.min_price.unwrap_or(0), self.max_price),
            None => Ok(PriceRange::ANY),
        }
    }
}

/// Search results plus what the filter sidebar needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The query that produced `results`.
    pub spec: QuerySpec,

    pub results: Vec<Product>,

    /// Every brand in the catalog, for the brand checkboxes.
    pub brands: Vec<String>,
}

/// The two rows on the landing page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub store_name: String,

    pub featured: Vec<Product>,

    pub top_rated: Vec<Product>,

    /// Seed that picked `featured`; pass it back to get the same row.
    pub featured_seed: u64,
}

/// Searches the catalog.
///
/// ## Arguments
/// * `request` - Text, brand filter, price bounds and sort order
///
/// ## Returns
/// Matching products in the requested order, or a validation error for
/// malformed input. An empty result is not an error.
pub async fn search_products(
    catalog: &CatalogState,
    latency: &Latency,
    request: SearchRequest,
) -> Result<SearchResponse, ApiError> {
    debug!(query = %request.query, brands = ?request.brands, sort = %request.sort, "search_products command");

    let spec = request.to_spec()?;

    let results = latency
        .search(|| {
            let start = Instant::now();
            let results = catalog.catalog().search(&spec);
            info!(
                elapsed_us = start.elapsed().as_micros() as u64,
                count = results.len(),
                query = %spec.text,
                "search_products complete"
            );
            results
        })
        .await;

    Ok(SearchResponse {
        spec,
        results,
        brands: list_brands(catalog),
    })
}

/// Resolves a product detail page.
///
/// ## Arguments
/// * `id` - Product id as typed (e.g. from a URL segment)
///
/// ## Returns
/// The product, or `NOT_FOUND`. An id that is not a number is simply
/// not found, like any other unknown id.
pub async fn get_product(
    catalog: &CatalogState,
    latency: &Latency,
    id: &str,
) -> Result<Product, ApiError> {
    debug!(id = %id, "get_product command");

    latency
        .detail(|| {
            let found = ProductId::from_str(id)
                .ok()
                .and_then(|id| catalog.catalog().get(id));

            match found {
                Some(product) => Ok(product.clone()),
                None => {
                    warn!(id = %id, "Product not found");
                    Err(ApiError::not_found("Product", id.trim()))
                }
            }
        })
        .await
}

/// Distinct brands in first-seen catalog order.
pub fn list_brands(catalog: &CatalogState) -> Vec<String> {
    catalog
        .catalog()
        .brands()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// A sidebar price bracket.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePresetDto {
    /// Value for `SearchRequest::price_preset`.
    pub index: usize,
    pub label: &'static str,
    pub range: PriceRange,
}

/// The fixed price brackets, in sidebar order.
pub fn price_presets() -> Vec<PricePresetDto> {
    PRICE_PRESETS
        .iter()
        .enumerate()
        .map(|(index, preset)| PricePresetDto {
            index,
            label: preset.label,
            range: preset.range,
        })
        .collect()
}

/// Builds the home page: a "Featured" row and a "Top Rated" row.
///
/// The featured row is shuffled with `config.featured_seed` when set,
/// otherwise with a seed taken from the clock, so each visit differs.
pub fn home_page(catalog: &CatalogState, config: &ConfigState) -> HomePage {
    let seed = config
        .featured_seed
        .unwrap_or_else(|| chrono::Utc::now().timestamp_micros() as u64);
    debug!(seed, "home_page command");

    let catalog = catalog.catalog();
    HomePage {
        store_name: config.store_name.clone(),
        featured: catalog
            .featured(HOME_ROW_SIZE, seed)
            .into_iter()
            .cloned()
            .collect(),
        top_rated: catalog
            .top_rated(HOME_ROW_SIZE)
            .into_iter()
            .cloned()
            .collect(),
        featured_seed: seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::test_support::catalog_state;
    use storefront_core::Money;

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[tokio::test]
    async fn test_empty_request_lists_catalog() {
        let catalog = catalog_state();
        let response = search_products(&catalog, &Latency::disabled(), SearchRequest::default())
            .await
            .unwrap();

        assert_eq!(response.results.len(), catalog.catalog().len());
        assert_eq!(response.brands, vec!["Apple", "Samsung", "boAt", "Puma"]);
    }

    #[tokio::test]
    async fn test_search_with_filters() {
        let catalog = catalog_state();
        let request = SearchRequest {
            query: "  PHONE ".to_string(),
            brands: vec!["Samsung".to_string(), "Apple".to_string()],
            max_price: Some(50_000),
            sort: SortKey::PriceLow,
            ..SearchRequest::default()
        };

        let response = search_products(&catalog, &Latency::disabled(), request)
            .await
            .unwrap();

        assert_eq!(response.spec.text, "PHONE");
        assert_eq!(ids(&response.results), vec![2]);
    }

    #[tokio::test]
    async fn test_search_with_preset() {
        let catalog = catalog_state();
        let request = SearchRequest {
            price_preset: Some(0),
            ..SearchRequest::default()
        };

        let response = search_products(&catalog, &Latency::disabled(), request)
            .await
            .unwrap();
        assert!(response
            .results
            .iter()
            .all(|p| p.price <= Money::from_rupees(1_000)));
        assert_eq!(ids(&response.results), vec![3, 4]);
    }

    #[tokio::test]
    async fn test_search_rejects_bad_input() {
        let catalog = catalog_state();
        let latency = Latency::disabled();

        let inverted = SearchRequest {
            min_price: Some(5_000),
            max_price: Some(1_000),
            ..SearchRequest::default()
        };
        let err = search_products(&catalog, &latency, inverted).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let both = SearchRequest {
            min_price: Some(1),
            price_preset: Some(1),
            ..SearchRequest::default()
        };
        assert!(search_products(&catalog, &latency, both).await.is_err());

        let bad_preset = SearchRequest {
            price_preset: Some(PRICE_PRESETS.len()),
            ..SearchRequest::default()
        };
        assert!(search_products(&catalog, &latency, bad_preset).await.is_err());

        let long = SearchRequest {
            query: "x".repeat(101),
            ..SearchRequest::default()
        };
        assert!(search_products(&catalog, &latency, long).await.is_err());
    }

    #[tokio::test]
    async fn test_search_rejects_price_beyond_money_range() {
        let catalog = catalog_state();
        let request = SearchRequest {
            min_price: Some(100_000_000_000_000_000),
            max_price: Some(200_000_000_000_000_000),
            ..SearchRequest::default()
        };

        let err = search_products(&catalog, &Latency::disabled(), request)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("min price"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_respects_latency() {
        let catalog = catalog_state();
        let start = tokio::time::Instant::now();

        search_products(&catalog, &Latency::default(), SearchRequest::default())
            .await
            .unwrap();

        assert!(start.elapsed() >= std::time::Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_get_product() {
        let catalog = catalog_state();
        let latency = Latency::disabled();

        let product = get_product(&catalog, &latency, " 2 ").await.unwrap();
        assert_eq!(product.brand, "Samsung");

        let err = get_product(&catalog, &latency, "99").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 99");

        let err = get_product(&catalog, &latency, "abc").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_home_page_with_fixed_seed() {
        let catalog = catalog_state();
        let config = ConfigState {
            featured_seed: Some(11),
            ..ConfigState::default()
        };

        let first = home_page(&catalog, &config);
        let second = home_page(&catalog, &config);

        assert_eq!(first.featured_seed, 11);
        assert_eq!(ids(&first.featured), ids(&second.featured));
        assert_eq!(first.featured.len(), HOME_ROW_SIZE);
        assert_eq!(ids(&first.top_rated), vec![1, 5, 2, 3]);
    }

    #[test]
    fn test_price_presets() {
        let presets = price_presets();
        assert_eq!(presets.len(), PRICE_PRESETS.len());
        assert_eq!(presets[1].index, 1);
        assert_eq!(presets[1].range.min(), Money::from_rupees(1_000));
        assert_eq!(presets[1].range.max(), Money::from_rupees(5_000));
    }

    #[test]
    fn test_to_spec_trims_brands() {
        let request = SearchRequest {
            brands: vec![" Apple ".to_string()],
            ..SearchRequest::default()
        };
        let spec = request.to_spec().unwrap();
        assert!(spec.brands.contains("Apple"));
        assert_eq!(spec.price_range, PriceRange::ANY);
    }
}

//! # Catalog
//!
//! The static product list, validated once at load time.
//!
//! ## Load Flow
//! ```text
//! JSON array ──► Vec<Product> ──► Catalog::new
//!                                    │
//!                                    ├── validate_product on each record
//!                                    ├── reject duplicate ids
//!                                    │
//!                                    ▼
//!                              Catalog (read-only, fixed order)
//!                                    │
//!           ┌────────────────┬───────┴────────┬─────────────────┐
//!           ▼                ▼                ▼                 ▼
//!        find(id)        search(spec)     top_rated(n)    featured(n, seed)
//! ```

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{CoreError, CoreResult};
use crate::query::{self, QuerySpec};
use crate::types::{Product, ProductId};
use crate::validation::validate_product;

/// An immutable, ordered product list with unique ids.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, checking every record and id uniqueness.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product(product).map_err(|e| CoreError::InvalidCatalog {
                reason: format!("product {}: {}", product.id, e),
            })?;

            if !seen.insert(product.id) {
                return Err(CoreError::InvalidCatalog {
                    reason: format!("duplicate product id {}", product.id),
                });
            }
        }

        Ok(Catalog { products })
    }

    /// Parses a JSON array of products and validates it.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Catalog;
    ///
    /// let catalog = Catalog::from_json("[]").unwrap();
    /// assert!(catalog.is_empty());
    ///
    /// assert!(Catalog::from_json("{}").is_err());
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Catalog::new(products)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`get`](Self::get), but a missing id is a
    /// [`CoreError::ProductNotFound`].
    pub fn find(&self, id: ProductId) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// Runs the query engine over this catalog.
    pub fn search(&self, spec: &QuerySpec) -> Vec<Product> {
        query::query(&self.products, spec)
    }

    /// Distinct brands for the filter sidebar.
    pub fn brands(&self) -> Vec<&str> {
        query::brands(&self.products)
    }

    /// The `n` highest-rated products. Ties keep catalog order.
    pub fn top_rated(&self, n: usize) -> Vec<&Product> {
        let mut ranked: Vec<&Product> = self.products.iter().collect();
        ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        ranked.truncate(n);
        ranked
    }

    /// `n` distinct products picked by a shuffle seeded with `seed`.
    ///
    /// The same catalog and seed always give the same picks; callers that
    /// want variety pass a different seed per page view.
    pub fn featured(&self, n: usize, seed: u64) -> Vec<&Product> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut picks: Vec<&Product> = self.products.iter().collect();
        picks.shuffle(&mut rng);
        picks.truncate(n);
        picks
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

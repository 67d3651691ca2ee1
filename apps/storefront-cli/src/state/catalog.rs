//! # Catalog State
//!
//! The product catalog, loaded once at startup and shared read-only by
//! every session.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use storefront_core::{Catalog, CoreError};
use tracing::info;

/// Demo catalog compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Shared, immutable catalog.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Loads the catalog from `path`, or the bundled demo catalog when
    /// no path is configured.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogLoadError> {
        let catalog = match path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Catalog::from_json(&json)?
            }
            None => Self::bundled()?,
        };

        info!(
            products = catalog.len(),
            source = %path.map_or_else(|| "bundled".to_string(), |p| p.display().to_string()),
            "Catalog loaded"
        );

        Ok(CatalogState::new(catalog))
    }

    /// The demo catalog shipped with the binary.
    pub fn bundled() -> Result<Catalog, CoreError> {
        Catalog::from_json(BUNDLED_CATALOG)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Why the catalog could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("Could not read catalog {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Invalid(#[from] CoreError),
}

//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (see `cli.rs`)
//! 2. Environment variables (`STOREFRONT_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use storefront_core::money::group_indian;
use storefront_core::{DeliveryPolicy, Money};

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the REPL banner.
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Show paise in prices. Off by default: the storefront displays
    /// whole rupees.
    pub show_paise: bool,

    /// Free-delivery threshold and flat charge.
    pub delivery: DeliveryPolicy,

    /// Artificial delays before results become visible.
    pub latency: LatencyConfig,

    /// Catalog file to load instead of the bundled demo catalog.
    pub catalog_path: Option<PathBuf>,

    /// Fixed seed for the "Featured" row. `None` picks a new seed per view.
    pub featured_seed: Option<u64>,
}

/// Simulated delays, in milliseconds. Zero disables a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyConfig {
    pub search_ms: u64,
    pub detail_ms: u64,
    pub checkout_ms: u64,
}

impl LatencyConfig {
    /// Same delay everywhere.
    pub const fn uniform(ms: u64) -> Self {
        LatencyConfig {
            search_ms: ms,
            detail_ms: ms,
            checkout_ms: ms,
        }
    }

    pub const fn none() -> Self {
        LatencyConfig::uniform(0)
    }

    pub fn search(&self) -> Duration {
        Duration::from_millis(self.search_ms)
    }

    pub fn detail(&self) -> Duration {
        Duration::from_millis(self.detail_ms)
    }

    pub fn checkout(&self) -> Duration {
        Duration::from_millis(self.checkout_ms)
    }
}

impl Default for LatencyConfig {
    /// 500ms for search and product detail, 2s to "process" an order.
    fn default() -> Self {
        LatencyConfig {
            search_ms: 500,
            detail_ms: 500,
            checkout_ms: 2_000,
        }
    }
}

impl Default for ConfigState {
    /// Returns default configuration suitable for the demo.
    ///
    /// ## Default Values
    /// - Store: "Storefront Demo"
    /// - Currency: ₹, whole rupees
    /// - Delivery: free above ₹500, else ₹40
    /// - Latency: 500ms / 500ms / 2s
    /// - Catalog: bundled
    fn default() -> Self {
        ConfigState {
            store_name: "Storefront Demo".to_string(),
            currency_symbol: "₹".to_string(),
            show_paise: false,
            delivery: DeliveryPolicy::default(),
            latency: LatencyConfig::default(),
            catalog_path: None,
            featured_seed: None,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_CATALOG_PATH`: Load the catalog from this JSON file
    /// - `STOREFRONT_FREE_DELIVERY_ABOVE`: Threshold in rupees (e.g. "500")
    /// - `STOREFRONT_DELIVERY_CHARGE`: Flat charge in rupees (e.g. "40")
    /// - `STOREFRONT_LATENCY_MS`: One delay for every simulated wait
    /// - `STOREFRONT_FEATURED_SEED`: Fix the featured row
    /// - `STOREFRONT_SHOW_PAISE`: "true" to print two decimals
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(path) = lookup("STOREFRONT_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(rupees) = parse_var::<i64, _>(&lookup, "STOREFRONT_FREE_DELIVERY_ABOVE")? {
            config.delivery.free_above = non_negative_rupees("STOREFRONT_FREE_DELIVERY_ABOVE", rupees)?;
        }

        if let Some(rupees) = parse_var::<i64, _>(&lookup, "STOREFRONT_DELIVERY_CHARGE")? {
            config.delivery.charge = non_negative_rupees("STOREFRONT_DELIVERY_CHARGE", rupees)?;
        }

        if let Some(ms) = parse_var::<u64, _>(&lookup, "STOREFRONT_LATENCY_MS")? {
            config.latency = LatencyConfig::uniform(ms);
        }

        config.featured_seed = parse_var(&lookup, "STOREFRONT_FEATURED_SEED")?;

        if let Some(show) = parse_var::<bool, _>(&lookup, "STOREFRONT_SHOW_PAISE")? {
            config.show_paise = show;
        }

        Ok(config)
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_cli::state::ConfigState;
    /// use storefront_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_money(Money::from_paise(7_999_950)), "₹80,000");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };

        if self.show_paise {
            format!(
                "{}{}{}.{:02}",
                sign,
                self.currency_symbol,
                group_indian(amount.rupees().unsigned_abs()),
                amount.paise_part()
            )
        } else {
            format!(
                "{}{}{}",
                sign,
                self.currency_symbol,
                group_indian(amount.rounded_rupees().unsigned_abs())
            )
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
    }
}

fn non_negative_rupees(key: &str, rupees: i64) -> Result<Money, ConfigError> {
    if rupees < 0 {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: rupees.to_string(),
        });
    }
    Ok(Money::from_rupees(rupees))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

//! # Storefront CLI Library
//!
//! Terminal front-end for the storefront: configuration, shared state,
//! commands and the interactive shell.
//!
//! ## Module Organization
//! ```text
//! storefront_cli/
//! ├── lib.rs          ◄─── You are here (App setup & run)
//! ├── cli.rs          ◄─── clap definitions (process args + REPL lines)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Loaded catalog (Arc, read-only)
//! │   ├── cart.rs     ◄─── Session cart (Arc<Mutex>)
//! │   ├── session.rs  ◄─── One cart per session
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Search, detail, brands, home page
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── checkout.rs ◄─── Order summary, place order
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── latency.rs      ◄─── Simulated network delay
//! ├── render.rs       ◄─── Plain-text views
//! ├── repl.rs         ◄─── Interactive shell
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod latency;
pub mod render;
pub mod repl;
pub mod state;

use std::process::ExitCode;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use latency::Latency;
use repl::OutputFormat;
use state::{CartState, CatalogLoadError, CatalogState, ConfigState, SessionRegistry};

/// Everything a command may need, built once at startup.
#[derive(Debug, Clone)]
pub struct App {
    pub config: ConfigState,
    pub catalog: CatalogState,
    pub latency: Latency,
    pub sessions: SessionRegistry,
}

impl App {
    /// Loads the configured catalog and builds the shared state.
    pub fn new(config: ConfigState) -> Result<Self, CatalogLoadError> {
        let catalog = CatalogState::load(config.catalog_path.as_deref())?;
        Ok(App::with_catalog(config, catalog))
    }

    pub fn with_catalog(config: ConfigState, catalog: CatalogState) -> Self {
        App {
            latency: Latency::new(config.latency),
            config,
            catalog,
            sessions: SessionRegistry::new(),
        }
    }
}

/// Runs the storefront for a parsed command line.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Configuration ────────────────────────────────────────────────────► │
/// │     • defaults, then STOREFRONT_* env vars, then command line flags     │
/// │                                                                         │
/// │  2. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • --catalog / STOREFRONT_CATALOG_PATH, or the bundled demo file     │
/// │     • every record validated, duplicate ids rejected                    │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CatalogState, ConfigState, Latency, SessionRegistry               │
/// │                                                                         │
/// │  4. Dispatch ─────────────────────────────────────────────────────────► │
/// │     • one-shot subcommand: run it, print, exit                          │
/// │     • otherwise: interactive shell on stdin/stdout                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Exits with failure when a one-shot command fails (e.g. unknown product).
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = ConfigState::from_env()?;
    cli.apply_overrides(&mut config);

    let app = App::new(config)?;
    info!(store = %app.config.store_name, "Storefront ready");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match cli.command.and_then(cli::Command::into_repl) {
        Some(command) => {
            let reply = repl::execute(&app, &CartState::new(), command, format).await?;
            print!("{}", reply.output);
            Ok(if reply.error.is_some() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        None => {
            let stdin = BufReader::new(tokio::io::stdin());
            repl::run(&app, stdin, tokio::io::stdout(), format).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with command output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for storefront crates only
/// - Default: INFO, DEBUG for storefront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// Test Fixtures
// =============================================================================

#[cfg(test)]
pub(crate) mod test_support {
    use storefront_core::{Catalog, Money, Product, ProductId};

    use crate::state::{CatalogState, ConfigState, LatencyConfig};
    use crate::App;

    #[allow(clippy::too_many_arguments)]
    fn product(
        id: u32,
        title: &str,
        brand: &str,
        category: &str,
        description: &str,
        rupees: i64,
        original_rupees: i64,
        rating: f32,
    ) -> Product {
        let price = Money::from_rupees(rupees);
        let original_price = Money::from_rupees(original_rupees);
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            price,
            original_price,
            discount: ((original_rupees - rupees) * 100 / original_rupees) as u8,
            rating,
            image: format!("https://img.example/{}.jpg", id),
            assured: id % 2 == 1,
            free_delivery: rupees > 500,
            reviews: 0,
            highlights: Vec::new(),
        }
    }

    /// Five products across four brands:
    ///
    /// | id | brand   | price   | rating |
    /// |----|---------|---------|--------|
    /// | 1  | Apple   | 79,900  | 4.7    |
    /// | 2  | Samsung | 24,999  | 4.4    |
    /// | 3  | boAt    | 999     | 4.2    |
    /// | 4  | Puma    | 499     | 4.0    |
    /// | 5  | Samsung | 39,999  | 4.6    |
    pub fn catalog_state() -> CatalogState {
        let catalog = Catalog::new(vec![
            product(1, "iPhone 15", "Apple", "mobiles", "A16 Bionic smartphone", 79_900, 79_900, 4.7),
            product(2, "Galaxy A55", "Samsung", "mobiles", "5G smartphone with AMOLED display", 24_999, 34_999, 4.4),
            product(3, "Rockerz 450", "boAt", "audio", "Wireless on-ear headphones", 999, 3_990, 4.2),
            product(4, "Ankle Socks", "Puma", "fashion", "Pack of 3 cotton socks", 499, 599, 4.0),
            product(5, "Crystal 4K TV", "Samsung", "electronics", "55 inch 4K smart TV", 39_999, 52_900, 4.6),
        ])
        .expect("fixture catalog is valid");

        CatalogState::new(catalog)
    }

    /// App over [`catalog_state`] with no simulated latency.
    pub fn test_app() -> App {
        let config = ConfigState {
            store_name: "Test Store".to_string(),
            latency: LatencyConfig::none(),
            ..ConfigState::default()
        };
        App::with_catalog(config, catalog_state())
    }
}

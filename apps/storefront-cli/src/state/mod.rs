//! # State Module
//!
//! Application state for the storefront.
//!
//! Each concern gets its own state type, and commands take only the ones
//! they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ CatalogState │  │  CartState   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<        │  │  Arc<Mutex<  │  │  store_name      │              │
//! │  │   Catalog>   │  │    Cart      │  │  delivery policy │              │
//! │  │              │  │  >>          │  │  latency         │              │
//! │  └──────────────┘  └──────▲───────┘  └──────────────────┘              │
//! │                           │ one per session                            │
//! │                   ┌───────┴─────────┐                                  │
//! │                   │ SessionRegistry │                                  │
//! │                   └─────────────────┘                                  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: immutable after load, shared by Arc                   │
//! │  • CartState: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod session;

pub use cart::{CartState, CartTotals};
pub use catalog::{CatalogLoadError, CatalogState};
pub use config::{ConfigError, ConfigState, LatencyConfig};
pub use session::SessionRegistry;

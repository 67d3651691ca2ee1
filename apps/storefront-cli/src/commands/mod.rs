//! # Commands Module
//!
//! Every operation the front-end can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Search, product detail, brands, home page
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── checkout.rs  ◄─── Order summary, place order
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  REPL line / subcommand                                                 │
//! │  ──────────────────────                                                 │
//! │  > add 3 2                                                              │
//! │         │                                                               │
//! │         │ (clap parses into a typed command)                            │
//! │         ▼                                                               │
//! │  fn add_to_cart(                                                        │
//! │      catalog: &CatalogState,  ◄── Only the state it needs               │
//! │      cart: &CartState,                                                  │
//! │      product_id: ProductId,                                             │
//! │      quantity: Option<i64>,                                             │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  render::cart(..) as text, or serde_json with --json                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands that simulate a remote call (search, product detail, place
//! order) are `async` and take a [`Latency`](crate::latency::Latency).

pub mod cart;
pub mod checkout;
pub mod config;
pub mod product;

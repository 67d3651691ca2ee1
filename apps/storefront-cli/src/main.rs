//! # Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        storefront                                       │
//! │                                                                         │
//! │  main.rs ────► tracing, parse args                                      │
//! │                                                                         │
//! │  lib.rs ─────► config, catalog, state, dispatch                         │
//! │                                                                         │
//! │  repl.rs ────► search, show, add, qty, remove, cart, checkout, home     │
//! │                                                                         │
//! │  storefront-core ──► cart store, catalog query engine                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use clap::Parser;
use storefront_cli::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    storefront_cli::init_tracing();

    let cli = Cli::parse();
    storefront_cli::run(cli).await
}

//! # Interactive Storefront
//!
//! A line-oriented shell over the commands. Each REPL run is one shopping
//! session with its own cart.
//!
//! ```text
//! > search phone --sort price_low
//! Results for "phone" (2 found, sorted by Price: Low to High)
//! #2    Galaxy M34 5G (Samsung)  ₹16,999  ...
//! > add 2
//! My Cart (1)
//! ...
//! > checkout
//! Order placed successfully!
//! ```

use std::fmt;

use clap::Parser;
use serde::Serialize;
use storefront_core::OrderSummary;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::cli::{ReplCommand, ReplLine};
use crate::commands::cart::{self as cart_cmd, CartResponse};
use crate::commands::{checkout, config, product};
use crate::error::ApiError;
use crate::render;
use crate::state::CartState;
use crate::App;

/// How responses are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Printed output of one command, and the error if it failed.
#[derive(Debug)]
pub struct Reply {
    pub output: String,
    pub error: Option<ApiError>,
}

/// Cart plus totals, as shown after every cart change.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CartView {
    cart: CartResponse,
    summary: OrderSummary,
}

/// Runs the shell until `quit` or end of input.
pub async fn run<R, W>(app: &App, input: R, mut output: W, format: OutputFormat) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (session_id, cart) = app.sessions.open().await;
    info!(session = %session_id, "Shopping session started");

    let banner = format!(
        "Welcome to {}. Type `help` for commands, `quit` to leave.\n",
        app.config.store_name
    );
    output.write_all(banner.as_bytes()).await?;

    let mut lines = input.lines();
    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match ReplLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                output.write_all(err.render().to_string().as_bytes()).await?;
                continue;
            }
        };

        if matches!(command, ReplCommand::Quit) {
            break;
        }

        let reply = execute(app, &cart, command, format).await?;
        output.write_all(reply.output.as_bytes()).await?;
    }

    output.write_all(b"Goodbye!\n").await?;
    output.flush().await?;

    app.sessions.close(session_id).await;
    info!(session = %session_id, "Shopping session ended");
    Ok(())
}

/// Runs one command against a session cart and renders the result.
///
/// Command failures (unknown product, bad quantity, empty cart) become part
/// of the reply; only output errors are returned as `Err`.
pub async fn execute(
    app: &App,
    cart: &CartState,
    command: ReplCommand,
    format: OutputFormat,
) -> anyhow::Result<Reply> {
    debug!(?command, "Executing");
    let settings = &app.config;

    match command {
        ReplCommand::Search(args) => {
            let result = product::search_products(&app.catalog, &app.latency, args.into()).await;
            reply(format, result, |out, r| render::search(out, r, settings))
        }
        ReplCommand::Brands => {
            let brands = product::list_brands(&app.catalog);
            reply(format, Ok(brands), |out, b| render::brands(out, b))
        }
        ReplCommand::Presets => {
            let presets = product::price_presets();
            reply(format, Ok(presets), |out, p| render::price_presets(out, p))
        }
        ReplCommand::Show { id } => {
            let result = product::get_product(&app.catalog, &app.latency, &id).await;
            reply(format, result, |out, p| render::product_detail(out, p, settings))
        }
        ReplCommand::Home => {
            let home = product::home_page(&app.catalog, settings);
            reply(format, Ok(home), |out, h| render::home(out, h, settings))
        }
        ReplCommand::Add { id, qty } => {
            let result = cart_cmd::add_to_cart(&app.catalog, cart, id, qty);
            cart_reply(app, cart, format, result)
        }
        ReplCommand::Qty { id, qty } => {
            let response = cart_cmd::update_cart_item(cart, id, qty);
            cart_reply(app, cart, format, Ok(response))
        }
        ReplCommand::Remove { id } => {
            let response = cart_cmd::remove_from_cart(cart, id);
            cart_reply(app, cart, format, Ok(response))
        }
        ReplCommand::Cart => {
            let response = cart_cmd::get_cart(cart);
            cart_reply(app, cart, format, Ok(response))
        }
        ReplCommand::Clear => {
            let response = cart_cmd::clear_cart(cart);
            cart_reply(app, cart, format, Ok(response))
        }
        ReplCommand::Checkout => {
            let result = checkout::place_order(cart, settings, &app.latency).await;
            reply(format, result, |out, o| render::order(out, o, settings))
        }
        ReplCommand::Config => {
            let current = config::get_config(settings);
            reply(format, Ok(current), |out, c| render::config(out, c))
        }
        ReplCommand::Quit => Ok(Reply {
            output: String::new(),
            error: None,
        }),
    }
}

fn cart_reply(
    app: &App,
    cart: &CartState,
    format: OutputFormat,
    result: Result<CartResponse, ApiError>,
) -> anyhow::Result<Reply> {
    let view = result.map(|response| CartView {
        cart: response,
        summary: checkout::order_summary(cart, &app.config),
    });
    reply(format, view, |out, v| render::cart(out, &v.cart, &v.summary, &app.config))
}

fn reply<T, F>(format: OutputFormat, result: Result<T, ApiError>, text: F) -> anyhow::Result<Reply>
where
    T: Serialize,
    F: FnOnce(&mut String, &T) -> fmt::Result,
{
    match result {
        Ok(value) => {
            let output = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&value)? + "\n",
                OutputFormat::Text => {
                    let mut out = String::new();
                    text(&mut out, &value)?;
                    out
                }
            };
            Ok(Reply { output, error: None })
        }
        Err(err) => {
            let output = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&err)? + "\n",
                OutputFormat::Text => format!("{}\n", err.message),
            };
            Ok(Reply {
                output,
                error: Some(err),
            })
        }
    }
}

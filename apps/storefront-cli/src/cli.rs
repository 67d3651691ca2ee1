//! Command line and REPL grammar.
//!
//! `Cli` is the process command line. `ReplLine` is one line typed at the
//! `>` prompt, parsed by clap in multicall mode so every REPL command gets
//! the same argument handling and `help` output as the binary itself.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use storefront_core::{ProductId, SortKey};

use crate::commands::product::SearchRequest;
use crate::state::{ConfigState, LatencyConfig};

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the catalog, fill a cart and check out", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Catalog JSON file (default: the bundled demo catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Simulated network delay in milliseconds, 0 to disable
    #[arg(long, global = true)]
    pub latency_ms: Option<u64>,

    /// Seed for the home page "Featured" row
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print responses as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Defaults to `shell`
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Applies command line overrides on top of env/default configuration.
    pub fn apply_overrides(&self, config: &mut ConfigState) {
        if let Some(path) = &self.catalog {
            config.catalog_path = Some(path.clone());
        }
        if let Some(ms) = self.latency_ms {
            config.latency = LatencyConfig::uniform(ms);
        }
        if let Some(seed) = self.seed {
            config.featured_seed = Some(seed);
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive storefront (default)
    Shell,

    /// Search the catalog and exit
    Search(SearchArgs),

    /// Show one product and exit
    Show {
        /// Product id
        id: String,
    },

    /// List brands and exit
    Brands,

    /// Show the home page rows and exit
    Home,
}

/// Search text, filters and sort order.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Words to look for in title, brand, category and description
    pub query: Vec<String>,

    /// Keep only this brand (repeatable)
    #[arg(long = "brand", short = 'b')]
    pub brands: Vec<String>,

    /// Minimum price in rupees
    #[arg(long)]
    pub min: Option<i64>,

    /// Maximum price in rupees
    #[arg(long)]
    pub max: Option<i64>,

    /// Price bracket from `presets` (instead of --min/--max)
    #[arg(long, conflicts_with_all = ["min", "max"])]
    pub preset: Option<usize>,

    /// relevance, price_low, price_high, rating or discount
    #[arg(long, short = 's', default_value_t = SortKey::Relevance)]
    pub sort: SortKey,
}

impl From<SearchArgs> for SearchRequest {
    fn from(args: SearchArgs) -> Self {
        SearchRequest {
            query: args.query.join(" "),
            brands: args.brands,
            min_price: args.min,
            max_price: args.max,
            price_preset: args.preset,
            sort: args.sort,
        }
    }
}

/// One line typed at the REPL prompt.
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReplCommand {
    /// Search the catalog
    Search(SearchArgs),

    /// List brands
    Brands,

    /// List price brackets for `search --preset`
    Presets,

    /// Show a product
    Show {
        /// Product id
        id: String,
    },

    /// Add a product to the cart
    Add {
        id: ProductId,

        /// How many (default 1)
        #[arg(allow_negative_numbers = true)]
        qty: Option<i64>,
    },

    /// Change the quantity of a cart line
    Qty {
        id: ProductId,

        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },

    /// Remove a product from the cart
    Remove { id: ProductId },

    /// Show the cart and order summary
    Cart,

    /// Empty the cart
    Clear,

    /// Place the order
    Checkout,

    /// Featured and top rated products
    Home,

    /// Show configuration
    Config,

    /// Leave the store
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    /// The REPL command a one-shot subcommand runs, `None` for `shell`.
    pub fn into_repl(self) -> Option<ReplCommand> {
        match self {
            Command::Shell => None,
            Command::Search(args) => Some(ReplCommand::Search(args)),
            Command::Show { id } => Some(ReplCommand::Show { id }),
            Command::Brands => Some(ReplCommand::Brands),
            Command::Home => Some(ReplCommand::Home),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
        ReplLine::command().debug_assert();
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from([
            "storefront", "search", "running", "shoes", "-b", "Puma", "--max", "3000", "--sort", "price_low", "--json",
        ])
        .unwrap();
        assert!(cli.json);

        let Some(Command::Search(args)) = cli.command else {
            panic!("expected search");
        };
        let request = SearchRequest::from(args);
        assert_eq!(request.query, "running shoes");
        assert_eq!(request.brands, vec!["Puma"]);
        assert_eq!(request.max_price, Some(3000));
        assert_eq!(request.sort, SortKey::PriceLow);
    }

    #[test]
    fn test_preset_conflicts_with_bounds() {
        assert!(Cli::try_parse_from(["storefront", "search", "--preset", "1", "--min", "5"]).is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from(["storefront", "--latency-ms", "0", "--seed", "9", "home"]).unwrap();
        let mut config = ConfigState::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.latency, LatencyConfig::none());
        assert_eq!(config.featured_seed, Some(9));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_repl_lines() {
        let line = ReplLine::try_parse_from(["qty", "3", "-2"]).unwrap();
        assert!(matches!(
            line.command,
            ReplCommand::Qty { id, qty: -2 } if id == ProductId::new(3)
        ));

        let line = ReplLine::try_parse_from(["add", "7"]).unwrap();
        assert!(matches!(line.command, ReplCommand::Add { qty: None, .. }));

        assert!(matches!(
            ReplLine::try_parse_from(["exit"]).unwrap().command,
            ReplCommand::Quit
        ));

        assert!(ReplLine::try_parse_from(["add", "seven"]).is_err());
        assert!(ReplLine::try_parse_from(["search", "--sort", "cheapest"]).is_err());
    }
}

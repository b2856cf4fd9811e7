//! Lookbook CLI - Inspect and edit a store's persisted state.
//!
//! # Usage
//!
//! ```bash
//! # Add two medium black hoodies to the fashion cart
//! lookbook --store fashion cart add --id 1 --name Hoodie --price 1000 -q 2 --size M --color Black
//!
//! # Show the cart with totals
//! lookbook cart show
//!
//! # Toggle a favorite
//! lookbook favorites toggle 42
//!
//! # Place an order for the current cart
//! lookbook checkout --address "12 Main St" --phone "+1 555 0100"
//!
//! # Search a catalog file
//! lookbook search --catalog catalog.json --query shoe --category sneakers
//! ```
//!
//! # Commands
//!
//! - `cart` - Add, remove, change quantities, clear, show
//! - `favorites` - Toggle and list favorites
//! - `checkout` - Turn the cart into an order
//! - `orders` - List and show placed orders
//! - `search` - Filter a catalog file
//!
//! Settings come from `LOOKBOOK_*` environment variables (see
//! `lookbook_storefront::config`); flags override them. Logs go to stderr,
//! filtered by `RUST_LOG`, as JSON when `LOOKBOOK_LOG_FORMAT=json`.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Command output goes to stdout
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use lookbook_storefront::config::{StoreConfig, parse_max_quantity, validate_namespace};
use lookbook_storefront::Store;

mod commands;

#[derive(Parser)]
#[command(name = "lookbook")]
#[command(author, version, about = "Lookbook storefront state tools")]
struct Cli {
    /// Directory holding persisted store data
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Store namespace (fashion, beauty, sneakers, tech, ...)
    #[arg(long, global = true, value_parser = parse_namespace)]
    store: Option<String>,

    /// Cart quantity cap; 0 or "none" disables it
    #[arg(long, global = true, value_parser = parse_quantity_cap)]
    max_quantity: Option<QuantityCap>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Place an order for the current cart and empty it
    Checkout {
        /// Shipping address
        #[arg(long, requires = "phone")]
        address: Option<String>,

        /// Contact phone number
        #[arg(long, requires = "address")]
        phone: Option<String>,
    },
    /// Browse placed orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Filter a catalog file by query and category
    Search {
        /// Path to a JSON catalog
        #[arg(long)]
        catalog: PathBuf,

        /// Substring to look for
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only show items in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Fields to search
        #[arg(long, value_delimiter = ',', default_value = "name,category")]
        fields: Vec<String>,
    },
}

/// Identifies a cart line.
#[derive(Args)]
struct LineArgs {
    /// Product id
    #[arg(long)]
    id: String,

    /// Size option
    #[arg(long)]
    size: Option<String>,

    /// Color option
    #[arg(long)]
    color: Option<String>,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add an item, merging with a matching line
    Add {
        #[command(flatten)]
        line: LineArgs,

        /// Product name
        #[arg(long)]
        name: String,

        /// Unit price
        #[arg(long)]
        price: Decimal,

        /// Quantity to add
        #[arg(short, long, allow_negative_numbers = true)]
        quantity: Option<i64>,

        /// Image URL
        #[arg(long)]
        image: Option<String>,
    },
    /// Remove a line
    Remove {
        #[command(flatten)]
        line: LineArgs,
    },
    /// Set a line's quantity (below 1 removes it)
    Set {
        #[command(flatten)]
        line: LineArgs,

        #[arg(short, long, allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Change a line's quantity by a delta
    Adjust {
        #[command(flatten)]
        line: LineArgs,

        #[arg(short, long, allow_negative_numbers = true)]
        delta: i64,
    },
    /// Remove every line
    Clear,
    /// Show lines and totals
    Show,
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// Add or remove a favorite
    Toggle {
        /// Product id
        id: String,
    },
    /// List favorites
    List,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders, newest first
    List,
    /// Show one order as JSON
    Show {
        /// Order id
        id: String,
    },
}

/// Parsed `--max-quantity`; `None` inside means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QuantityCap(Option<u32>);

fn parse_quantity_cap(value: &str) -> Result<QuantityCap, String> {
    parse_max_quantity(value).map(QuantityCap)
}

fn parse_namespace(value: &str) -> Result<String, String> {
    validate_namespace(value).map(|()| value.to_string())
}

fn main() {
    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());

    // Structured logs for machine consumers
    let json_logs = std::env::var("LOOKBOOK_LOG_FORMAT").is_ok_and(|format| format == "json");
    let json_layer = json_logs.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> lookbook_storefront::Result<String> {
    let mut config = StoreConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(store) = cli.store {
        config.store = store;
    }
    if let Some(QuantityCap(max_quantity)) = cli.max_quantity {
        config.max_line_quantity = max_quantity;
    }

    let mut store = Store::from_config(&config)?;
    dispatch(&mut store, cli.command)
}

fn dispatch(store: &mut Store, command: Commands) -> lookbook_storefront::Result<String> {
    Ok(match command {
        Commands::Cart { action } => match action {
            CartAction::Add {
                line,
                name,
                price,
                quantity,
                image,
            } => commands::cart::add(
                store,
                commands::cart::AddItem {
                    id: line.id,
                    name,
                    price,
                    quantity,
                    size: line.size,
                    color: line.color,
                    image,
                },
            ),
            CartAction::Remove { line } => {
                commands::cart::remove(store, &commands::cart::key(line.id, line.size, line.color))
            }
            CartAction::Set { line, quantity } => commands::cart::set(
                store,
                &commands::cart::key(line.id, line.size, line.color),
                quantity,
            ),
            CartAction::Adjust { line, delta } => commands::cart::adjust(
                store,
                &commands::cart::key(line.id, line.size, line.color),
                delta,
            ),
            CartAction::Clear => commands::cart::clear(store),
            CartAction::Show => commands::cart::show(store),
        },
        Commands::Favorites { action } => match action {
            FavoritesAction::Toggle { id } => commands::favorites::toggle(store, &id),
            FavoritesAction::List => commands::favorites::list(store),
        },
        Commands::Checkout { address, phone } => {
            commands::orders::checkout(store, address.as_deref(), phone.as_deref())?
        }
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::orders::list(store),
            OrdersAction::Show { id } => commands::orders::show(store, &id)?,
        },
        Commands::Search {
            catalog,
            query,
            category,
            fields,
        } => commands::search::run(&catalog, &query, category.as_deref(), &fields)?,
    })
}

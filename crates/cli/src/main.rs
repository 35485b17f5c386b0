//! Beauty Store CLI - cart, bookings, accounts and back-office tools.
//!
//! # Usage
//!
//! ```bash
//! # Browse and shop
//! bs-cli shop products --category "Braided Wigs" --sort price-low
//! bs-cli cart add braided-wigs-1
//! bs-cli checkout --name "Ada Lovelace" --email ada@example.com \
//!     --phone 07700900123 --address "1 Analytical Row" --payment card
//!
//! # Book a service
//! bs-cli book --service bridal-makeup --date 2026-11-02 --time 10:30 ...
//!
//! # Accounts
//! bs-cli auth signup -e ada@example.com -p secret -n "Ada"
//! bs-cli auth login -e ada@example.com -p secret
//!
//! # Back office (requires an admin session)
//! bs-cli admin create-user -e boss@example.com -p secret -n Boss
//! bs-cli admin inventory add braided-wigs-1 --units 10
//! bs-cli admin sales
//! ```
//!
//! # Environment Variables
//!
//! - `BEAUTY_STORE_DATA_DIR` - Directory holding the JSON documents
//! - `BEAUTY_STORE_SHIPPING_FEE` - Flat shipping fee added at checkout
//! - `BEAUTY_STORE_CURRENCY` - Display currency
//! - `RUST_LOG` - Log filter (default: `info`)
//!
//! Command output is JSON on stdout; logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use beauty_store_storefront::{FileStore, StorefrontConfig};

mod commands;

use commands::{admin, auth, booking, cart, checkout, shop};

#[derive(Parser)]
#[command(name = "bs-cli")]
#[command(author, version, about = "Beauty Store CLI tools")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart and saved items
    Cart {
        #[command(subcommand)]
        action: cart::CartAction,
    },
    /// Place an order for the current cart
    Checkout(checkout::CheckoutArgs),
    /// Book a service
    Book(booking::BookArgs),
    /// Upload a payment receipt
    Receipt {
        #[command(subcommand)]
        target: checkout::ReceiptTarget,
    },
    /// Orders and bookings of the signed-in customer
    Account {
        #[command(subcommand)]
        view: auth::AccountView,
    },
    /// Sign up, log in and out
    Auth {
        #[command(subcommand)]
        action: auth::AuthAction,
    },
    /// Back-office tools
    Admin {
        #[command(subcommand)]
        action: admin::AdminAction,
    },
    /// Browse the catalog
    Shop {
        #[command(subcommand)]
        view: shop::ShopView,
    },
}

/// Shared state for every command.
pub struct Context {
    pub store: FileStore,
    pub config: StorefrontConfig,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let store = FileStore::open(&config.data_dir)?;
    let ctx = Context { store, config };

    match cli.command {
        Commands::Cart { action } => cart::run(&ctx, action)?,
        Commands::Checkout(args) => checkout::checkout(&ctx, args)?,
        Commands::Book(args) => booking::book(&ctx, args)?,
        Commands::Receipt { target } => checkout::receipt(&ctx, target)?,
        Commands::Account { view } => auth::account(&ctx, view)?,
        Commands::Auth { action } => auth::run(&ctx, action)?,
        Commands::Admin { action } => admin::run(&ctx, action)?,
        Commands::Shop { view } => shop::run(&ctx, view)?,
    }
    Ok(())
}

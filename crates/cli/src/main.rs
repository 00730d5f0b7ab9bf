//! GoMarketplace CLI - command-line host for the cart store.
//!
//! # Usage
//!
//! ```bash
//! # Add a product to the cart
//! gom-cli cart add --id shirt-1 --title "Shirt" --price 19.99
//!
//! # Increment / decrement a line by product id
//! gom-cli cart increment shirt-1
//! gom-cli cart decrement shirt-1
//!
//! # Print the current cart
//! gom-cli cart show
//! ```
//!
//! # Commands
//!
//! - `cart show` - Print the current cart
//! - `cart add` - Add a product (bumps the quantity if already present)
//! - `cart increment` - Increment a line by product id
//! - `cart decrement` - Decrement a line by product id
//!
//! The cart is persisted under `GOMARKETPLACE_DATA_DIR` (default: `data`),
//! so state carries over between invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use go_marketplace_cart::{CartProvider, FileStorage};

mod commands;
mod config;

use config::CliConfig;

/// Provider scope for this process; mounted once in `run`.
static CART: CartProvider<FileStorage> = CartProvider::new();

#[derive(Parser)]
#[command(name = "gom-cli")]
#[command(author, version, about = "GoMarketplace CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and mutate the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Print the current cart
    Show,
    /// Add a product to the cart
    Add {
        /// Product identifier
        #[arg(short, long)]
        id: String,

        /// Display title
        #[arg(short, long)]
        title: String,

        /// Unit price (decimal, e.g. 19.99)
        #[arg(short, long)]
        price: String,

        /// Display image URL
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Increment a cart line by product id
    Increment {
        /// Product identifier
        id: String,
    },
    /// Decrement a cart line by product id
    Decrement {
        /// Product identifier
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env();
    CART.mount(FileStorage::new(&config.data_dir)).await?;

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&CART.cart()),
            CartAction::Add {
                id,
                title,
                price,
                image,
            } => commands::cart::add(&CART.cart(), &id, &title, &image, &price).await?,
            CartAction::Increment { id } => commands::cart::increment(&CART.cart(), &id).await,
            CartAction::Decrement { id } => commands::cart::decrement(&CART.cart(), &id).await,
        },
    }
    Ok(())
}

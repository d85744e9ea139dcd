//! Tally kiosk - command-line front end for the cart engine.
//!
//! # Usage
//!
//! ```bash
//! # Add an item from a product listing
//! tally add --title "Red Mug" --price 9.99 --image mug.png
//!
//! # Adjust a line by its id (shown in the first column of `tally show`)
//! tally qty red_mug_9.99 3
//! tally inc red_mug_9.99
//! tally dec red_mug_9.99
//! tally remove red_mug_9.99
//!
//! # Render the cart page / order summary / badge count
//! tally show
//! tally checkout
//! tally count
//! ```
//!
//! # Environment Variables
//!
//! - `TALLY_DATA_DIR` - Directory holding the cart file (default: platform
//!   app data directory)
//! - `TALLY_CART_SLOT` - Slot key, i.e. the file stem (default: `cartItems`)
//! - `TALLY_SHIPPING_FEE` - Flat shipping fee at checkout (default: `15.00`)
//! - `RUST_LOG` - Log filter (default: `info,tally=debug` to stderr)
//!
//! Every invocation is one complete engine operation: the cart lives in
//! the slot file, not in this process, so separate invocations compose
//! the same way separate page visits do.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tally_store::{CartStore, FileMedium};

mod commands;
mod config;
mod render;

use config::KioskConfig;

#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about = "Tally shopping cart kiosk")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an item to the cart
    Add {
        /// Item title as shown on the listing page
        #[arg(short, long)]
        title: String,

        /// Unit price, e.g. "9.99"
        #[arg(short, long)]
        price: String,

        /// Image path or URL for the line
        #[arg(short, long, default_value = "")]
        image: String,

        /// Quantity to add; junk or negative input falls back to 1
        #[arg(short, long, default_value = "1")]
        qty: String,
    },

    /// Set a line's quantity (0 removes the line)
    Qty {
        /// Line id, e.g. "red_mug_9.99"
        id: String,

        /// New absolute quantity; junk or negative input falls back to 1
        quantity: String,
    },

    /// Increase a line's quantity by one
    Inc {
        /// Line id
        id: String,
    },

    /// Decrease a line's quantity by one; from 1, removes the line
    Dec {
        /// Line id
        id: String,
    },

    /// Remove a line from the cart
    Remove {
        /// Line id
        id: String,
    },

    /// Show the cart page: lines, badge count, subtotal
    Show,

    /// Show the order summary: lines, subtotal, shipping, order total
    Checkout,

    /// Print the badge count as a bare number
    Count,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let config = KioskConfig::from_env();

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &KioskConfig) -> anyhow::Result<()> {
    let data_dir = config.resolve_data_dir()?;
    debug!(data_dir = %data_dir.display(), slot = %config.slot, "Kiosk store ready");

    let store = CartStore::new(FileMedium::new(data_dir)).with_slot(config.slot.as_str());

    match cli.command {
        Commands::Add {
            title,
            price,
            image,
            qty,
        } => commands::add(&store, &title, &price, &image, &qty)?,
        Commands::Qty { id, quantity } => commands::set_quantity(&store, &id, &quantity)?,
        Commands::Inc { id } => commands::increment(&store, &id)?,
        Commands::Dec { id } => commands::decrement(&store, &id)?,
        Commands::Remove { id } => commands::remove(&store, &id)?,
        Commands::Show => commands::show(&store)?,
        Commands::Checkout => commands::checkout(&store, config.shipping_fee)?,
        Commands::Count => commands::count(&store)?,
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so `tally count` and friends stay pipeable.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `RUST_LOG=tally_store=trace` - Trace for the store crate only
/// - Default: info, with debug for the tally crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally_store=debug,tally_kiosk=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

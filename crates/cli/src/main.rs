//! RigoCompra CLI - Catalog reports over the sample marketplace data.
//!
//! # Usage
//!
//! ```bash
//! # List every product
//! rigo list
//!
//! # Show one product
//! rigo show 3
//!
//! # Search by name and/or category (case-insensitive)
//! rigo search --name café --category comida
//!
//! # Stock and value reports
//! rigo low-stock --threshold 5
//! rigo categories
//! rigo value
//! ```
//!
//! # Commands
//!
//! - `list`, `show`, `search` - Browse the catalog
//! - `low-stock`, `categories`, `value` - Inventory reports
//! - `add` - Add a product from typed fields and print it
//! - `favorites` - Mark ids as favorites and list them
//!
//! The catalog is the in-memory sample catalog; nothing is persisted.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};
use rigo_market::store::{CatalogStore, FavoritesTracker, seed};

mod commands;

use commands::CommandError;
use commands::catalog::NewProduct;

#[derive(Parser)]
#[command(name = "rigo")]
#[command(author, version, about = "RigoCompra catalog tools")]
struct Cli {
    /// Start from an empty catalog instead of the sample products
    #[arg(long, global = true)]
    empty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all products
    List,
    /// Show one product in detail
    Show {
        /// Product id
        id: u32,
    },
    /// Search products by name substring and/or category
    Search {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        category: Option<String>,
    },
    /// List products at or below a stock threshold
    LowStock {
        #[arg(short, long, default_value_t = 5)]
        threshold: u32,
    },
    /// List distinct categories
    Categories,
    /// Show the total inventory value
    Value,
    /// Add a product and print it
    Add {
        #[arg(long)]
        code: String,

        #[arg(long)]
        name: String,

        /// Unit price, e.g. 350 or 12.50
        #[arg(long)]
        price: String,

        #[arg(long)]
        quantity: String,

        #[arg(long)]
        category: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        image: String,
    },
    /// Mark product ids as favorites and list them
    Favorites {
        /// Ids to add
        ids: Vec<u32>,

        /// Ids to toggle after adding
        #[arg(short, long)]
        toggle: Vec<u32>,
    },
}

fn main() {
    // Initialize tracing (stderr so reports stay clean on stdout)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rigo_market=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let catalog = CatalogStore::new();
    if !cli.empty {
        seed::seed_catalog(&catalog)?;
    }
    let favorites = FavoritesTracker::new();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List => commands::catalog::list(&catalog, &mut out)?,
        Commands::Show { id } => commands::catalog::show(&catalog, id, &mut out)?,
        Commands::Search { name, category } => commands::catalog::find(
            &catalog,
            name.as_deref(),
            category.as_deref(),
            &mut out,
        )?,
        Commands::LowStock { threshold } => {
            commands::catalog::low_stock(&catalog, threshold, &mut out)?;
        }
        Commands::Categories => commands::catalog::categories(&catalog, &mut out)?,
        Commands::Value => commands::catalog::value(&catalog, &mut out)?,
        Commands::Add {
            code,
            name,
            price,
            quantity,
            category,
            description,
            image,
        } => {
            commands::catalog::add(
                &catalog,
                NewProduct {
                    code,
                    name,
                    description,
                    price,
                    quantity,
                    category,
                    image,
                },
                &mut out,
            )?;
        }
        Commands::Favorites { ids, toggle } => {
            commands::favorites::report(&catalog, &favorites, &ids, &toggle, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

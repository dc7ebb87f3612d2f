//! Online shop CLI - Main page preview and fixture inspection.
//!
//! # Usage
//!
//! ```bash
//! # Products for the main page, using configured categories
//! shop-cli main-page
//!
//! # Smartphones first, three per category
//! shop-cli main-page --categories notebook,smartphone --prefer smartphone --limit 3
//!
//! # Cart summaries for one customer
//! shop-cli --fixtures fixtures/catalog.yaml carts --customer 1
//!
//! # Validate fixtures and print record counts
//! shop-cli stats
//! ```
//!
//! # Commands
//!
//! - `main-page` - Print the newest products per category as JSON
//! - `carts` - Print cart summaries as JSON
//! - `stats` - Log fixture statistics
//!
//! Command output goes to stdout, logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use online_shop_core::CustomerId;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::main_page::MainPageOptions;
use config::{CliConfig, LogFormat, parse_limit};

#[derive(Parser)]
#[command(name = "shop-cli")]
#[command(author, version, about = "Online shop CLI tools")]
struct Cli {
    /// Fixture file to load (overrides `SHOP_FIXTURES`)
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the products shown on the main page
    MainPage {
        /// Category names in display order, comma-separated
        #[arg(short, long, value_delimiter = ',')]
        categories: Option<Vec<String>>,

        /// Category moved to the front of the list
        #[arg(short, long)]
        prefer: Option<String>,

        /// Products taken per category
        #[arg(short, long, value_parser = parse_limit)]
        limit: Option<usize>,
    },
    /// Print cart summaries
    Carts {
        /// Only carts owned by this customer id
        #[arg(short, long)]
        customer: Option<i32>,
    },
    /// Log fixture statistics
    Stats,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt().with_writer(std::io::stderr).init();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);

    if let Some(path) = cli.fixtures.clone() {
        config.fixtures = path;
    }

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing with `RUST_LOG` filtering, defaulting to info.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let json_layer = (format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (format == LogFormat::Pretty)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::MainPage {
            categories,
            prefer,
            limit,
        } => {
            let options = MainPageOptions::resolve(config, categories, prefer, limit);
            commands::main_page::run(config, &options).await?;
        }
        Commands::Carts { customer } => {
            commands::carts::run(config, customer.map(CustomerId::new)).await?;
        }
        Commands::Stats => commands::stats::run(config).await?,
    }
    Ok(())
}

//! CLI subcommands.
//!
//! Every command starts by loading the fixture file into a [`ShopData`].

pub mod carts;
pub mod main_page;
pub mod stats;

use std::path::{Path, PathBuf};

use online_shop_core::{FixtureError, ShopData, ShopFixture};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The fixture file could not be read.
    #[error("Cannot read fixture file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixture file is not valid YAML or does not match the schema.
    #[error("Cannot parse fixture file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The fixture parsed but describes an inconsistent shop.
    #[error("Invalid fixture: {0}")]
    Fixture(#[from] FixtureError),

    /// Output could not be encoded.
    #[error("Cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse and build a shop from YAML text.
///
/// # Errors
///
/// Returns `CommandError::Yaml` or `CommandError::Fixture`.
pub fn parse_shop(yaml: &str) -> Result<ShopData, CommandError> {
    let fixture: ShopFixture = serde_yaml::from_str(yaml)?;
    Ok(fixture.build()?)
}

/// Read the fixture file at `path` and build the shop it describes.
///
/// # Errors
///
/// Returns `CommandError` if the file cannot be read, parsed or validated.
pub async fn load_shop(path: &Path) -> Result<ShopData, CommandError> {
    info!(path = %path.display(), "Loading fixtures");

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CommandError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let shop = parse_shop(&content)?;

    info!(
        categories = shop.catalog.categories().len(),
        customers = shop.customers.len(),
        carts = shop.carts.len(),
        "Fixtures loaded"
    );
    Ok(shop)
}

/// Write `value` to stdout as pretty-printed JSON.
///
/// # Errors
///
/// Returns `CommandError::Json` if encoding fails.
pub fn print_json(value: &impl serde::Serialize) -> Result<(), CommandError> {
    let json = serde_json::to_string_pretty(value)?;
    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }
    Ok(())
}

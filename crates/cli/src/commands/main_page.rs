//! Main page preview.
//!
//! # Usage
//!
//! ```bash
//! # Newest notebooks and smartphones, smartphones first
//! shop-cli main-page --categories notebook,smartphone --prefer smartphone
//! ```

use online_shop_core::{LatestProductsManager, Product, ShopData};
use tracing::info;

use super::{CommandError, load_shop, print_json};
use crate::config::CliConfig;

/// Options for the main page command, resolved from flags and config.
#[derive(Debug, Clone)]
pub struct MainPageOptions {
    pub categories: Vec<String>,
    pub preferred: Option<String>,
    pub limit: usize,
}

impl MainPageOptions {
    /// Merge command-line flags over configured defaults.
    #[must_use]
    pub fn resolve(
        config: &CliConfig,
        categories: Option<Vec<String>>,
        preferred: Option<String>,
        limit: Option<usize>,
    ) -> Self {
        Self {
            categories: categories.unwrap_or_else(|| config.main_page_categories.clone()),
            preferred: preferred.or_else(|| config.preferred_category.clone()),
            limit: limit.unwrap_or(config.main_page_limit),
        }
    }
}

/// The products the main page would show.
#[must_use]
pub fn collect(shop: &ShopData, options: &MainPageOptions) -> Vec<Product> {
    LatestProductsManager::new(&shop.catalog)
        .with_limit(options.limit)
        .get_products_for_main_page(&options.categories, options.preferred.as_deref())
}

/// Load the fixtures and print the main page products as JSON.
///
/// # Errors
///
/// Returns `CommandError` if the fixtures cannot be loaded or the output
/// cannot be encoded.
pub async fn run(config: &CliConfig, options: &MainPageOptions) -> Result<(), CommandError> {
    let shop = load_shop(&config.fixtures).await?;
    let products = collect(&shop, options);

    info!(
        categories = ?options.categories,
        preferred = ?options.preferred,
        count = products.len(),
        "Main page products"
    );
    print_json(&products)
}

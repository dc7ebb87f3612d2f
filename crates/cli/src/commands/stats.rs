//! Fixture statistics.
//!
//! Loading the fixtures validates them, so this doubles as a fixture check:
//!
//! ```bash
//! SHOP_FIXTURES=fixtures/catalog.yaml shop-cli stats
//! ```

use online_shop_core::{ProductKind, ShopData};
use tracing::info;

use super::{CommandError, load_shop};
use crate::config::CliConfig;

/// Record counts of a loaded shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopStats {
    pub categories: usize,
    /// Products per kind, in registration order.
    pub products: Vec<(ProductKind, usize)>,
    pub customers: usize,
    pub carts: usize,
    pub cart_lines: usize,
    pub specifications: usize,
}

impl ShopStats {
    #[must_use]
    pub fn of(shop: &ShopData) -> Self {
        Self {
            categories: shop.catalog.categories().len(),
            products: ProductKind::ALL
                .into_iter()
                .map(|kind| (kind, shop.catalog.count(kind)))
                .collect(),
            customers: shop.customers.len(),
            carts: shop.carts.len(),
            cart_lines: shop.carts.iter().map(|cart| cart.products().len()).sum(),
            specifications: shop.specifications.len(),
        }
    }
}

/// Load the fixtures and log their statistics.
///
/// # Errors
///
/// Returns `CommandError` if the fixtures cannot be loaded.
pub async fn run(config: &CliConfig) -> Result<(), CommandError> {
    let shop = load_shop(&config.fixtures).await?;
    let stats = ShopStats::of(&shop);

    info!("Shop Statistics");
    info!("===============");
    info!("Categories: {}", stats.categories);
    info!("Products:");
    for (kind, count) in &stats.products {
        info!("  {kind}: {count}");
    }
    info!("Customers: {}", stats.customers);
    info!("Carts: {} ({} lines)", stats.carts, stats.cart_lines);
    info!("Specifications: {}", stats.specifications);

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::parse_shop;
    use crate::commands::tests::SHOP_YAML;

    #[test]
    fn test_stats_of_test_shop() {
        let stats = ShopStats::of(&parse_shop(SHOP_YAML).unwrap());
        assert_eq!(
            stats,
            ShopStats {
                categories: 2,
                products: vec![(ProductKind::Notebook, 2), (ProductKind::Smartphone, 1)],
                customers: 1,
                carts: 1,
                cart_lines: 2,
                specifications: 0,
            }
        );
    }
}

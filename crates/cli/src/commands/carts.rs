//! Cart summaries.
//!
//! # Usage
//!
//! ```bash
//! # All carts
//! shop-cli carts
//!
//! # Carts of one customer
//! shop-cli carts --customer 1
//! ```

use online_shop_core::{Cart, CartId, CustomerId, Price, ShopData};
use serde::Serialize;
use tracing::warn;

use super::{CommandError, load_shop, print_json};
use crate::config::CliConfig;

/// A cart as printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct CartSummary {
    pub cart: CartId,
    /// Display form of the owner, e.g. "Customer: Anna Kovalenko"
    pub customer: String,
    pub lines: Vec<LineSummary>,
    pub total_products: u32,
    pub final_price: Price,
}

/// One cart line as printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct LineSummary {
    pub label: String,
    pub qty: u32,
    pub unit_price: Price,
    pub final_price: Price,
}

fn summarize(shop: &ShopData, cart: &Cart) -> CartSummary {
    let customer = shop.customer(cart.owner()).map_or_else(
        || format!("Customer #{}", cart.owner()),
        ToString::to_string,
    );

    CartSummary {
        cart: cart.id(),
        customer,
        lines: cart
            .products()
            .iter()
            .map(|line| LineSummary {
                label: line.label(&shop.catalog),
                qty: line.qty().get(),
                unit_price: line.unit_price(),
                final_price: line.final_price(),
            })
            .collect(),
        total_products: cart.total_products(),
        final_price: cart.final_price(),
    }
}

/// Summaries of every cart, or only those owned by `customer`.
#[must_use]
pub fn collect(shop: &ShopData, customer: Option<CustomerId>) -> Vec<CartSummary> {
    shop.carts
        .iter()
        .filter(|cart| customer.is_none_or(|id| cart.owner() == id))
        .map(|cart| summarize(shop, cart))
        .collect()
}

/// Load the fixtures and print cart summaries as JSON.
///
/// # Errors
///
/// Returns `CommandError` if the fixtures cannot be loaded or the output
/// cannot be encoded.
pub async fn run(config: &CliConfig, customer: Option<CustomerId>) -> Result<(), CommandError> {
    let shop = load_shop(&config.fixtures).await?;

    if let Some(id) = customer
        && shop.customer(id).is_none()
    {
        warn!(customer = %id, "Customer not found in fixtures");
    }

    print_json(&collect(&shop, customer))
}

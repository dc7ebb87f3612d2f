//! Integration tests for the online shop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p online-shop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `main_page` - Main page aggregation over the demo fixtures
//! - `carts` - Cart maintenance against the demo catalog
//!
//! Tests load `fixtures/catalog.yaml` from the workspace root through
//! [`demo_shop`].

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use online_shop_core::{ShopData, ShopFixture};

/// Path to the demo fixture file shipped with the workspace.
#[must_use]
pub fn demo_fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/catalog.yaml")
}

/// Parse and build a shop from YAML text.
///
/// # Panics
///
/// Panics if the YAML is malformed or describes an inconsistent shop.
#[must_use]
pub fn shop_from_yaml(yaml: &str) -> ShopData {
    let fixture: ShopFixture =
        serde_yaml::from_str(yaml).unwrap_or_else(|e| panic!("fixture YAML: {e}"));
    fixture
        .build()
        .unwrap_or_else(|e| panic!("fixture contents: {e}"))
}

/// The demo shop from `fixtures/catalog.yaml`.
///
/// # Panics
///
/// Panics if the file cannot be read or built.
#[must_use]
pub fn demo_shop() -> ShopData {
    let path = demo_fixture_path();
    let yaml = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("reading {}: {e}", path.display()));
    shop_from_yaml(&yaml)
}

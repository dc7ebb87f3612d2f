//! Integration tests for main page aggregation.
//!
//! These run the aggregator over the demo fixtures shipped in
//! `fixtures/catalog.yaml`: seven notebooks created January to July and
//! three smartphones created August to October.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use online_shop_core::{
    LatestProductsManager, Product, ProductKind, ProductRecord, ProductSource,
};
use online_shop_integration_tests::demo_shop;

fn titles(products: &[Product]) -> Vec<&str> {
    products.iter().map(ProductRecord::title).collect()
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn test_preferred_category_comes_first() {
    let shop = demo_shop();
    let products = LatestProductsManager::new(&shop.catalog)
        .get_products_for_main_page(&["notebook", "smartphone"], Some("smartphone"));

    assert_eq!(
        titles(&products),
        vec![
            "iPhone 15",
            "Pixel 8",
            "Samsung Galaxy A54",
            "MacBook Air 13",
            "ThinkPad X1 Carbon",
            "ASUS ZenBook 14",
            "Dell XPS 13",
            "HP Pavilion 14",
        ]
    );
}

#[test]
fn test_requested_order_without_preference() {
    let shop = demo_shop();
    let products = LatestProductsManager::new(&shop.catalog)
        .get_products_for_main_page(&["smartphone", "notebook"], None);

    let kinds: Vec<ProductKind> = products.iter().map(ProductRecord::kind).collect();
    assert_eq!(kinds[..3], [ProductKind::Smartphone; 3]);
    assert_eq!(kinds[3..], [ProductKind::Notebook; 5]);
}

#[test]
fn test_preference_outside_request_is_ignored() {
    let shop = demo_shop();
    let manager = LatestProductsManager::new(&shop.catalog);

    let plain = manager.get_products_for_main_page(&["notebook"], None);
    let preferred = manager.get_products_for_main_page(&["notebook"], Some("smartphone"));
    assert_eq!(plain, preferred);
}

#[test]
fn test_category_names_are_case_insensitive() {
    let shop = demo_shop();
    let manager = LatestProductsManager::new(&shop.catalog);

    assert_eq!(
        manager.get_products_for_main_page(&["Notebook", " SMARTPHONE "], Some("SmartPhone")),
        manager.get_products_for_main_page(&["notebook", "smartphone"], Some("smartphone")),
    );
}

// =============================================================================
// Filtering and Limits
// =============================================================================

#[test]
fn test_unknown_categories_are_skipped() {
    let shop = demo_shop();
    let products = LatestProductsManager::new(&shop.catalog)
        .get_products_for_main_page(&["tablet", "smartphone", "watch"], None);

    assert_eq!(
        titles(&products),
        vec!["iPhone 15", "Pixel 8", "Samsung Galaxy A54"]
    );
}

#[test]
fn test_empty_request_returns_nothing() {
    let shop = demo_shop();
    let names: [&str; 0] = [];
    assert!(
        LatestProductsManager::new(&shop.catalog)
            .get_products_for_main_page(&names, Some("notebook"))
            .is_empty()
    );
}

#[test]
fn test_duplicate_names_count_once() {
    let shop = demo_shop();
    let products = LatestProductsManager::new(&shop.catalog)
        .get_products_for_main_page(&["smartphone", "smartphone"], None);
    assert_eq!(products.len(), 3);
}

#[test]
fn test_custom_limit_bounds_each_category() {
    let shop = demo_shop();
    for limit in 1..=8 {
        let products = LatestProductsManager::new(&shop.catalog)
            .with_limit(limit)
            .get_products_for_main_page(&["notebook", "smartphone"], None);

        let notebooks = products
            .iter()
            .filter(|p| p.kind() == ProductKind::Notebook)
            .count();
        let smartphones = products.len() - notebooks;
        assert_eq!(notebooks, limit.min(7), "limit {limit}");
        assert_eq!(smartphones, limit.min(3), "limit {limit}");
    }
}

#[test]
fn test_each_category_is_newest_first() {
    let shop = demo_shop();
    for kind in ProductKind::ALL {
        let latest = shop.catalog.latest(kind, usize::MAX);
        assert!(
            latest
                .windows(2)
                .all(|pair| pair[0].created_at() >= pair[1].created_at())
        );
    }
}

#[test]
fn test_main_page_serializes_with_kind_tag() {
    let shop = demo_shop();
    let products = LatestProductsManager::new(&shop.catalog)
        .with_limit(1)
        .get_products_for_main_page(&["smartphone"], None);

    let value = serde_json::to_value(&products).unwrap();
    assert_eq!(value[0]["kind"], "smartphone");
    assert_eq!(value[0]["title"], "iPhone 15");
    assert_eq!(value[0]["price"], "899.00");
}

//! Integration tests for carts built from the demo fixtures.

#![allow(clippy::unwrap_used)]

use core::num::NonZeroU32;

use online_shop_core::{
    CartError, CustomerId, FixtureError, ObjectRef, ProductId, ProductKind, ProductLookup,
    ShopFixture,
};
use online_shop_integration_tests::{demo_shop, shop_from_yaml};

fn object(kind: ProductKind, id: i32) -> ObjectRef {
    ObjectRef::new(kind, ProductId::new(id))
}

// =============================================================================
// Loaded Carts
// =============================================================================

#[test]
fn test_demo_carts_totals() {
    let shop = demo_shop();
    let anna = CustomerId::new(1);

    let cart = shop.carts_of(anna).next().unwrap();
    assert_eq!(cart.total_products(), 2);
    assert_eq!(cart.final_price().to_string(), "3297.50");

    let line = cart.line(object(ProductKind::Notebook, 7)).unwrap();
    assert_eq!(line.qty().get(), 2);
    assert_eq!(line.final_price().to_string(), "2598.00");
    assert_eq!(
        line.label(&shop.catalog),
        "Product: MacBook Air 13 (for cart)"
    );
}

#[test]
fn test_demo_customers_and_specifications() {
    let shop = demo_shop();

    let ivan = shop.customer(CustomerId::new(2)).unwrap();
    assert_eq!(ivan.to_string(), "Customer: Ivan Petrov");

    let specs: Vec<String> = shop
        .specifications_for(object(ProductKind::Smartphone, 2))
        .map(ToString::to_string)
        .collect();
    assert_eq!(specs, vec!["Specifications for product: Pixel 8"]);
}

// =============================================================================
// Cart Maintenance
// =============================================================================

#[test]
fn test_cart_maintenance_keeps_totals_consistent() {
    let shop = demo_shop();
    let ivan = CustomerId::new(2);
    let mut cart = shop.carts_of(ivan).next().unwrap().clone();
    assert_eq!(cart.final_price().to_string(), "2697.00");

    let notebook = shop
        .catalog
        .resolve(object(ProductKind::Notebook, 1))
        .unwrap();
    assert!(cart.add_product(ivan, &notebook).unwrap());
    assert!(!cart.add_product(ivan, &notebook).unwrap());
    assert_eq!(cart.total_products(), 2);
    assert_eq!(cart.final_price().to_string(), "3246.00");

    let iphone = object(ProductKind::Smartphone, 3);
    cart.set_quantity(iphone, NonZeroU32::MIN).unwrap();
    assert_eq!(cart.final_price().to_string(), "1448.00");

    let removed = cart.remove_product(iphone).unwrap();
    assert_eq!(removed.content_object(), iphone);
    assert_eq!(cart.total_products(), 1);
    assert_eq!(cart.final_price().to_string(), "549.00");
}

#[test]
fn test_cart_rejects_other_customers() {
    let shop = demo_shop();
    let mut cart = shop.carts_of(CustomerId::new(1)).next().unwrap().clone();
    let phone = shop
        .catalog
        .resolve(object(ProductKind::Smartphone, 1))
        .unwrap();

    let err = cart.add_product(CustomerId::new(2), &phone).unwrap_err();
    assert!(matches!(err, CartError::OwnerMismatch { .. }));
    assert_eq!(cart.total_products(), 2);
}

// =============================================================================
// Fixture Validation
// =============================================================================

#[test]
fn test_fixture_with_dangling_cart_line_is_rejected() {
    let fixture: ShopFixture = serde_yaml::from_str(
        r"
customers:
  - id: 1
    user: { id: 1, username: anna }
    phone: '+375291112233'
    address: Minsk
carts:
  - id: 1
    owner: 1
    lines:
      - { kind: notebook, id: 42 }
",
    )
    .unwrap();

    let err = fixture.build().unwrap_err();
    assert_eq!(
        err,
        FixtureError::DanglingReference {
            owner: "cart 1".to_string(),
            object: object(ProductKind::Notebook, 42),
        }
    );
}

#[test]
fn test_empty_fixture_builds_empty_shop() {
    let shop = shop_from_yaml("{}");
    assert!(shop.catalog.categories().is_empty());
    assert!(shop.carts.is_empty());
}

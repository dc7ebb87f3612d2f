//! Building a populated shop from a fixture document.
//!
//! A [`ShopFixture`] is plain serde data, so callers can load it from any
//! format (the CLI uses YAML). [`ShopFixture::build`] runs every record
//! through the same validation the catalog and carts apply at runtime and
//! checks that all polymorphic references resolve.
//!
//! ```yaml
//! categories:
//!   - { id: 1, name: Notebooks, slug: notebooks }
//! notebooks:
//!   - id: 1
//!     category: 1
//!     title: ThinkPad X1
//!     slug: thinkpad-x1
//!     image: notebooks/x1.png
//!     price: "1899.00"
//!     created_at: "2024-05-01T10:00:00Z"
//!     diagonal: '14"'
//!     display_type: IPS
//!     processor_freq: 4.2 GHz
//!     ram: 16 GB
//!     video: Intel Iris Xe
//!     time_without_charge: 12 h
//! carts:
//!   - id: 1
//!     owner: 1
//!     lines:
//!       - { kind: notebook, id: 1, qty: 2 }
//! ```

use core::num::NonZeroU32;
use std::collections::HashSet;

use serde::Deserialize;

use crate::catalog::{CatalogError, InMemoryCatalog, ProductLookup};
use crate::content_type::{ObjectRef, ProductKind};
use crate::models::{
    Cart, CartError, Category, Customer, ModelError, Notebook, Smartphone, Specifications,
};
use crate::types::{CartId, CustomerId, ProductId, SpecificationsId};

/// Errors raised while building a shop from a fixture.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// A category or product could not be added to the catalog.
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),
    /// A cart line could not be applied.
    #[error("cart: {0}")]
    Cart(#[from] CartError),
    /// A customer or specifications record failed validation.
    #[error("invalid record: {0}")]
    Invalid(#[from] ModelError),
    /// Two customers share an id.
    #[error("customer {0} is defined twice")]
    DuplicateCustomer(CustomerId),
    /// Two carts share an id.
    #[error("cart {0} is defined twice")]
    DuplicateCart(CartId),
    /// Two specification sheets share an id.
    #[error("specifications {0} is defined twice")]
    DuplicateSpecifications(SpecificationsId),
    /// A cart lists the same product on two lines.
    #[error("cart {cart} lists {object} twice")]
    DuplicateCartLine { cart: CartId, object: ObjectRef },
    /// A cart belongs to a customer that is not in the fixture.
    #[error("cart {cart} belongs to unknown customer {customer}")]
    UnknownCustomer { cart: CartId, customer: CustomerId },
    /// A polymorphic reference points at a missing product.
    #[error("{owner} references missing product {object}")]
    DanglingReference { owner: String, object: ObjectRef },
}

/// Raw shop contents as found in a fixture document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShopFixture {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub notebooks: Vec<Notebook>,
    #[serde(default)]
    pub smartphones: Vec<Smartphone>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub carts: Vec<CartFixture>,
    #[serde(default)]
    pub specifications: Vec<Specifications>,
}

/// A cart and the products in it.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartFixture {
    pub id: CartId,
    pub owner: CustomerId,
    #[serde(default)]
    pub lines: Vec<CartLineFixture>,
}

/// One cart line, addressed by product kind and id.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartLineFixture {
    pub kind: ProductKind,
    pub id: ProductId,
    #[serde(default = "default_qty")]
    pub qty: NonZeroU32,
}

const fn default_qty() -> NonZeroU32 {
    NonZeroU32::MIN
}

/// A validated, populated shop.
#[derive(Debug, Clone, Default)]
pub struct ShopData {
    pub catalog: InMemoryCatalog,
    pub customers: Vec<Customer>,
    pub carts: Vec<Cart>,
    pub specifications: Vec<Specifications>,
}

impl ShopData {
    #[must_use]
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    /// Carts owned by `customer`.
    ///
    /// Usually at most one, but nothing prevents a customer from owning
    /// several.
    pub fn carts_of(&self, customer: CustomerId) -> impl Iterator<Item = &Cart> {
        self.carts.iter().filter(move |cart| cart.owner() == customer)
    }

    /// Specification sheets attached to `object`.
    pub fn specifications_for(&self, object: ObjectRef) -> impl Iterator<Item = &Specifications> {
        self.specifications
            .iter()
            .filter(move |specs| specs.content_object == object)
    }
}

impl ShopFixture {
    /// Validate the fixture and build the shop it describes.
    ///
    /// Records are added in dependency order: categories, products,
    /// customers, carts, specifications.
    ///
    /// # Errors
    ///
    /// Returns the first `FixtureError` encountered.
    pub fn build(self) -> Result<ShopData, FixtureError> {
        let mut catalog = InMemoryCatalog::new();
        for category in self.categories {
            catalog.add_category(category)?;
        }
        for notebook in self.notebooks {
            catalog.add_notebook(notebook)?;
        }
        for smartphone in self.smartphones {
            catalog.add_smartphone(smartphone)?;
        }

        let mut customer_ids = HashSet::new();
        for customer in &self.customers {
            customer.validate()?;
            if !customer_ids.insert(customer.id) {
                return Err(FixtureError::DuplicateCustomer(customer.id));
            }
        }

        let mut carts = Vec::with_capacity(self.carts.len());
        let mut cart_ids = HashSet::new();
        for fixture in self.carts {
            if !cart_ids.insert(fixture.id) {
                return Err(FixtureError::DuplicateCart(fixture.id));
            }
            if !customer_ids.contains(&fixture.owner) {
                return Err(FixtureError::UnknownCustomer {
                    cart: fixture.id,
                    customer: fixture.owner,
                });
            }
            carts.push(build_cart(&catalog, fixture)?);
        }

        let mut specification_ids = HashSet::new();
        for specs in &self.specifications {
            specs.validate()?;
            if !specification_ids.insert(specs.id) {
                return Err(FixtureError::DuplicateSpecifications(specs.id));
            }
            if catalog.resolve(specs.content_object).is_none() {
                return Err(FixtureError::DanglingReference {
                    owner: format!("specifications {}", specs.id),
                    object: specs.content_object,
                });
            }
        }

        tracing::debug!(
            categories = catalog.categories().len(),
            notebooks = catalog.count(ProductKind::Notebook),
            smartphones = catalog.count(ProductKind::Smartphone),
            customers = self.customers.len(),
            carts = carts.len(),
            "Built shop from fixture"
        );

        Ok(ShopData {
            catalog,
            customers: self.customers,
            carts,
            specifications: self.specifications,
        })
    }
}

fn build_cart(catalog: &InMemoryCatalog, fixture: CartFixture) -> Result<Cart, FixtureError> {
    let mut cart = Cart::new(fixture.id, fixture.owner);
    for line in fixture.lines {
        let object = ObjectRef::new(line.kind, line.id);
        let product = catalog
            .resolve(object)
            .ok_or_else(|| FixtureError::DanglingReference {
                owner: format!("cart {}", fixture.id),
                object,
            })?;
        if !cart.add_product(fixture.owner, &product)? {
            return Err(FixtureError::DuplicateCartLine {
                cart: fixture.id,
                object,
            });
        }
        cart.set_quantity(object, line.qty)?;
    }
    Ok(cart)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::catalog::ProductSource;

    const FIXTURE: &str = r#"{
        "categories": [
            {"id": 1, "name": "Notebooks", "slug": "notebooks"},
            {"id": 2, "name": "Smartphones", "slug": "smartphones"}
        ],
        "notebooks": [{
            "id": 1, "category": 1, "title": "ThinkPad X1", "slug": "thinkpad-x1",
            "image": "x1.png", "price": "1899.00", "created_at": "2024-05-01T10:00:00Z",
            "diagonal": "14\"", "display_type": "IPS", "processor_freq": "4.2 GHz",
            "ram": "16 GB", "video": "Iris Xe", "time_without_charge": "12 h"
        }],
        "smartphones": [{
            "id": 1, "category": 2, "title": "Pixel 8", "slug": "pixel-8",
            "image": "pixel.png", "price": "699.50", "created_at": "2024-05-02T10:00:00Z",
            "diagonal": "6.2\"", "display_type": "OLED", "resolution": "2400x1080",
            "accum_volume": "4575 mAh", "ram": "8 GB", "main_cam_mp": "50 MP",
            "frontal_cam_mp": "10.5 MP"
        }],
        "customers": [{
            "id": 1,
            "user": {"id": 1, "username": "anna", "first_name": "Anna", "last_name": "K"},
            "phone": "+375291112233",
            "address": "Minsk"
        }],
        "carts": [{
            "id": 1, "owner": 1,
            "lines": [
                {"kind": "notebook", "id": 1, "qty": 2},
                {"kind": "smartphone", "id": 1}
            ]
        }],
        "specifications": [
            {"id": 1, "content_object": {"kind": "smartphone", "id": 1}, "name": "Pixel 8"}
        ]
    }"#;

    fn fixture() -> ShopFixture {
        serde_json::from_str(FIXTURE).unwrap()
    }

    #[test]
    fn test_build_populates_shop() {
        let shop = fixture().build().unwrap();

        assert_eq!(shop.catalog.categories().len(), 2);
        assert_eq!(shop.catalog.latest(ProductKind::Smartphone, 5).len(), 1);
        assert_eq!(
            shop.customer(CustomerId::new(1)).unwrap().to_string(),
            "Customer: Anna K"
        );

        let cart = shop.carts_of(CustomerId::new(1)).next().unwrap();
        assert_eq!(cart.total_products(), 2);
        assert_eq!(cart.final_price().to_string(), "4497.50");

        let pixel = ObjectRef::new(ProductKind::Smartphone, ProductId::new(1));
        assert_eq!(shop.specifications_for(pixel).count(), 1);
        assert!(!shop.catalog.categories().is_empty());
    }

    #[test]
    fn test_build_rejects_dangling_cart_line() {
        let mut fixture = fixture();
        fixture.carts[0].lines[0].id = ProductId::new(99);
        assert!(matches!(
            fixture.build(),
            Err(FixtureError::DanglingReference { .. })
        ));
    }

    #[test]
    fn test_build_rejects_dangling_specifications() {
        let mut fixture = fixture();
        fixture.specifications[0].content_object =
            ObjectRef::new(ProductKind::Notebook, ProductId::new(7));
        let err = fixture.build().unwrap_err();
        assert_eq!(
            err.to_string(),
            "specifications 1 references missing product notebook#7"
        );
    }

    #[test]
    fn test_build_rejects_cart_of_unknown_customer() {
        let mut fixture = fixture();
        fixture.carts[0].owner = CustomerId::new(5);
        assert!(matches!(
            fixture.build(),
            Err(FixtureError::UnknownCustomer { .. })
        ));
    }

    #[test]
    fn test_build_rejects_duplicate_customer() {
        let mut fixture = fixture();
        let again = fixture.customers[0].clone();
        fixture.customers.push(again);
        assert_eq!(
            fixture.build().unwrap_err(),
            FixtureError::DuplicateCustomer(CustomerId::new(1))
        );
    }

    #[test]
    fn test_build_rejects_repeated_cart_line() {
        let mut fixture = fixture();
        fixture.carts[0].lines.push(CartLineFixture {
            kind: ProductKind::Notebook,
            id: ProductId::new(1),
            qty: NonZeroU32::new(5).unwrap(),
        });
        assert_eq!(
            fixture.build().unwrap_err(),
            FixtureError::DuplicateCartLine {
                cart: CartId::new(1),
                object: ObjectRef::new(ProductKind::Notebook, ProductId::new(1)),
            }
        );
    }

    #[test]
    fn test_build_rejects_duplicate_specifications() {
        let mut fixture = fixture();
        let again = fixture.specifications[0].clone();
        fixture.specifications.push(again);
        assert_eq!(
            fixture.build().unwrap_err(),
            FixtureError::DuplicateSpecifications(SpecificationsId::new(1))
        );
    }

    #[test]
    fn test_build_rejects_product_in_unknown_category() {
        let mut fixture = fixture();
        fixture.categories.truncate(1);
        assert!(matches!(
            fixture.build(),
            Err(FixtureError::Catalog(CatalogError::UnknownCategory(_)))
        ));
    }

    #[test]
    fn test_unknown_top_level_field_rejected() {
        assert!(serde_json::from_str::<ShopFixture>(r#"{"orders": []}"#).is_err());
    }

    #[test]
    fn test_empty_fixture_builds_empty_shop() {
        let shop = ShopFixture::default().build().unwrap();
        assert!(shop.catalog.categories().is_empty());
        assert!(shop.carts.is_empty());
    }
}

//! Shopping carts and their line items.
//!
//! A [`Cart`] owns its [`CartProduct`] lines and caches two derived values:
//! the number of lines and the total price. Both are recomputed on every
//! mutation, so the cached values always match the lines.

use core::fmt;
use core::num::NonZeroU32;

use serde::Serialize;

use super::product::ProductRecord;
use crate::catalog::ProductLookup;
use crate::content_type::ObjectRef;
use crate::types::{CartId, CartProductId, CustomerId, Price};

/// Errors from cart mutations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The line would belong to a different customer than the cart.
    #[error("customer {customer} cannot add products to cart {cart} owned by {owner}")]
    OwnerMismatch {
        cart: CartId,
        owner: CustomerId,
        customer: CustomerId,
    },
    /// The cart has no line for the referenced product.
    #[error("cart {cart} has no line for {object}")]
    LineNotFound { cart: CartId, object: ObjectRef },
}

/// One product placed in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartProduct {
    id: CartProductId,
    user: CustomerId,
    cart: CartId,
    content_object: ObjectRef,
    qty: NonZeroU32,
    /// Unit price captured when the product was added.
    unit_price: Price,
    final_price: Price,
}

impl CartProduct {
    fn new(id: CartProductId, cart: &Cart, product: &(impl ProductRecord + ?Sized)) -> Self {
        let unit_price = product.price();
        Self {
            id,
            user: cart.owner,
            cart: cart.id,
            content_object: product.object_ref(),
            qty: NonZeroU32::MIN,
            unit_price,
            final_price: unit_price,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CartProductId {
        self.id
    }

    /// The customer the line belongs to.
    #[must_use]
    pub const fn user(&self) -> CustomerId {
        self.user
    }

    #[must_use]
    pub const fn cart(&self) -> CartId {
        self.cart
    }

    /// Polymorphic reference to the product in this line.
    #[must_use]
    pub const fn content_object(&self) -> ObjectRef {
        self.content_object
    }

    #[must_use]
    pub const fn qty(&self) -> NonZeroU32 {
        self.qty
    }

    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Line total: unit price times quantity.
    #[must_use]
    pub const fn final_price(&self) -> Price {
        self.final_price
    }

    fn set_qty(&mut self, qty: NonZeroU32) {
        self.qty = qty;
        self.final_price = self.unit_price.times(qty.get());
    }

    /// Human-readable label naming the product in this line.
    ///
    /// Falls back to the raw reference when the product no longer resolves.
    #[must_use]
    pub fn label(&self, products: &(impl ProductLookup + ?Sized)) -> String {
        products.resolve(self.content_object).map_or_else(
            || format!("Product: {} (for cart)", self.content_object),
            |product| format!("Product: {} (for cart)", product.title()),
        )
    }
}

/// A customer's shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cart {
    id: CartId,
    owner: CustomerId,
    products: Vec<CartProduct>,
    total_products: u32,
    final_price: Price,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new(id: CartId, owner: CustomerId) -> Self {
        Self {
            id,
            owner,
            products: Vec::new(),
            total_products: 0,
            final_price: Price::ZERO,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CartId {
        self.id
    }

    #[must_use]
    pub const fn owner(&self) -> CustomerId {
        self.owner
    }

    /// Line items in the order they were added.
    #[must_use]
    pub fn products(&self) -> &[CartProduct] {
        &self.products
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub const fn total_products(&self) -> u32 {
        self.total_products
    }

    /// Sum of all line totals.
    #[must_use]
    pub const fn final_price(&self) -> Price {
        self.final_price
    }

    /// Find the line holding `object`.
    #[must_use]
    pub fn line(&self, object: ObjectRef) -> Option<&CartProduct> {
        self.products
            .iter()
            .find(|line| line.content_object == object)
    }

    /// Put `product` in the cart on behalf of `customer`.
    ///
    /// A product already in the cart keeps its existing line untouched.
    /// Returns `true` when a new line was created.
    ///
    /// # Errors
    ///
    /// Returns `CartError::OwnerMismatch` if `customer` does not own the cart.
    pub fn add_product(
        &mut self,
        customer: CustomerId,
        product: &(impl ProductRecord + ?Sized),
    ) -> Result<bool, CartError> {
        if customer != self.owner {
            return Err(CartError::OwnerMismatch {
                cart: self.id,
                owner: self.owner,
                customer,
            });
        }

        if self.line(product.object_ref()).is_some() {
            return Ok(false);
        }

        let line = CartProduct::new(self.next_line_id(), self, product);
        tracing::debug!(cart = %self.id, object = %line.content_object, "Added cart line");
        self.products.push(line);
        self.recalc();
        Ok(true)
    }

    /// Change the quantity of the line holding `object`.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` if the cart has no such line.
    pub fn set_quantity(&mut self, object: ObjectRef, qty: NonZeroU32) -> Result<(), CartError> {
        let cart = self.id;
        let line = self
            .products
            .iter_mut()
            .find(|line| line.content_object == object)
            .ok_or(CartError::LineNotFound { cart, object })?;
        line.set_qty(qty);
        self.recalc();
        Ok(())
    }

    /// Remove the line holding `object` and return it.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` if the cart has no such line.
    pub fn remove_product(&mut self, object: ObjectRef) -> Result<CartProduct, CartError> {
        let index = self
            .products
            .iter()
            .position(|line| line.content_object == object)
            .ok_or(CartError::LineNotFound {
                cart: self.id,
                object,
            })?;
        let line = self.products.remove(index);
        self.recalc();
        Ok(line)
    }

    /// Line ids are numbered within the cart, starting at 1.
    fn next_line_id(&self) -> CartProductId {
        let last = self
            .products
            .iter()
            .map(|line| line.id.as_i32())
            .max()
            .unwrap_or(0);
        CartProductId::new(last + 1)
    }

    fn recalc(&mut self) {
        self.total_products = u32::try_from(self.products.len()).unwrap_or(u32::MAX);
        self.final_price = self.products.iter().map(CartProduct::final_price).sum();
    }
}

impl fmt::Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

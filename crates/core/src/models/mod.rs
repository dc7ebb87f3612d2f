//! Record definitions for the catalog, carts and customers.
//!
//! These are plain data containers. Beyond identity and display formatting
//! the only behavior lives in [`Cart`], which keeps its cached totals in
//! step with its line items.

pub mod cart;
pub mod category;
pub mod customer;
pub mod product;
pub mod specifications;

pub use cart::{Cart, CartError, CartProduct};
pub use category::Category;
pub use customer::{Customer, UserAccount};
pub use product::{Notebook, Product, ProductBase, ProductRecord, Smartphone};
pub use specifications::Specifications;

/// Maximum length of the free-text name and title columns.
pub const MAX_TEXT_LENGTH: usize = 255;

/// Validation errors for record fields.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A required text field is blank.
    #[error("{field} cannot be empty")]
    Empty {
        /// Field name.
        field: &'static str,
    },
    /// A text field exceeds its column length.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Field name.
        field: &'static str,
        /// Maximum allowed length.
        max: usize,
    },
}

/// Check a required, length-limited text field.
pub(crate) fn check_text(field: &'static str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ModelError::TooLong { field, max });
    }
    Ok(())
}

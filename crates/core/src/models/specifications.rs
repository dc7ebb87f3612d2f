//! Named characteristic sheets attached to products.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{MAX_TEXT_LENGTH, ModelError, check_text};
use crate::content_type::ObjectRef;
use crate::types::SpecificationsId;

/// Labels the characteristic set of one product-like record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specifications {
    pub id: SpecificationsId,
    /// The product the sheet describes.
    pub content_object: ObjectRef,
    pub name: String,
}

impl Specifications {
    /// Check field constraints.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if the name is blank or longer than 255 characters.
    pub fn validate(&self) -> Result<(), ModelError> {
        check_text("specifications name", &self.name, MAX_TEXT_LENGTH)
    }
}

impl fmt::Display for Specifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Specifications for product: {}", self.name)
    }
}

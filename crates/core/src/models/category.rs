//! Product categories.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{MAX_TEXT_LENGTH, ModelError, check_text};
use crate::types::{CategoryId, Slug};

/// A named grouping of product-like records, e.g. "Notebooks".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Unique URL segment, e.g. `notebooks`.
    pub slug: Slug,
}

impl Category {
    /// Create a validated category.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if the name is blank or longer than 255 characters.
    pub fn new(id: CategoryId, name: impl Into<String>, slug: Slug) -> Result<Self, ModelError> {
        let category = Self {
            id,
            name: name.into(),
            slug,
        };
        category.validate()?;
        Ok(category)
    }

    /// Check field constraints.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if the name is blank or longer than 255 characters.
    pub fn validate(&self) -> Result<(), ModelError> {
        check_text("category name", &self.name, MAX_TEXT_LENGTH)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

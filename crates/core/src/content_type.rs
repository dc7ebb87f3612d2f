//! Content types and polymorphic record references.
//!
//! A cart line or a specification sheet may point at any product-like
//! record. Instead of a typed foreign key it stores an [`ObjectRef`]: the
//! [`ProductKind`] tag naming the collection plus the row id inside it.
//! Resolution goes through [`ProductLookup`](crate::ProductLookup), which
//! matches on the tag.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Error returned when a category name does not match any product kind.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown product kind: {0}")]
pub struct UnknownProductKind(pub String);

/// The concrete product-like record types the catalog knows about.
///
/// Each variant owns its own record collection. The model name (`notebook`,
/// `smartphone`) is what the home page and fixtures use to refer to a
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Notebook,
    Smartphone,
}

impl ProductKind {
    /// Every registered kind, in registration order.
    pub const ALL: [Self; 2] = [Self::Notebook, Self::Smartphone];

    /// The model name used to address this kind's collection.
    #[must_use]
    pub const fn model_name(self) -> &'static str {
        match self {
            Self::Notebook => "notebook",
            Self::Smartphone => "smartphone",
        }
    }

    /// Resolve a model name to its kind.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Returns `None` for names that are not registered.
    #[must_use]
    pub fn from_model_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.model_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model_name())
    }
}

impl std::str::FromStr for ProductKind {
    type Err = UnknownProductKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_model_name(s).ok_or_else(|| UnknownProductKind(s.to_owned()))
    }
}

/// A reference to one product-like record of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectRef {
    /// Which collection the record lives in.
    pub kind: ProductKind,
    /// Row id within that collection.
    pub id: ProductId,
}

impl ObjectRef {
    /// Create a reference to record `id` of `kind`.
    #[must_use]
    pub const fn new(kind: ProductKind, id: ProductId) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}

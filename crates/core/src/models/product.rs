//! Product-like records.
//!
//! Every category has its own concrete record type with its own collection.
//! The fields all of them share live in [`ProductBase`]; [`ProductRecord`]
//! exposes them uniformly so code such as the home page aggregation can work
//! across kinds. [`Product`] is the owned, heterogeneous form handed to
//! renderers, which match on the variant to pick a layout.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MAX_TEXT_LENGTH, ModelError, check_text};
use crate::content_type::{ObjectRef, ProductKind};
use crate::types::{CategoryId, Price, ProductId, Slug};

/// Fields shared by every product-like record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductBase {
    /// Row id within the record's own collection.
    pub id: ProductId,
    /// Category the product is listed under.
    pub category: CategoryId,
    pub title: String,
    /// Unique within the collection.
    pub slug: Slug,
    /// Path or key of the product image in external storage.
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Price,
    /// Creation time; newest products are shown first.
    pub created_at: DateTime<Utc>,
}

impl ProductBase {
    /// Check field constraints.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if the title is blank or longer than 255
    /// characters, or if the image reference is blank.
    pub fn validate(&self) -> Result<(), ModelError> {
        check_text("product title", &self.title, MAX_TEXT_LENGTH)?;
        check_text("product image", &self.image, MAX_TEXT_LENGTH)
    }
}

/// Uniform access to the shared product fields.
pub trait ProductRecord {
    /// The collection this record belongs to.
    fn kind(&self) -> ProductKind;

    /// The shared fields.
    fn base(&self) -> &ProductBase;

    fn id(&self) -> ProductId {
        self.base().id
    }

    fn category(&self) -> CategoryId {
        self.base().category
    }

    fn title(&self) -> &str {
        &self.base().title
    }

    fn slug(&self) -> &Slug {
        &self.base().slug
    }

    fn image(&self) -> &str {
        &self.base().image
    }

    fn description(&self) -> Option<&str> {
        self.base().description.as_deref()
    }

    fn price(&self) -> Price {
        self.base().price
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.base().created_at
    }

    /// Polymorphic reference to this record.
    fn object_ref(&self) -> ObjectRef {
        ObjectRef::new(self.kind(), self.id())
    }
}

/// A laptop listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    #[serde(flatten)]
    pub base: ProductBase,
    /// Screen diagonal, e.g. `15.6"`.
    pub diagonal: String,
    pub display_type: String,
    pub processor_freq: String,
    pub ram: String,
    pub video: String,
    /// Battery life.
    pub time_without_charge: String,
}

/// A smartphone listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Smartphone {
    #[serde(flatten)]
    pub base: ProductBase,
    pub diagonal: String,
    pub display_type: String,
    pub resolution: String,
    /// Battery capacity.
    pub accum_volume: String,
    pub ram: String,
    /// Whether the phone takes a memory card.
    #[serde(default)]
    pub sd: bool,
    /// Largest supported memory card, when `sd` is set.
    #[serde(default)]
    pub sd_volume_max: Option<String>,
    pub main_cam_mp: String,
    pub frontal_cam_mp: String,
}

impl ProductRecord for Notebook {
    fn kind(&self) -> ProductKind {
        ProductKind::Notebook
    }

    fn base(&self) -> &ProductBase {
        &self.base
    }
}

impl ProductRecord for Smartphone {
    fn kind(&self) -> ProductKind {
        ProductKind::Smartphone
    }

    fn base(&self) -> &ProductBase {
        &self.base
    }
}

/// A product-like record of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Product {
    Notebook(Notebook),
    Smartphone(Smartphone),
}

impl ProductRecord for Product {
    fn kind(&self) -> ProductKind {
        match self {
            Self::Notebook(_) => ProductKind::Notebook,
            Self::Smartphone(_) => ProductKind::Smartphone,
        }
    }

    fn base(&self) -> &ProductBase {
        match self {
            Self::Notebook(notebook) => &notebook.base,
            Self::Smartphone(smartphone) => &smartphone.base,
        }
    }
}

impl From<Notebook> for Product {
    fn from(notebook: Notebook) -> Self {
        Self::Notebook(notebook)
    }
}

impl From<Smartphone> for Product {
    fn from(smartphone: Smartphone) -> Self {
        Self::Smartphone(smartphone)
    }
}

impl fmt::Display for ProductBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl fmt::Display for Notebook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

impl fmt::Display for Smartphone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.base, f)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.base(), f)
    }
}

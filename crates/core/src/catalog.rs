//! Product collections and the traits the rest of the shop reads them through.
//!
//! Storage is an external concern. The aggregation and cart code only need
//! two capabilities, expressed as traits:
//!
//! - [`ProductSource`] - newest records of one kind
//! - [`ProductLookup`] - resolve a polymorphic [`ObjectRef`]
//!
//! [`InMemoryCatalog`] implements both over one typed collection per
//! [`ProductKind`] and enforces the uniqueness rules a database would.

use std::cmp::Reverse;

use crate::content_type::{ObjectRef, ProductKind};
use crate::models::{Category, ModelError, Notebook, Product, ProductRecord, Smartphone};
use crate::types::{CategoryId, ProductId, Slug};

/// Errors raised when adding records to a catalog.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A field failed validation.
    #[error(transparent)]
    Invalid(#[from] ModelError),
    /// Another record in the same collection already uses the slug.
    #[error("{collection} with slug {slug} already exists")]
    DuplicateSlug {
        collection: &'static str,
        slug: Slug,
    },
    /// Another record in the same collection already uses the id.
    #[error("{collection} with id {id} already exists")]
    DuplicateId { collection: &'static str, id: i32 },
    /// The product points at a category that is not in the catalog.
    #[error("unknown category {0}")]
    UnknownCategory(CategoryId),
}

/// Read access to the newest records of each product kind.
pub trait ProductSource {
    /// Up to `limit` records of `kind`, most recently created first.
    fn latest(&self, kind: ProductKind, limit: usize) -> Vec<Product>;
}

/// Resolution of polymorphic product references.
pub trait ProductLookup {
    /// The record `object` points at, if it exists.
    fn resolve(&self, object: ObjectRef) -> Option<Product>;
}

/// Records of a single concrete product type.
#[derive(Debug, Clone)]
struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: ProductRecord> Collection<T> {
    fn insert(&mut self, collection: &'static str, record: T) -> Result<(), CatalogError> {
        record.base().validate()?;

        if self.get(record.id()).is_some() {
            return Err(CatalogError::DuplicateId {
                collection,
                id: record.id().as_i32(),
            });
        }
        if self.by_slug(record.slug()).is_some() {
            return Err(CatalogError::DuplicateSlug {
                collection,
                slug: record.slug().clone(),
            });
        }

        self.records.push(record);
        Ok(())
    }

    fn get(&self, id: ProductId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    fn by_slug(&self, slug: &Slug) -> Option<&T> {
        self.records.iter().find(|record| record.slug() == slug)
    }

    /// Newest first; records created at the same instant fall back to id order.
    fn latest(&self, limit: usize) -> Vec<&T> {
        let mut records: Vec<&T> = self.records.iter().collect();
        records.sort_by_key(|record| Reverse((record.created_at(), record.id())));
        records.truncate(limit);
        records
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

/// A catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    categories: Vec<Category>,
    notebooks: Collection<Notebook>,
    smartphones: Collection<Smartphone>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the category is invalid or its id or slug
    /// is already taken.
    pub fn add_category(&mut self, category: Category) -> Result<(), CatalogError> {
        category.validate()?;

        if self.category(category.id).is_some() {
            return Err(CatalogError::DuplicateId {
                collection: "category",
                id: category.id.as_i32(),
            });
        }
        if self.category_by_slug(&category.slug).is_some() {
            return Err(CatalogError::DuplicateSlug {
                collection: "category",
                slug: category.slug,
            });
        }

        self.categories.push(category);
        Ok(())
    }

    /// Add a notebook.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the record is invalid, its category is
    /// unknown, or its id or slug is already taken among notebooks.
    pub fn add_notebook(&mut self, notebook: Notebook) -> Result<(), CatalogError> {
        self.check_category(&notebook)?;
        self.notebooks
            .insert(ProductKind::Notebook.model_name(), notebook)
    }

    /// Add a smartphone.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the record is invalid, its category is
    /// unknown, or its id or slug is already taken among smartphones.
    pub fn add_smartphone(&mut self, smartphone: Smartphone) -> Result<(), CatalogError> {
        self.check_category(&smartphone)?;
        self.smartphones
            .insert(ProductKind::Smartphone.model_name(), smartphone)
    }

    /// Add a product of any kind.
    ///
    /// # Errors
    ///
    /// See [`InMemoryCatalog::add_notebook`] and
    /// [`InMemoryCatalog::add_smartphone`].
    pub fn add_product(&mut self, product: Product) -> Result<(), CatalogError> {
        match product {
            Product::Notebook(notebook) => self.add_notebook(notebook),
            Product::Smartphone(smartphone) => self.add_smartphone(smartphone),
        }
    }

    fn check_category(&self, product: &impl ProductRecord) -> Result<(), CatalogError> {
        if self.category(product.category()).is_none() {
            return Err(CatalogError::UnknownCategory(product.category()));
        }
        Ok(())
    }

    /// All categories in insertion order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    #[must_use]
    pub fn category_by_slug(&self, slug: &Slug) -> Option<&Category> {
        self.categories.iter().find(|category| &category.slug == slug)
    }

    /// Look up a product of `kind` by its slug.
    #[must_use]
    pub fn product_by_slug(&self, kind: ProductKind, slug: &Slug) -> Option<Product> {
        match kind {
            ProductKind::Notebook => self.notebooks.by_slug(slug).cloned().map(Product::from),
            ProductKind::Smartphone => self.smartphones.by_slug(slug).cloned().map(Product::from),
        }
    }

    /// Number of records of `kind`.
    #[must_use]
    pub fn count(&self, kind: ProductKind) -> usize {
        match kind {
            ProductKind::Notebook => self.notebooks.len(),
            ProductKind::Smartphone => self.smartphones.len(),
        }
    }
}

impl ProductSource for InMemoryCatalog {
    fn latest(&self, kind: ProductKind, limit: usize) -> Vec<Product> {
        match kind {
            ProductKind::Notebook => self
                .notebooks
                .latest(limit)
                .into_iter()
                .cloned()
                .map(Product::from)
                .collect(),
            ProductKind::Smartphone => self
                .smartphones
                .latest(limit)
                .into_iter()
                .cloned()
                .map(Product::from)
                .collect(),
        }
    }
}

impl ProductLookup for InMemoryCatalog {
    fn resolve(&self, object: ObjectRef) -> Option<Product> {
        match object.kind {
            ProductKind::Notebook => self.notebooks.get(object.id).cloned().map(Product::from),
            ProductKind::Smartphone => {
                self.smartphones.get(object.id).cloned().map(Product::from)
            }
        }
    }
}

//! Home page product aggregation.
//!
//! Products of different kinds live in different collections, so the home
//! page cannot run one query for "newest products". [`LatestProductsManager`]
//! asks each requested collection for its newest records, concatenates the
//! groups in request order, and optionally moves one kind to the front.

use tracing::{debug, warn};

use crate::catalog::ProductSource;
use crate::content_type::ProductKind;
use crate::models::{Product, ProductRecord};

/// Records taken from each collection for the home page.
pub const MAIN_PAGE_LIMIT: usize = 5;

/// Collects the newest products across several collections.
///
/// # Example
///
/// ```rust,ignore
/// let manager = LatestProductsManager::new(&catalog);
/// let products = manager.get_products_for_main_page(&["notebook", "smartphone"], Some("smartphone"));
/// for product in &products {
///     match product {
///         Product::Notebook(notebook) => render_notebook(notebook),
///         Product::Smartphone(phone) => render_smartphone(phone),
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LatestProductsManager<'a, S: ?Sized> {
    source: &'a S,
    limit: usize,
}

impl<'a, S: ProductSource + ?Sized> LatestProductsManager<'a, S> {
    /// Create a manager reading from `source` with the default limit.
    #[must_use]
    pub const fn new(source: &'a S) -> Self {
        Self {
            source,
            limit: MAIN_PAGE_LIMIT,
        }
    }

    /// Take at most `limit` records from each collection instead of the default.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The per-collection limit in effect.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Newest products of each named collection, for the home page.
    ///
    /// - Each name is resolved to a [`ProductKind`]; unknown names contribute
    ///   nothing. A name repeated later in the list is skipped.
    /// - Each kind contributes up to `limit` records, newest first, in the
    ///   order the names were given.
    /// - When `preferred_category` names one of the requested kinds, its
    ///   records are moved ahead of the rest. Relative order inside both
    ///   groups is kept.
    pub fn get_products_for_main_page<N: AsRef<str>>(
        &self,
        category_names: &[N],
        preferred_category: Option<&str>,
    ) -> Vec<Product> {
        let mut kinds: Vec<ProductKind> = Vec::with_capacity(category_names.len());
        for name in category_names {
            let name = name.as_ref();
            match ProductKind::from_model_name(name) {
                Some(kind) if kinds.contains(&kind) => {
                    warn!(category = name, "Category requested twice, using first position");
                }
                Some(kind) => kinds.push(kind),
                None => debug!(category = name, "Unknown category ignored"),
            }
        }

        let mut products: Vec<Product> = kinds
            .iter()
            .flat_map(|&kind| self.source.latest(kind, self.limit).into_iter().take(self.limit))
            .collect();

        let preferred = preferred_category
            .and_then(ProductKind::from_model_name)
            .filter(|kind| kinds.contains(kind));
        match preferred {
            // sort_by_key is stable, and `false` orders before `true`
            Some(preferred) => products.sort_by_key(|product| product.kind() != preferred),
            None if preferred_category.is_some() => {
                debug!(
                    preferred = preferred_category,
                    "Preferred category not requested, keeping request order"
                );
            }
            None => {}
        }

        debug!(
            kinds = kinds.len(),
            products = products.len(),
            "Collected main page products"
        );
        products
    }
}

//! Online Shop Core - catalog, cart and customer schema.
//!
//! This crate provides the records an online shop stores and the one query
//! its home page needs:
//! - product categories and one record type per category (notebooks,
//!   smartphones)
//! - carts, cart lines and customers
//! - the cross-category "latest products" aggregation
//!
//! # Architecture
//!
//! The core crate contains types, traits and in-memory collections only - no
//! I/O, no database access, no HTTP. Storage and rendering are external
//! collaborators that plug in through [`ProductSource`] and [`ProductLookup`].
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, slugs, phone numbers and prices
//! - [`content_type`] - Product kinds and polymorphic references
//! - [`models`] - Record definitions
//! - [`catalog`] - Collection traits and the in-memory catalog
//! - [`aggregator`] - Home page product aggregation
//! - [`fixtures`] - Building a populated shop from fixture data

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod aggregator;
pub mod catalog;
pub mod content_type;
pub mod fixtures;
pub mod models;
pub mod types;

pub use aggregator::{LatestProductsManager, MAIN_PAGE_LIMIT};
pub use catalog::{CatalogError, InMemoryCatalog, ProductLookup, ProductSource};
pub use content_type::{ObjectRef, ProductKind, UnknownProductKind};
pub use fixtures::{FixtureError, ShopData, ShopFixture};
pub use models::*;
pub use types::*;

//! Core value types for the online shop.
//!
//! This module provides type-safe wrappers for identifiers, slugs, phone
//! numbers and prices.

pub mod id;
pub mod phone;
pub mod price;
pub mod slug;

pub use id::*;
pub use phone::{PhoneNumber, PhoneNumberError};
pub use price::{Price, PriceError};
pub use slug::{Slug, SlugError};

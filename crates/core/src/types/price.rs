//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored the way the catalog defines its money columns: at most
//! nine significant digits, exactly two of them after the decimal point.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
    /// The amount carries more fractional digits than a price column holds.
    #[error("price must have at most {max} decimal places")]
    TooPrecise {
        /// Maximum allowed fractional digits.
        max: u32,
    },
    /// The amount does not fit in the price column.
    #[error("price must have at most {max} digits")]
    TooLarge {
        /// Maximum allowed digits in total.
        max: u32,
    },
}

/// A non-negative money amount with two fractional digits.
///
/// ## Examples
///
/// ```
/// use online_shop_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::new(49_990, 2)).unwrap();
/// assert_eq!(price.to_string(), "499.90");
/// assert_eq!(price.times(3).to_string(), "1499.70");
///
/// assert!(Price::new(Decimal::new(-1, 0)).is_err());
/// assert!(Price::new(Decimal::new(1_001, 3)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Number of fractional digits every price carries.
    pub const DECIMAL_PLACES: u32 = 2;

    /// Maximum number of digits in a price.
    pub const MAX_DIGITS: u32 = 9;

    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// Amounts with fewer than two fractional digits are rescaled, so
    /// `10` and `10.0` both become `10.00`.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount:
    /// - Is negative
    /// - Has more than two fractional digits
    /// - Has more than nine digits in total
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }

        let normalized = amount.normalize();
        if normalized.scale() > Self::DECIMAL_PLACES {
            return Err(PriceError::TooPrecise {
                max: Self::DECIMAL_PLACES,
            });
        }

        let mut amount = normalized;
        amount.rescale(Self::DECIMAL_PLACES);

        let integer_part = amount.trunc().normalize().abs().to_string();
        let integer_digits =
            u32::try_from(integer_part.trim_start_matches('0').len()).unwrap_or(u32::MAX);
        if integer_digits.saturating_add(Self::DECIMAL_PLACES) > Self::MAX_DIGITS {
            return Err(PriceError::TooLarge {
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(amount))
    }

    /// Create a price from a whole number of cents.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Price::new`].
    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        Self::new(Decimal::new(cents, Self::DECIMAL_PLACES))
    }

    /// Returns the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the price multiplied by a quantity.
    ///
    /// Line totals and cart totals are derived values, so they are not
    /// re-checked against the digit limit of a single price column.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        let mut total = self.0 * Decimal::from(quantity);
        total.rescale(Self::DECIMAL_PLACES);
        Self(total)
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut total = self.0 + rhs.0;
        total.rescale(Self::DECIMAL_PLACES);
        Self(total)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

//! Customers and the accounts they are linked to.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{MAX_TEXT_LENGTH, ModelError, check_text};
use crate::types::{CustomerId, PhoneNumber, UserId};

/// The login identity a customer is linked to.
///
/// Authentication itself happens elsewhere; only the fields the shop
/// displays are kept here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// A shopper with contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub user: UserAccount,
    pub phone: PhoneNumber,
    /// Delivery address.
    pub address: String,
}

impl Customer {
    /// Check field constraints.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if the username or address is blank or longer
    /// than 255 characters.
    pub fn validate(&self) -> Result<(), ModelError> {
        check_text("username", &self.user.username, MAX_TEXT_LENGTH)?;
        check_text("address", &self.address, MAX_TEXT_LENGTH)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer: {} {}",
            self.user.first_name, self.user.last_name
        )
    }
}

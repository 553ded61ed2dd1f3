//! Customer models: login credentials and billing details

use std::fmt;

use serde::{Deserialize, Serialize};

/// Login credentials for a storefront account.
///
/// The password is accepted on input but never written back out, neither by
/// `Debug` nor by serialization.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredentials {
    /// Account username (usually an email address)
    pub username: String,
    /// Account password
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl UserCredentials {
    /// Create new credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Billing details entered at checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingDetails {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    /// Second address line, may be empty
    #[serde(default)]
    pub address2: String,
    pub city: String,
    /// County or state
    pub county: String,
    pub postcode: String,
    pub phone: String,
}

impl BillingDetails {
    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

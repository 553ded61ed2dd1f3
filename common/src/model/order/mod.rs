//! Order models

use serde::{Deserialize, Serialize};

/// Order number captured from the confirmation page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_number: String,
}

impl OrderConfirmation {
    /// Create a confirmation from scraped text, trimming surrounding whitespace
    pub fn new(order_number: impl AsRef<str>) -> Self {
        Self {
            order_number: order_number.as_ref().trim().to_string(),
        }
    }

    /// Whether this order number appears in a scraped order history listing
    pub fn is_listed_in<'a, I>(&self, history: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        history
            .into_iter()
            .any(|entry| entry.trim().trim_start_matches('#') == self.order_number)
    }
}

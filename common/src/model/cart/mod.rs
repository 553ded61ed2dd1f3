//! Cart models

use serde::{Deserialize, Serialize};

use crate::decimal::precision::{round2, zero};
use crate::decimal::Money;

/// Snapshot of the four money rows of a cart at one point in time.
///
/// Every field is parsed from its own row of text. Nothing here is derived
/// from another field; working out what the total *should* be is the
/// verifier's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of line items before discount and shipping
    pub subtotal: Money,
    /// Coupon discount, positive, zero when no discount row is shown
    pub discount: Money,
    /// Shipping charge
    pub shipping: Money,
    /// Order total as displayed
    pub total: Money,
}

impl CartTotals {
    /// Create a snapshot, normalising every amount to two fractional digits
    pub fn new(subtotal: Money, discount: Money, shipping: Money, total: Money) -> Self {
        Self {
            subtotal: round2(subtotal),
            discount: round2(discount),
            shipping: round2(shipping),
            total: round2(total),
        }
    }

    /// Create a snapshot for a cart with no discount row
    pub fn without_discount(subtotal: Money, shipping: Money, total: Money) -> Self {
        Self::new(subtotal, zero(), shipping, total)
    }

    /// Whether a non-zero discount was observed
    pub fn has_discount(&self) -> bool {
        !self.discount.is_zero()
    }
}

//! Discount verification

use common::decimal::precision::{percentage_of, round2, within, PENNY};
use common::decimal::{Money, Percent};
use common::error::{Error, Result};
use common::model::cart::CartTotals;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::VerifierConfig;
use crate::coupons::CouponCatalog;

/// What the cart should show once a coupon is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Expectation {
    /// Percentage the coupon takes off
    pub percent: Percent,
    /// `percent` of the subtotal
    pub discount: Money,
    /// `subtotal - discount + shipping`
    pub total: Money,
}

/// Outcome of comparing observed totals with an [`Expectation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiscountCheck {
    pub expected: Expectation,
    pub observed: CartTotals,
    pub tolerance: Money,
    /// `|observed.discount - expected.discount|`
    pub discount_diff: Money,
    /// `|observed.total - expected.total|`
    pub total_diff: Money,
    pub discount_ok: bool,
    pub total_ok: bool,
}

impl DiscountCheck {
    /// Both discount and total are within tolerance
    pub fn passed(&self) -> bool {
        self.discount_ok && self.total_ok
    }

    /// Turn a failed check into a validation error
    pub fn into_result(self) -> Result<Self> {
        if !self.discount_ok {
            return Err(Error::Validation(format!(
                "Discount should be {}% of subtotal (±{}), expected {} got {}",
                self.expected.percent, self.tolerance, self.expected.discount, self.observed.discount
            )));
        }
        if !self.total_ok {
            return Err(Error::Validation(format!(
                "Total should be subtotal - discount + shipping (±{}), expected {} got {}",
                self.tolerance, self.expected.total, self.observed.total
            )));
        }
        Ok(self)
    }
}

/// Checks coupon discounts against observed cart totals
#[derive(Debug, Clone)]
pub struct DiscountVerifier {
    tolerance: Money,
}

impl Default for DiscountVerifier {
    fn default() -> Self {
        Self::new(PENNY)
    }
}

impl DiscountVerifier {
    /// Create a verifier accepting differences up to `tolerance`
    pub fn new(tolerance: Money) -> Self {
        Self { tolerance }
    }

    /// Create a verifier from configuration
    pub fn with_config(config: &VerifierConfig) -> Self {
        Self::new(config.tolerance)
    }

    pub fn tolerance(&self) -> Money {
        self.tolerance
    }

    /// Expected discount and total for a coupon of `percent`
    pub fn expected(&self, totals: &CartTotals, percent: Percent) -> Expectation {
        let discount = percentage_of(totals.subtotal, percent);
        let total = round2(totals.subtotal - discount + totals.shipping);
        Expectation { percent, discount, total }
    }

    /// Compare observed totals with what a coupon of `percent` should give
    pub fn verify(&self, totals: &CartTotals, percent: Percent) -> DiscountCheck {
        let expected = self.expected(totals, percent);
        let check = DiscountCheck {
            expected,
            observed: *totals,
            tolerance: self.tolerance,
            discount_diff: (totals.discount - expected.discount).abs(),
            total_diff: (totals.total - expected.total).abs(),
            discount_ok: within(totals.discount, expected.discount, self.tolerance),
            total_ok: within(totals.total, expected.total, self.tolerance),
        };

        if check.passed() {
            info!("Discount of {}% verified: discount {} total {}", percent, totals.discount, totals.total);
        } else {
            warn!(
                "Discount of {}% mismatch: discount {} (expected {}), total {} (expected {})",
                percent, totals.discount, expected.discount, totals.total, expected.total
            );
        }

        check
    }

    /// Look up the coupon's percentage and verify it
    pub fn verify_coupon(&self, totals: &CartTotals, coupon: &str, catalog: &CouponCatalog) -> Result<DiscountCheck> {
        let percent = catalog.require(coupon)?;
        Ok(self.verify(totals, percent))
    }
}

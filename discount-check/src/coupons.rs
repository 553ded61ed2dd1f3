//! Known coupon codes

use std::collections::HashMap;

use common::decimal::Percent;
use common::error::{Error, Result};

/// Coupon taking 25% off the subtotal
pub const TWO_I_DISCOUNT_COUPON: &str = "2idiscount";
/// Coupon taking 15% off the subtotal
pub const EDGEWORDS_COUPON: &str = "Edgewords";

/// Coupon code to discount percentage, looked up case-insensitively
#[derive(Debug, Clone)]
pub struct CouponCatalog {
    coupons: HashMap<String, Percent>,
}

impl Default for CouponCatalog {
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(TWO_I_DISCOUNT_COUPON, 25);
        catalog.insert(EDGEWORDS_COUPON, 15);
        catalog
    }
}

impl CouponCatalog {
    /// Catalog with the storefront's built-in coupons
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with no coupons
    pub fn empty() -> Self {
        Self {
            coupons: HashMap::new(),
        }
    }

    /// Add or replace a coupon
    pub fn insert(&mut self, code: &str, percent: Percent) {
        self.coupons.insert(Self::key(code), percent);
    }

    /// Percentage for a coupon code, if known
    pub fn percent_for(&self, code: &str) -> Option<Percent> {
        self.coupons.get(&Self::key(code)).copied()
    }

    /// Percentage for a coupon code, failing for unknown codes
    pub fn require(&self, code: &str) -> Result<Percent> {
        self.percent_for(code)
            .ok_or_else(|| Error::Validation(format!("Unknown coupon code: {}", code)))
    }

    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }

    fn key(code: &str) -> String {
        code.trim().to_lowercase()
    }
}

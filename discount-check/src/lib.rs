//! Discount verification for storefront cart totals
//!
//! Reads scraped cart rows into [`CartTotals`](common::model::cart::CartTotals),
//! works out what a coupon should have taken off, and checks the observed
//! values within a one penny tolerance.

pub mod config;
pub mod coupons;
pub mod report;
pub mod scenarios;
pub mod totals;
pub mod verifier;

pub use config::VerifierConfig;
pub use coupons::CouponCatalog;
pub use totals::{TotalsReader, TotalsText};
pub use verifier::{DiscountCheck, DiscountVerifier, Expectation};

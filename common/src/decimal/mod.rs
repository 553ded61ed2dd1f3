//! Decimal type utilities for exact currency calculations

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Money amount, always carried at two fractional digits once rounded
pub type Money = Decimal;

/// Whole-number percentage as printed on a coupon (25 means 25%)
pub type Percent = i64;

/// Precision helpers for common operations
pub mod precision {
    use super::*;
    use rust_decimal::RoundingStrategy;

    /// Number of fractional digits in a money amount
    pub const MONEY_SCALE: u32 = 2;

    /// Smallest representable amount (one penny)
    pub const PENNY: Money = dec!(0.01);

    /// Round to two fractional digits, half away from zero.
    ///
    /// The result has scale 2, so `12` comes back as `12.00` and `-10.005` as
    /// `-10.01`. Values too large for two fractional digits keep a smaller
    /// scale; [`checked_round2`] reports them instead.
    pub fn round2(value: Decimal) -> Money {
        let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(MONEY_SCALE);
        rounded
    }

    /// Like [`round2`] but `None` when the value is too large to carry two
    /// fractional digits (above roughly 7.9e26)
    pub fn checked_round2(value: Decimal) -> Option<Money> {
        let rounded = round2(value);
        (rounded.scale() == MONEY_SCALE).then_some(rounded)
    }

    /// `base * percent / 100`, rounded with [`round2`].
    ///
    /// Panics on overflow; use [`checked_percentage_of`] for untrusted input.
    pub fn percentage_of(base: Money, percent: Percent) -> Money {
        round2(base * Decimal::from(percent) / dec!(100))
    }

    /// Like [`percentage_of`] but `None` on overflow
    pub fn checked_percentage_of(base: Money, percent: Percent) -> Option<Money> {
        base.checked_mul(Decimal::from(percent))
            .and_then(|v| v.checked_div(dec!(100)))
            .and_then(checked_round2)
    }

    /// Zero at money scale
    pub fn zero() -> Money {
        round2(Decimal::ZERO)
    }

    /// True when `a` and `b` differ by no more than `tolerance`
    pub fn within(a: Money, b: Money, tolerance: Money) -> bool {
        (a - b).abs() <= tolerance
    }
}

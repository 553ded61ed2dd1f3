//! Report lines for scenario inputs, totals and expectations

use common::model::cart::CartTotals;
use common::model::scenario::DiscountScenario;
use money_parser::MoneyParser;
use tracing::{info, warn};

use crate::verifier::{DiscountCheck, Expectation};

/// Log the inputs of a scenario. The password is never logged.
pub fn log_inputs(scenario: &DiscountScenario) {
    info!(
        username = %scenario.user.username,
        product = %scenario.product.name,
        coupon = %scenario.coupon,
        "Scenario inputs"
    );
}

/// Log a totals snapshot under `title`, e.g. "Totals BEFORE coupon"
pub fn log_totals(title: &str, totals: &CartTotals, parser: &MoneyParser) {
    info!(
        subtotal = %parser.format(totals.subtotal),
        discount = %parser.format(totals.discount),
        shipping = %parser.format(totals.shipping),
        total = %parser.format(totals.total),
        "{}",
        title
    );
}

pub fn log_expectation(expectation: &Expectation, parser: &MoneyParser) {
    info!(
        percent = expectation.percent,
        expected_discount = %parser.format(expectation.discount),
        expected_total = %parser.format(expectation.total),
        "Expectation"
    );
}

pub fn log_check(check: &DiscountCheck, parser: &MoneyParser) {
    if check.passed() {
        info!(
            discount_diff = %parser.format(check.discount_diff),
            total_diff = %parser.format(check.total_diff),
            "Discount check passed"
        );
    } else {
        warn!(
            discount_ok = check.discount_ok,
            total_ok = check.total_ok,
            discount_diff = %parser.format(check.discount_diff),
            total_diff = %parser.format(check.total_diff),
            tolerance = %parser.format(check.tolerance),
            "Discount check failed"
        );
    }
}

/// Render a snapshot as one line, for printing outside of logs
pub fn totals_line(totals: &CartTotals, parser: &MoneyParser) -> String {
    format!(
        "subtotal={} discount={} shipping={} total={}",
        parser.format(totals.subtotal),
        parser.format(totals.discount),
        parser.format(totals.shipping),
        parser.format(totals.total)
    )
}

//! Built-in discount scenarios and loading scenarios from JSON

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use common::decimal::Percent;
use common::error::{Error, ErrorExt, Result};
use common::model::customer::{BillingDetails, UserCredentials};
use common::model::product::ProductData;
use common::model::scenario::DiscountScenario;
use tracing::debug;

use crate::coupons::{CouponCatalog, EDGEWORDS_COUPON, TWO_I_DISCOUNT_COUPON};

const DEMO_USERNAME: &str = "luis.hueso@2.com";
const DEMO_PASSWORD: &str = "luis.hueso";

#[allow(clippy::too_many_arguments)]
fn billing(
    first_name: &str,
    last_name: &str,
    address1: &str,
    address2: &str,
    city: &str,
    county: &str,
    postcode: &str,
    phone: &str,
) -> BillingDetails {
    BillingDetails {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        address1: address1.to_string(),
        address2: address2.to_string(),
        city: city.to_string(),
        county: county.to_string(),
        postcode: postcode.to_string(),
        phone: phone.to_string(),
    }
}

fn scenario(product: &str, coupon: &str, billing: BillingDetails, percent: Percent) -> DiscountScenario {
    DiscountScenario {
        user: UserCredentials::new(DEMO_USERNAME, DEMO_PASSWORD),
        product: ProductData::new(product),
        coupon: coupon.to_string(),
        billing,
        expected_discount_percent: percent,
    }
}

/// Scenarios for checking the discount line in the cart
pub fn default_discount_scenarios() -> Vec<DiscountScenario> {
    vec![
        scenario(
            "Polo",
            TWO_I_DISCOUNT_COUPON,
            billing("Luis", "Hueso", "Edgewords", "2itesting", "London", "Camden", "SE10 9LS", "07956987456"),
            25,
        ),
        scenario(
            "Sunglasses",
            EDGEWORDS_COUPON,
            billing("John", "Doe", "Test Street", "Suite 100", "Manchester", "Greater Manchester", "M1 1AA", "07123456789"),
            15,
        ),
    ]
}

/// Scenarios for placing an order with a coupon applied
pub fn default_checkout_scenarios() -> Vec<DiscountScenario> {
    vec![
        scenario(
            "Polo",
            TWO_I_DISCOUNT_COUPON,
            billing("Alice", "Smith", "123 Main St", "Apt 4B", "Birmingham", "West Midlands", "B1 1HQ", "07111222333"),
            25,
        ),
        scenario(
            "Sunglasses",
            EDGEWORDS_COUPON,
            billing("Bob", "Johnson", "456 Oak Ave", "", "Leeds", "West Yorkshire", "LS1 1UR", "07444555666"),
            15,
        ),
    ]
}

/// Parse a JSON array of scenarios
pub fn load<R: Read>(reader: R) -> Result<Vec<DiscountScenario>> {
    let scenarios: Vec<DiscountScenario> = serde_json::from_reader(reader)?;
    debug!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

/// Load scenarios from a JSON file
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<DiscountScenario>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(Error::from).with_context(|| format!("Opening {}", path.display()))?;
    load(BufReader::new(file))
}

/// Check that every scenario's coupon is known and agrees with its percentage
pub fn validate(scenarios: &[DiscountScenario], catalog: &CouponCatalog) -> Result<()> {
    for s in scenarios {
        match catalog.percent_for(&s.coupon) {
            None => {
                return Err(Error::Scenario(format!("{}: unknown coupon '{}'", s.id(), s.coupon)));
            }
            Some(percent) if percent != s.expected_discount_percent => {
                return Err(Error::Scenario(format!(
                    "{}: coupon '{}' gives {}% but scenario expects {}%",
                    s.id(),
                    s.coupon,
                    percent,
                    s.expected_discount_percent
                )));
            }
            Some(_) => {}
        }
    }
    Ok(())
}

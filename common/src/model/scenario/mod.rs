//! Discount scenario model

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::decimal::Percent;
use crate::model::customer::{BillingDetails, UserCredentials};
use crate::model::product::ProductData;

/// One purchase with a coupon and the discount it should produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountScenario {
    /// Account used for the purchase
    pub user: UserCredentials,
    /// Product added to the cart
    pub product: ProductData,
    /// Coupon code entered in the cart
    pub coupon: String,
    /// Billing details used at checkout
    pub billing: BillingDetails,
    /// Percentage the coupon should take off the subtotal
    pub expected_discount_percent: Percent,
}

impl DiscountScenario {
    /// Short identifier, `<product>-<coupon>`
    pub fn id(&self) -> String {
        format!("{}-{}", self.product.name, self.coupon)
    }
}

impl fmt::Display for DiscountScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scenario[product={}, coupon={}, discount={}%]",
            self.product.name, self.coupon, self.expected_discount_percent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_and_display() {
        let scenario = DiscountScenario {
            user: UserCredentials::new("shopper@example.com", "pw"),
            product: ProductData::new("Polo"),
            coupon: "2idiscount".to_string(),
            billing: BillingDetails {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                address1: "1 High St".to_string(),
                address2: String::new(),
                city: "London".to_string(),
                county: "Camden".to_string(),
                postcode: "NW1 1AA".to_string(),
                phone: "07000000000".to_string(),
            },
            expected_discount_percent: 25,
        };
        assert_eq!(scenario.id(), "Polo-2idiscount");
        assert_eq!(scenario.to_string(), "Scenario[product=Polo, coupon=2idiscount, discount=25%]");
    }
}

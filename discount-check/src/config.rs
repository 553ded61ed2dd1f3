//! Configuration for discount verification

use std::env;
use std::str::FromStr;

use common::decimal::precision::PENNY;
use common::decimal::Money;
use common::error::{Error, Result};
use money_parser::MoneyConfig;

/// Configuration for discount verification
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// How price text is read and printed
    pub money: MoneyConfig,
    /// Largest accepted difference between expected and observed amounts
    pub tolerance: Money,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            money: MoneyConfig::from_env(),
            tolerance: env::var("DISCOUNT_TOLERANCE")
                .ok()
                .and_then(|s| parse_tolerance(&s).ok())
                .unwrap_or(PENNY),
        }
    }
}

impl VerifierConfig {
    /// Create a new configuration using environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Like [`VerifierConfig::from_env`] but rejects malformed values
    pub fn try_from_env() -> Result<Self> {
        let tolerance = match env::var("DISCOUNT_TOLERANCE") {
            Ok(value) => parse_tolerance(&value)?,
            Err(_) => PENNY,
        };

        Ok(Self {
            money: MoneyConfig::try_from_env()?,
            tolerance,
        })
    }

    /// Create a new configuration with custom values
    pub fn new(money: MoneyConfig, tolerance: Money) -> Self {
        Self { money, tolerance }
    }
}

/// Parse a tolerance such as `0.01`; negative values are rejected
pub fn parse_tolerance(value: &str) -> Result<Money> {
    let tolerance = Money::from_str(value.trim())
        .map_err(|e| Error::Configuration(format!("Invalid tolerance '{}': {}", value, e)))?;

    if tolerance.is_sign_negative() {
        return Err(Error::Configuration(format!(
            "Tolerance must not be negative, got {}",
            tolerance
        )));
    }

    Ok(tolerance)
}

//! Command implementations. Each returns the text to print on success.

use std::path::Path;

use common::decimal::precision::checked_percentage_of;
use common::decimal::Percent;
use common::error::{Error, ErrorExt, Result};
use discount_check::{report, scenarios};
use discount_check::{CouponCatalog, DiscountVerifier, TotalsReader, TotalsText, VerifierConfig};
use money_parser::MoneyParser;
use tracing::info;

/// Everything a command needs, built once from configuration
pub struct Checks {
    parser: MoneyParser,
    reader: TotalsReader,
    verifier: DiscountVerifier,
    catalog: CouponCatalog,
}

/// How the expected discount is chosen for `verify`
pub enum Rate {
    Percent(Percent),
    Coupon(String),
}

impl Checks {
    pub fn new(config: &VerifierConfig) -> Self {
        let parser = MoneyParser::with_config(config.money.clone());
        Self {
            reader: TotalsReader::new(parser.clone()),
            parser,
            verifier: DiscountVerifier::with_config(config),
            catalog: CouponCatalog::new(),
        }
    }

    pub fn parse(&self, text: &str, strict: bool) -> Result<String> {
        let amount = if strict {
            self.parser.try_parse(text)?
        } else {
            self.parser.parse(text)
        };
        Ok(amount.to_string())
    }

    pub fn percent(&self, base: &str, percent: Percent) -> Result<String> {
        let base = self
            .parser
            .try_parse(base)
            .map_err(Error::from)
            .with_context(|| "Base amount")?;
        let amount = checked_percentage_of(base, percent)
            .ok_or_else(|| Error::DecimalError(format!("{}% of {} is out of range", percent, base)))?;
        Ok(amount.to_string())
    }

    pub fn verify(&self, text: &TotalsText, rate: &Rate) -> Result<String> {
        let totals = self.reader.try_read(text)?;
        report::log_totals("Observed totals", &totals, &self.parser);

        let check = match rate {
            Rate::Percent(percent) => self.verifier.verify(&totals, *percent),
            Rate::Coupon(code) => self.verifier.verify_coupon(&totals, code, &self.catalog)?,
        };
        report::log_expectation(&check.expected, &self.parser);
        report::log_check(&check, &self.parser);

        let check = check.into_result()?;
        Ok(format!(
            "OK {} expected_discount={} expected_total={}",
            report::totals_line(&check.observed, &self.parser),
            self.parser.format(check.expected.discount),
            self.parser.format(check.expected.total)
        ))
    }

    pub fn scenarios(&self, file: Option<&Path>, checkout: bool) -> Result<String> {
        let list = match file {
            Some(path) => scenarios::load_file(path)?,
            None if checkout => scenarios::default_checkout_scenarios(),
            None => scenarios::default_discount_scenarios(),
        };
        scenarios::validate(&list, &self.catalog)?;

        for scenario in &list {
            report::log_inputs(scenario);
        }
        info!("{} scenarios", list.len());

        Ok(list
            .iter()
            .map(|s| format!("{}\t{}%", s.id(), s.expected_discount_percent))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

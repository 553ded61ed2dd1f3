//! Price text parsing

use std::str::FromStr;

use common::decimal::precision::{checked_round2, percentage_of, round2, zero};
use common::decimal::{Money, Percent};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::config::MoneyConfig;

/// Why a price text could not be read as an amount
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing to parse
    #[error("price text is empty")]
    Empty,

    /// No digits survived stripping of symbols and words
    #[error("no digits in price text {text:?}")]
    NoDigits { text: String },

    /// Digits were found but do not form a decimal number
    #[error("{candidate:?} is not a decimal amount")]
    Malformed { candidate: String },

    /// The number is too large to carry two fractional digits
    #[error("{candidate:?} is out of range for a money amount")]
    OutOfRange { candidate: String },
}

impl From<ParseError> for common::error::Error {
    fn from(err: ParseError) -> Self {
        common::error::Error::Parse(err.to_string())
    }
}

/// Turns scraped price text such as `"Total: £12.00"` into a [`Money`] amount.
///
/// The configured currency symbol is removed first, then everything except
/// digits, `.`, `,` and `-` is stripped. Separators are
/// normalised according to the configured [`SeparatorStyle`], and the result is
/// rounded half away from zero to two fractional digits.
///
/// [`SeparatorStyle`]: crate::config::SeparatorStyle
#[derive(Debug, Clone, Default)]
pub struct MoneyParser {
    config: MoneyConfig,
}

impl MoneyParser {
    /// Create a parser configured from the environment
    pub fn new() -> Self {
        Self::with_config(MoneyConfig::from_env())
    }

    /// Create a parser with an explicit configuration
    pub fn with_config(config: MoneyConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &MoneyConfig {
        &self.config
    }

    /// Parse price text, falling back to zero when it cannot be read
    pub fn parse(&self, text: &str) -> Money {
        self.try_parse(text).unwrap_or_else(|e| {
            debug!("Falling back to zero for price text {:?}: {}", text, e);
            zero()
        })
    }

    /// Parse price text that may be absent; `None` gives zero
    pub fn parse_optional(&self, text: Option<&str>) -> Money {
        text.map_or_else(zero, |t| self.parse(t))
    }

    /// Parse price text, reporting why it could not be read
    pub fn try_parse(&self, text: &str) -> Result<Money, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        let cleaned = self.strip(text);
        if !cleaned.chars().any(|c| c.is_ascii_digit()) {
            return Err(ParseError::NoDigits {
                text: text.to_string(),
            });
        }

        // Last token wins when a label precedes the number
        let candidate = cleaned.split_whitespace().last().unwrap_or(cleaned.as_str());

        let value = Decimal::from_str(candidate).map_err(|_| ParseError::Malformed {
            candidate: candidate.to_string(),
        })?;
        checked_round2(value).ok_or_else(|| ParseError::OutOfRange {
            candidate: candidate.to_string(),
        })
    }

    /// `base * percent / 100` at two fractional digits
    pub fn percentage_of(&self, base: Money, percent: Percent) -> Money {
        percentage_of(base, percent)
    }

    /// Round to two fractional digits, half away from zero
    pub fn round2(&self, value: Decimal) -> Money {
        round2(value)
    }

    /// Render an amount for logs, e.g. `£8.49` or `-£4.50`.
    ///
    /// The decimal point follows the configured separator style, so the
    /// output parses back to the same amount.
    pub fn format(&self, value: Money) -> String {
        let amount = round2(value);
        let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
        let digits = amount
            .abs()
            .to_string()
            .replace('.', &self.config.separators.decimal_separator().to_string());
        format!("{}{}{}", sign, self.config.currency_symbol, digits)
    }

    fn strip(&self, text: &str) -> String {
        let separators = self.config.separators;
        let symbol = self.config.currency_symbol.as_str();
        let text = if symbol.is_empty() {
            text.to_string()
        } else {
            text.replace(symbol, "")
        };
        text.chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
            .filter_map(|c| separators.normalize(c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeparatorStyle;
    use rust_decimal_macros::dec;

    fn parser() -> MoneyParser {
        MoneyParser::with_config(MoneyConfig::new("£", SeparatorStyle::CommaDecimal))
    }

    #[test]
    fn test_strip_keeps_digits_and_separators() {
        assert_eq!(parser().strip("Total: £1,50"), "1.50");
        assert_eq!(parser().strip("-£4.50"), "-4.50");
        assert_eq!(parser().strip("£"), "");
    }

    #[test]
    fn test_try_parse_reports_cause() {
        let parser = parser();
        assert_eq!(parser.try_parse(""), Err(ParseError::Empty));
        assert_eq!(parser.try_parse("   "), Err(ParseError::Empty));
        assert_eq!(
            parser.try_parse("Free!"),
            Err(ParseError::NoDigits { text: "Free!".to_string() })
        );
        assert_eq!(
            parser.try_parse("-"),
            Err(ParseError::NoDigits { text: "-".to_string() })
        );
        assert_eq!(
            parser.try_parse("£1.2.3"),
            Err(ParseError::Malformed { candidate: "1.2.3".to_string() })
        );
    }

    #[test]
    fn test_parse_falls_back_to_zero() {
        let parser = parser();
        assert_eq!(parser.parse("£1.2.3"), dec!(0.00));
        assert_eq!(parser.parse("n/a").to_string(), "0.00");
        assert_eq!(parser.parse_optional(None).to_string(), "0.00");
        assert_eq!(parser.parse_optional(Some("£2.50")), dec!(2.50));
    }

    #[test]
    fn test_format() {
        let parser = parser();
        assert_eq!(parser.format(dec!(8.49)), "£8.49");
        assert_eq!(parser.format(dec!(12)), "£12.00");
        assert_eq!(parser.format(dec!(-4.5)), "-£4.50");
        assert_eq!(parser.format(dec!(0)), "£0.00");
    }

    #[test]
    fn test_strip_removes_configured_symbol() {
        let parser = MoneyParser::with_config(MoneyConfig::new("S/.", SeparatorStyle::CommaDecimal));
        assert_eq!(parser.strip("S/.12.34"), "12.34");
        assert_eq!(parser.strip("-S/.4.50"), "-4.50");
    }

    #[test]
    fn test_try_parse_out_of_range() {
        let parser = parser();
        let max = "79228162514264337593543950335";
        assert_eq!(
            parser.try_parse(max),
            Err(ParseError::OutOfRange { candidate: max.to_string() })
        );
        assert_eq!(parser.parse(max).scale(), 2);
    }

    #[test]
    fn test_format_uses_configured_decimal_separator() {
        let parser = MoneyParser::with_config(MoneyConfig::new("€", SeparatorStyle::DotGrouping));
        assert_eq!(parser.format(dec!(33.95)), "€33,95");
        assert_eq!(parser.format(dec!(-1234.5)), "-€1234,50");
    }

    #[test]
    fn test_parser_is_shareable_across_threads() {
        fn assert_send_sync<T: Clone + Send + Sync>() {}
        assert_send_sync::<MoneyParser>();
        assert_send_sync::<MoneyConfig>();
    }

    #[test]
    fn test_parse_error_converts_to_common_error() {
        let err: common::error::Error = ParseError::Empty.into();
        assert_eq!(err.to_string(), "Parse error: price text is empty");
    }
}

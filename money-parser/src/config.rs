//! Configuration for the money parser

use std::env;
use std::fmt;
use std::str::FromStr;

use common::error::{Error, Result};

/// Currency symbol used when none is configured
pub const DEFAULT_CURRENCY_SYMBOL: &str = "£";

/// How a price text uses `.` and `,`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorStyle {
    /// Both `,` and `.` are decimal points and nothing groups digits (`12,34`)
    #[default]
    CommaDecimal,
    /// `.` is the decimal point and `,` groups thousands (`1,234.56`)
    CommaGrouping,
    /// `,` is the decimal point and `.` groups thousands (`1.234,56`)
    DotGrouping,
}

impl SeparatorStyle {
    /// Map a kept separator character to what the decimal parser expects.
    ///
    /// Grouping separators are dropped, decimal separators become `.`, and
    /// every other character passes through.
    pub fn normalize(self, c: char) -> Option<char> {
        match (self, c) {
            (SeparatorStyle::CommaDecimal, ',') => Some('.'),
            (SeparatorStyle::CommaGrouping, ',') => None,
            (SeparatorStyle::DotGrouping, '.') => None,
            (SeparatorStyle::DotGrouping, ',') => Some('.'),
            (_, other) => Some(other),
        }
    }

    /// Character this style reads as the decimal point when printing amounts
    pub fn decimal_separator(self) -> char {
        match self {
            SeparatorStyle::DotGrouping => ',',
            SeparatorStyle::CommaDecimal | SeparatorStyle::CommaGrouping => '.',
        }
    }
}

impl FromStr for SeparatorStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "comma-decimal" => Ok(SeparatorStyle::CommaDecimal),
            "comma-grouping" => Ok(SeparatorStyle::CommaGrouping),
            "dot-grouping" => Ok(SeparatorStyle::DotGrouping),
            other => Err(Error::Configuration(format!(
                "Unknown separator style '{}', expected comma-decimal, comma-grouping or dot-grouping",
                other
            ))),
        }
    }
}

impl fmt::Display for SeparatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeparatorStyle::CommaDecimal => "comma-decimal",
            SeparatorStyle::CommaGrouping => "comma-grouping",
            SeparatorStyle::DotGrouping => "dot-grouping",
        };
        f.write_str(name)
    }
}

/// Configuration for the money parser.
///
/// The currency symbol is removed from price text before parsing, so symbols
/// carrying `.`, `,` or `-` (such as `S/.`) are fine. Symbols containing digits
/// would be indistinguishable from the amount and are rejected by
/// [`MoneyConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyConfig {
    /// Symbol printed in front of formatted amounts
    pub currency_symbol: String,
    /// Separator convention of the scraped price text
    pub separators: SeparatorStyle,
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            currency_symbol: env::var("MONEY_CURRENCY_SYMBOL")
                .unwrap_or_else(|_| DEFAULT_CURRENCY_SYMBOL.to_string()),
            separators: env::var("MONEY_SEPARATOR_STYLE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }
}

impl MoneyConfig {
    /// Create a new configuration using environment variables.
    ///
    /// An unrecognised separator style falls back to the default.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Like [`MoneyConfig::from_env`] but rejects an unrecognised separator
    /// style or a currency symbol containing digits
    pub fn try_from_env() -> Result<Self> {
        let separators = match env::var("MONEY_SEPARATOR_STYLE") {
            Ok(value) => value.parse()?,
            Err(_) => SeparatorStyle::default(),
        };

        let config = Self {
            separators,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the currency symbol cannot be mistaken for part of an amount
    pub fn validate(&self) -> Result<()> {
        if self.currency_symbol.chars().any(|c| c.is_ascii_digit()) {
            return Err(Error::Configuration(format!(
                "Currency symbol '{}' must not contain digits",
                self.currency_symbol
            )));
        }
        Ok(())
    }

    /// Create a new configuration with custom values
    pub fn new(currency_symbol: impl Into<String>, separators: SeparatorStyle) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            separators,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_separator_style_from_str() {
        assert_eq!("comma-decimal".parse::<SeparatorStyle>().unwrap(), SeparatorStyle::CommaDecimal);
        assert_eq!(" Comma-Grouping ".parse::<SeparatorStyle>().unwrap(), SeparatorStyle::CommaGrouping);
        assert_eq!("dot-grouping".parse::<SeparatorStyle>().unwrap(), SeparatorStyle::DotGrouping);
        assert!(matches!("euro".parse::<SeparatorStyle>(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_separator_style_display_parses_back() {
        for style in [
            SeparatorStyle::CommaDecimal,
            SeparatorStyle::CommaGrouping,
            SeparatorStyle::DotGrouping,
        ] {
            assert_eq!(style.to_string().parse::<SeparatorStyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(SeparatorStyle::CommaDecimal.normalize(','), Some('.'));
        assert_eq!(SeparatorStyle::CommaDecimal.normalize('.'), Some('.'));
        assert_eq!(SeparatorStyle::CommaGrouping.normalize(','), None);
        assert_eq!(SeparatorStyle::DotGrouping.normalize('.'), None);
        assert_eq!(SeparatorStyle::DotGrouping.normalize(','), Some('.'));
        assert_eq!(SeparatorStyle::DotGrouping.normalize('-'), Some('-'));
    }

    #[test]
    fn test_decimal_separator() {
        assert_eq!(SeparatorStyle::CommaDecimal.decimal_separator(), '.');
        assert_eq!(SeparatorStyle::CommaGrouping.decimal_separator(), '.');
        assert_eq!(SeparatorStyle::DotGrouping.decimal_separator(), ',');
    }

    #[test]
    fn test_validate_rejects_digit_symbols() {
        assert!(MoneyConfig::new("S/.", SeparatorStyle::CommaDecimal).validate().is_ok());
        assert!(matches!(
            MoneyConfig::new("R2", SeparatorStyle::CommaDecimal).validate(),
            Err(Error::Configuration(_))
        ));
    }

    // Env is process-global; every test touching these variables holds the lock
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("MONEY_CURRENCY_SYMBOL");
        env::remove_var("MONEY_SEPARATOR_STYLE");
    }

    #[test]
    fn test_env_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let config = MoneyConfig::try_from_env().unwrap();
        assert_eq!(config.currency_symbol, DEFAULT_CURRENCY_SYMBOL);
        assert_eq!(config.separators, SeparatorStyle::CommaDecimal);
        assert_eq!(MoneyConfig::from_env(), config);
    }

    #[test]
    fn test_env_values_are_read() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("MONEY_CURRENCY_SYMBOL", "€");
        env::set_var("MONEY_SEPARATOR_STYLE", "dot-grouping");

        let config = MoneyConfig::try_from_env().unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.separators, SeparatorStyle::DotGrouping);
        assert_eq!(MoneyConfig::from_env(), config);

        clear_env();
    }

    #[test]
    fn test_env_unknown_separator_style() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("MONEY_SEPARATOR_STYLE", "swiss");

        assert_eq!(MoneyConfig::from_env().separators, SeparatorStyle::CommaDecimal);
        assert!(matches!(MoneyConfig::try_from_env(), Err(Error::Configuration(_))));

        clear_env();
    }

    #[test]
    fn test_env_symbol_with_digits_rejected() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("MONEY_CURRENCY_SYMBOL", "R2");

        assert!(matches!(MoneyConfig::try_from_env(), Err(Error::Configuration(_))));

        clear_env();
    }

    #[test]
    fn test_new() {
        let config = MoneyConfig::new("€", SeparatorStyle::DotGrouping);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.separators, SeparatorStyle::DotGrouping);
    }
}

//! Reading cart totals from scraped row text

use common::decimal::precision::zero;
use common::model::cart::CartTotals;
use money_parser::{MoneyParser, ParseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw text of the four cart total rows as scraped from the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsText {
    pub subtotal: String,
    /// `None` when the discount row is absent or hidden
    #[serde(default)]
    pub discount: Option<String>,
    pub shipping: String,
    pub total: String,
}

impl TotalsText {
    pub fn new(
        subtotal: impl Into<String>,
        discount: Option<String>,
        shipping: impl Into<String>,
        total: impl Into<String>,
    ) -> Self {
        Self {
            subtotal: subtotal.into(),
            discount,
            shipping: shipping.into(),
            total: total.into(),
        }
    }
}

/// A cart row whose text could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} row: {source}")]
pub struct FieldError {
    pub field: &'static str,
    #[source]
    pub source: ParseError,
}

impl From<FieldError> for common::error::Error {
    fn from(err: FieldError) -> Self {
        common::error::Error::Parse(err.to_string())
    }
}

/// Builds [`CartTotals`] snapshots from scraped text
#[derive(Debug, Clone)]
pub struct TotalsReader {
    parser: MoneyParser,
}

impl TotalsReader {
    pub fn new(parser: MoneyParser) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &MoneyParser {
        &self.parser
    }

    /// Read a snapshot, treating unreadable rows as zero.
    ///
    /// The discount row shows as a negative amount on the page; it is stored
    /// as a positive one.
    pub fn read(&self, text: &TotalsText) -> CartTotals {
        let discount = text
            .discount
            .as_deref()
            .map_or_else(zero, |d| self.parser.parse(d).abs());

        CartTotals {
            subtotal: self.parser.parse(&text.subtotal),
            discount,
            shipping: self.parser.parse(&text.shipping),
            total: self.parser.parse(&text.total),
        }
    }

    /// Read a snapshot, failing on the first row that cannot be parsed
    pub fn try_read(&self, text: &TotalsText) -> Result<CartTotals, FieldError> {
        let field = |name: &'static str, value: &str| {
            self.parser
                .try_parse(value)
                .map_err(|source| FieldError { field: name, source })
        };

        let subtotal = field("subtotal", &text.subtotal)?;
        let discount = match text.discount.as_deref() {
            Some(d) => field("discount", d)?.abs(),
            None => zero(),
        };

        Ok(CartTotals {
            subtotal,
            discount,
            shipping: field("shipping", &text.shipping)?,
            total: field("total", &text.total)?,
        })
    }
}

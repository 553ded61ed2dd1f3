//! Money parser for scraped storefront price text

pub mod config;
pub mod parser;

pub use config::{MoneyConfig, SeparatorStyle, DEFAULT_CURRENCY_SYMBOL};
pub use parser::{MoneyParser, ParseError};
pub use common::decimal::precision::{percentage_of, round2};

//! Error types for the storefront checks
//!
//! This module provides a unified error handling system for every crate in the
//! workspace. Parsing, verification and configuration failures all end up here
//! so callers can propagate them with `?` and add context on the way.

use std::fmt::Display;
use thiserror::Error;

/// Storefront checks error type
#[derive(Debug, Error)]
pub enum Error {
    /// Price text could not be turned into an amount
    #[error("Parse error: {0}")]
    Parse(String),

    /// Observed values did not match what was expected
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Scenario data could not be used
    #[error("Scenario error: {0}")]
    Scenario(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// I/O error while reading scenario files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Decimal conversion error
    #[error("Decimal conversion error: {0}")]
    DecimalError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::Parse(msg) => Error::Parse(format!("{}: {}", context, msg)),
                Error::Validation(msg) => Error::Validation(format!("{}: {}", context, msg)),
                Error::Configuration(msg) => Error::Configuration(format!("{}: {}", context, msg)),
                Error::Scenario(msg) => Error::Scenario(format!("{}: {}", context, msg)),
                Error::Internal(msg) => Error::Internal(format!("{}: {}", context, msg)),
                Error::DecimalError(msg) => Error::DecimalError(format!("{}: {}", context, msg)),
                Error::Io(e) => Error::Io(e),
                Error::Serialization(e) => Error::Serialization(e),
            }
        })
    }
}

/// Trait for converting other error types to our Error type
pub trait IntoError {
    /// Convert to Error
    fn into_error(self, message: &str) -> Error;
}

impl<E: std::error::Error> IntoError for E {
    fn into_error(self, message: &str) -> Error {
        Error::Internal(format!("{}: {}", message, self))
    }
}

/// Convert string messages into an error
impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Internal(message)
    }
}

/// Convert static string references into an error
impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::Internal(message.to_string())
    }
}

/// From rust_decimal::Error
impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::DecimalError(err.to_string())
    }
}

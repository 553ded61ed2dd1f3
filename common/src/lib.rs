//! Common types and utilities for the storefront checks
//!
//! This library contains the shared types used across the workspace: the
//! money type and its rounding helpers, the unified error type, and the
//! immutable records (cart totals, customers, products, orders, scenarios)
//! that the parser and the verifier pass between each other.

pub mod error;
pub mod model;
pub mod decimal;

/// Re-export important types
pub use error::{Error, Result, ErrorExt, IntoError};
pub use decimal::*;

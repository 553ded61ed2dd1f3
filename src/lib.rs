// This is a metapackage for the cross-crate tests
// Re-export crates as modules

pub use common;
pub use discount_check;
pub use money_parser;

//! Domain models for the storefront checks

pub mod cart;
pub mod customer;
pub mod order;
pub mod product;
pub mod scenario;

//! Product models

use serde::{Deserialize, Serialize};

/// Product as named in the shop listing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductData {
    pub name: String,
}

impl ProductData {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// URL path segment of the product page, e.g. `/product/polo`
    pub fn page_path(&self) -> String {
        format!("/product/{}", self.name.trim().to_lowercase().replace(' ', "-"))
    }
}

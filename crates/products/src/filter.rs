//! Seller product listing filters.

use serde::{Deserialize, Serialize};

use crate::product::{Product, ProductStatus};

/// Filter for the seller's product listing (`GET /products/me`).
///
/// Blank search text is treated as "no search".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub status: Option<ProductStatus>,
}

impl ProductFilter {
    pub fn new(search: Option<String>, status: Option<ProductStatus>) -> Self {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self { search, status }
    }

    pub fn with_status(status: ProductStatus) -> Self {
        Self {
            search: None,
            status: Some(status),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.status.is_none()
    }

    /// Query-string pairs; unset fields are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs
    }

    /// Local approximation of the server-side filter (case-insensitive title match).
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(status) = self.status {
            if product.status != status {
                return false;
            }
        }
        match &self.search {
            Some(search) => product
                .title
                .to_lowercase()
                .contains(&search.to_lowercase()),
            None => true,
        }
    }
}

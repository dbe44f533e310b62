//! Query keys, cached payloads and invalidation scopes.

use std::sync::Arc;

use sellerdesk_cache::QueryCache;
use sellerdesk_core::ProductId;
use sellerdesk_products::{Category, DailyViews, MetricKind, Product, ProductFilter, Seller};

/// Process-wide cache shared by queries, mutations and the lifecycle controller.
pub type SharedCache = Arc<dyn QueryCache<QueryKey, QueryData>>;

/// Identity of a cached read model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// A single product (`GET /products/{id}`).
    Product(ProductId),
    /// The seller's product listing for one filter (`GET /products/me`).
    Products(ProductFilter),
    /// A 30-day counter.
    Metric(MetricKind),
    ViewsPerDay,
    Categories,
    Profile,
}

/// Cached payload, one variant per key family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryData {
    Product(Product),
    Products(Vec<Product>),
    Amount(u64),
    ViewsPerDay(Vec<DailyViews>),
    Categories(Vec<Category>),
    Profile(Seller),
}

/// A set of keys to invalidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyScope {
    Exact(QueryKey),
    /// Every product listing, whatever its filter.
    AllListings,
}

impl KeyScope {
    pub fn matches(&self, key: &QueryKey) -> bool {
        match self {
            KeyScope::Exact(exact) => exact == key,
            KeyScope::AllListings => matches!(key, QueryKey::Products(_)),
        }
    }
}

/// Keys whose value depends on how products are distributed across statuses.
///
/// A confirmed status change stales exactly this set: the product entry itself
/// is reconciled in place, and view metrics, categories and profile are
/// unaffected.
pub fn status_dependents() -> [KeyScope; 3] {
    [
        KeyScope::AllListings,
        KeyScope::Exact(QueryKey::Metric(MetricKind::AvailableProducts)),
        KeyScope::Exact(QueryKey::Metric(MetricKind::SoldProducts)),
    ]
}

/// Mark every key matched by any of `scopes` as stale.
pub(crate) fn invalidate_scopes(cache: &dyn QueryCache<QueryKey, QueryData>, scopes: &[KeyScope]) -> usize {
    cache.invalidate(&|key| scopes.iter().any(|scope| scope.matches(key)))
}

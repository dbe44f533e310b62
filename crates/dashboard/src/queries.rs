//! Cached, stale-aware reads of dashboard read models.

use chrono::Utc;
use thiserror::Error;

use sellerdesk_cache::CacheConfig;
use sellerdesk_client::{ApiError, ProductService};
use sellerdesk_core::ProductId;
use sellerdesk_products::{Category, DailyViews, MetricKind, Product, ProductFilter, Seller};

use crate::keys::{invalidate_scopes, KeyScope, QueryData, QueryKey, SharedCache};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error(transparent)]
    Remote(#[from] ApiError),
    /// The cache held a payload of the wrong family for this key.
    #[error("cached data for {0:?} has an unexpected shape")]
    UnexpectedData(QueryKey),
}

/// Fetch-through reader over the shared cache.
///
/// A fresh entry is served as-is. A missing or stale entry triggers exactly
/// one remote fetch whose result is stored fresh. A failed fetch leaves the
/// previous entry untouched.
pub struct QueryClient<S> {
    service: S,
    cache: SharedCache,
    config: CacheConfig,
}

impl<S> QueryClient<S>
where
    S: ProductService,
{
    pub fn new(service: S, cache: SharedCache, config: CacheConfig) -> Self {
        Self {
            service,
            cache,
            config,
        }
    }

    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    /// Read `key`, re-fetching when the cached copy is missing or stale.
    pub async fn fetch(&self, key: &QueryKey) -> Result<QueryData, QueryError> {
        if let Some(entry) = self.cache.get(key) {
            if entry.is_fresh(&self.config, Utc::now()) {
                tracing::debug!(?key, "query cache hit");
                return Ok(entry.value);
            }
            tracing::debug!(?key, "query cache entry is stale; re-fetching");
        } else {
            tracing::debug!(?key, "query cache miss");
        }

        let data = self.load(key).await?;
        self.cache.set(key.clone(), data.clone());
        Ok(data)
    }

    async fn load(&self, key: &QueryKey) -> Result<QueryData, ApiError> {
        let data = match key {
            QueryKey::Product(id) => QueryData::Product(self.service.get_product(id).await?),
            QueryKey::Products(filter) => {
                QueryData::Products(self.service.list_seller_products(filter).await?)
            }
            QueryKey::Metric(kind) => QueryData::Amount(self.service.metric(*kind).await?),
            QueryKey::ViewsPerDay => QueryData::ViewsPerDay(self.service.views_per_day().await?),
            QueryKey::Categories => QueryData::Categories(self.service.list_categories().await?),
            QueryKey::Profile => QueryData::Profile(self.service.get_profile().await?),
        };
        Ok(data)
    }

    pub async fn product(&self, product_id: &ProductId) -> Result<Product, QueryError> {
        let key = QueryKey::Product(product_id.clone());
        match self.fetch(&key).await? {
            QueryData::Product(product) => Ok(product),
            _ => Err(QueryError::UnexpectedData(key)),
        }
    }

    pub async fn seller_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, QueryError> {
        let key = QueryKey::Products(filter.clone());
        match self.fetch(&key).await? {
            QueryData::Products(products) => Ok(products),
            _ => Err(QueryError::UnexpectedData(key)),
        }
    }

    pub async fn metric(&self, kind: MetricKind) -> Result<u64, QueryError> {
        let key = QueryKey::Metric(kind);
        match self.fetch(&key).await? {
            QueryData::Amount(amount) => Ok(amount),
            _ => Err(QueryError::UnexpectedData(key)),
        }
    }

    pub async fn views_per_day(&self) -> Result<Vec<DailyViews>, QueryError> {
        match self.fetch(&QueryKey::ViewsPerDay).await? {
            QueryData::ViewsPerDay(days) => Ok(days),
            _ => Err(QueryError::UnexpectedData(QueryKey::ViewsPerDay)),
        }
    }

    pub async fn categories(&self) -> Result<Vec<Category>, QueryError> {
        match self.fetch(&QueryKey::Categories).await? {
            QueryData::Categories(categories) => Ok(categories),
            _ => Err(QueryError::UnexpectedData(QueryKey::Categories)),
        }
    }

    pub async fn profile(&self) -> Result<Seller, QueryError> {
        match self.fetch(&QueryKey::Profile).await? {
            QueryData::Profile(seller) => Ok(seller),
            _ => Err(QueryError::UnexpectedData(QueryKey::Profile)),
        }
    }

    /// Mark every key in `scopes` stale; returns how many entries were marked.
    pub fn invalidate(&self, scopes: &[KeyScope]) -> usize {
        invalidate_scopes(self.cache.as_ref(), scopes)
    }

    /// Drop every cached entry (e.g. after the session expired).
    pub fn reset(&self) {
        self.cache.clear();
    }
}

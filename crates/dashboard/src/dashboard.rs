//! Wiring of the dashboard components around one service and one cache.

use std::sync::Arc;

use anyhow::Context;

use sellerdesk_cache::{CacheConfig, InMemoryQueryCache};
use sellerdesk_client::{ClientConfig, HttpProductService, ProductService};

use crate::keys::{QueryData, QueryKey, SharedCache};
use crate::lifecycle::ProductLifecycleController;
use crate::mutations::ProductMutations;
use crate::queries::QueryClient;

/// Queries, mutations and the lifecycle controller sharing one cache.
pub struct Dashboard<S> {
    cache: SharedCache,
    pub queries: QueryClient<Arc<S>>,
    pub lifecycle: ProductLifecycleController<Arc<S>>,
    pub mutations: ProductMutations<Arc<S>>,
}

impl<S> Dashboard<S>
where
    S: ProductService + 'static,
{
    pub fn new(service: S, config: CacheConfig) -> Self {
        let cache: SharedCache = Arc::new(InMemoryQueryCache::<QueryKey, QueryData>::new());
        Self::with_cache(Arc::new(service), cache, config)
    }

    pub fn with_cache(service: Arc<S>, cache: SharedCache, config: CacheConfig) -> Self {
        Self {
            queries: QueryClient::new(Arc::clone(&service), Arc::clone(&cache), config),
            lifecycle: ProductLifecycleController::new(Arc::clone(&service), Arc::clone(&cache)),
            mutations: ProductMutations::new(service, Arc::clone(&cache)),
            cache,
        }
    }

    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }
}

impl Dashboard<HttpProductService> {
    /// Build an HTTP-backed dashboard from `SELLERDESK_*` environment variables.
    pub fn from_env(config: CacheConfig) -> anyhow::Result<Self> {
        let client_config = ClientConfig::from_env().context("failed to load client configuration")?;
        let api_url = client_config.api_url.clone();
        let service = HttpProductService::new(client_config)
            .with_context(|| format!("failed to build HTTP client for {api_url}"))?;

        tracing::info!(%api_url, "dashboard connected to marketplace API");
        Ok(Self::new(service, config))
    }
}

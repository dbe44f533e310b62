mod common;

use std::sync::Arc;
use std::time::Duration as StdDuration;

use sellerdesk_cache::{CacheConfig, QueryCache};
use sellerdesk_client::ApiError;
use sellerdesk_core::ProductId;
use sellerdesk_dashboard::{status_dependents, Dashboard, KeyScope, QueryError, QueryKey};
use sellerdesk_products::{MetricKind, ProductFilter, ProductStatus};

use common::{dashboard, is_stale, new_cache, product, FakeService};

#[tokio::test]
async fn fresh_entry_is_served_from_cache() {
    let (service, dash) = dashboard(FakeService::new().with_metric(MetricKind::SoldProducts, 4));

    assert_eq!(dash.queries.metric(MetricKind::SoldProducts).await.unwrap(), 4);
    assert_eq!(dash.queries.metric(MetricKind::SoldProducts).await.unwrap(), 4);

    assert_eq!(service.calls(), vec!["metric SoldProducts".to_string()]);
}

#[tokio::test]
async fn invalidated_entry_is_refetched_once() {
    let (service, dash) = dashboard(FakeService::new().with_metric(MetricKind::SoldProducts, 4));
    dash.queries.metric(MetricKind::SoldProducts).await.unwrap();

    service.set_metric(MetricKind::SoldProducts, 5);
    let marked = dash.queries.invalidate(&status_dependents());
    assert_eq!(marked, 1);
    assert!(is_stale(dash.cache(), &QueryKey::Metric(MetricKind::SoldProducts)));

    assert_eq!(dash.queries.metric(MetricKind::SoldProducts).await.unwrap(), 5);
    assert_eq!(dash.queries.metric(MetricKind::SoldProducts).await.unwrap(), 5);
    assert_eq!(service.call_count(), 2);
    assert!(!is_stale(dash.cache(), &QueryKey::Metric(MetricKind::SoldProducts)));
}

#[tokio::test]
async fn failed_refetch_keeps_previous_entry() {
    let (service, dash) = dashboard(FakeService::new().with_metric(MetricKind::Views, 90));
    dash.queries.metric(MetricKind::Views).await.unwrap();
    dash.queries
        .invalidate(&[KeyScope::Exact(QueryKey::Metric(MetricKind::Views))]);

    service.fail_with(ApiError::Network("timed out".into()));
    let err = dash.queries.metric(MetricKind::Views).await.unwrap_err();
    assert_eq!(err, QueryError::Remote(ApiError::Network("timed out".into())));

    let entry = dash
        .cache()
        .get(&QueryKey::Metric(MetricKind::Views))
        .unwrap();
    assert!(entry.stale);

    service.recover();
    assert_eq!(dash.queries.metric(MetricKind::Views).await.unwrap(), 90);
}

#[tokio::test]
async fn listings_are_cached_per_filter() {
    let (service, dash) = dashboard(
        FakeService::new()
            .with_product(product("p-1", ProductStatus::Available))
            .with_product(product("p-2", ProductStatus::Sold)),
    );

    let all = dash
        .queries
        .seller_products(&ProductFilter::default())
        .await
        .unwrap();
    let sold = dash
        .queries
        .seller_products(&ProductFilter::with_status(ProductStatus::Sold))
        .await
        .unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(sold.len(), 1);
    assert_eq!(sold[0].id, ProductId::new("p-2"));
    assert_eq!(service.call_count(), 2);

    dash.queries
        .seller_products(&ProductFilter::with_status(ProductStatus::Sold))
        .await
        .unwrap();
    assert_eq!(service.call_count(), 2);
}

#[tokio::test]
async fn missing_product_surfaces_remote_error() {
    let (_service, dash) = dashboard(FakeService::new());

    let err = dash
        .queries
        .product(&ProductId::new("ghost"))
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::Remote(ApiError::Api(404, _))));
    assert!(dash.cache().get(&QueryKey::Product(ProductId::new("ghost"))).is_none());
}

#[tokio::test]
async fn aged_entries_are_refetched_when_configured() {
    sellerdesk_observability::init();
    let service = Arc::new(FakeService::new());
    let dash = Dashboard::with_cache(
        Arc::clone(&service),
        new_cache(),
        CacheConfig::stale_after(chrono::Duration::milliseconds(1)),
    );

    dash.queries.categories().await.unwrap();
    tokio::time::sleep(StdDuration::from_millis(20)).await;
    dash.queries.categories().await.unwrap();

    assert_eq!(
        service.calls(),
        vec!["list_categories".to_string(), "list_categories".to_string()]
    );
}

#[tokio::test]
async fn reset_drops_every_entry() {
    let (service, dash) = dashboard(FakeService::new());
    dash.queries.profile().await.unwrap();
    dash.queries.categories().await.unwrap();
    assert_eq!(dash.cache().keys().len(), 2);

    dash.queries.reset();
    assert!(dash.cache().keys().is_empty());

    dash.queries.profile().await.unwrap();
    assert_eq!(service.call_count(), 3);
}

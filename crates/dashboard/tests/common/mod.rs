#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use async_trait::async_trait;

use sellerdesk_cache::{CacheConfig, InMemoryQueryCache, QueryCache};
use sellerdesk_client::{ApiError, AttachmentUpload, ProductService};
use sellerdesk_core::{AttachmentId, CategoryId, ProductId, SellerId};
use sellerdesk_dashboard::{Dashboard, QueryData, QueryKey, SharedCache};
use sellerdesk_products::{
    Attachment, Category, CreateProduct, DailyViews, EditProduct, MetricKind, Product,
    ProductFilter, ProductStatus, Seller, SignUp,
};

pub fn seller() -> Seller {
    Seller {
        id: SellerId::new("seller-1"),
        name: "Ana".to_string(),
        phone: "+55 11 99999-0000".to_string(),
        email: "ana@example.com".to_string(),
        avatar: None,
    }
}

pub fn product(id: &str, status: ProductStatus) -> Product {
    Product {
        id: ProductId::new(id),
        title: "Leather sofa".to_string(),
        description: "Three seats, solid wood frame".to_string(),
        price_in_cents: 120_090,
        status,
        owner: seller(),
        category: Category {
            id: CategoryId::new("furniture"),
            title: "Furniture".to_string(),
            slug: "furniture".to_string(),
        },
        attachments: vec![
            Attachment {
                id: AttachmentId::new("att-1"),
                url: "https://cdn.example.com/att-1.png".to_string(),
            },
            Attachment {
                id: AttachmentId::new("att-2"),
                url: "https://cdn.example.com/att-2.png".to_string(),
            },
        ],
    }
}

/// In-memory stand-in for the remote marketplace API.
///
/// Records every call. Status responses deliberately omit attachments, like a
/// mutation endpoint that returns a slimmer representation.
#[derive(Default)]
pub struct FakeService {
    calls: Mutex<Vec<String>>,
    products: Mutex<HashMap<ProductId, Product>>,
    metrics: Mutex<HashMap<MetricKind, u64>>,
    failure: Mutex<Option<ApiError>>,
    gates: Mutex<HashMap<ProductStatus, Arc<Notify>>>,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(self, product: Product) -> Self {
        self.products
            .lock()
            .unwrap()
            .insert(product.id.clone(), product);
        self
    }

    pub fn with_metric(self, kind: MetricKind, amount: u64) -> Self {
        self.metrics.lock().unwrap().insert(kind, amount);
        self
    }

    /// Make every subsequent call fail with `err`.
    pub fn fail_with(&self, err: ApiError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn set_metric(&self, kind: MetricKind, amount: u64) {
        self.metrics.lock().unwrap().insert(kind, amount);
    }

    /// Hold every `change_status` response for `status` until [`Self::release`].
    pub fn gate(&self, status: ProductStatus) {
        self.gates
            .lock()
            .unwrap()
            .insert(status, Arc::new(Notify::new()));
    }

    /// Let one held `change_status` response for `status` through.
    pub fn release(&self, status: ProductStatus) {
        if let Some(gate) = self.gates.lock().unwrap().get(&status) {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn stored(&self, product_id: &ProductId) -> Result<Product, ApiError> {
        self.products
            .lock()
            .unwrap()
            .get(product_id)
            .cloned()
            .ok_or_else(|| ApiError::Api(404, "Product not found.".to_string()))
    }
}

#[async_trait]
impl ProductService for FakeService {
    async fn change_status(
        &self,
        product_id: &ProductId,
        status: ProductStatus,
    ) -> Result<Product, ApiError> {
        self.record(format!("change_status {product_id} {status}"))?;

        let gate = self.gates.lock().unwrap().get(&status).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let mut product = self
            .stored(product_id)
            .unwrap_or_else(|_| product(product_id.as_str(), status));
        product.status = status;
        self.products
            .lock()
            .unwrap()
            .insert(product_id.clone(), product.clone());

        Ok(Product {
            attachments: vec![],
            ..product
        })
    }

    async fn get_product(&self, product_id: &ProductId) -> Result<Product, ApiError> {
        self.record(format!("get_product {product_id}"))?;
        self.stored(product_id)
    }

    async fn list_seller_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        self.record(format!("list_seller_products {:?}", filter.status))?;
        let mut products: Vec<_> = self
            .products
            .lock()
            .unwrap()
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        products.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(products)
    }

    async fn create_product(&self, body: &CreateProduct) -> Result<Product, ApiError> {
        self.record(format!("create_product {}", body.title))?;
        let created = Product {
            title: body.title.clone(),
            price_in_cents: body.price_in_cents,
            ..product("p-new", ProductStatus::Available)
        };
        self.products
            .lock()
            .unwrap()
            .insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn edit_product(
        &self,
        product_id: &ProductId,
        body: &EditProduct,
    ) -> Result<Product, ApiError> {
        self.record(format!("edit_product {product_id}"))?;
        let mut stored = self.stored(product_id)?;
        stored.title = body.title.clone();
        stored.description = body.description.clone();
        stored.price_in_cents = body.price_in_cents;
        self.products
            .lock()
            .unwrap()
            .insert(product_id.clone(), stored.clone());
        Ok(stored)
    }

    async fn upload_attachments(
        &self,
        files: Vec<AttachmentUpload>,
    ) -> Result<Vec<Attachment>, ApiError> {
        self.record(format!("upload_attachments {}", files.len()))?;
        Ok(files
            .iter()
            .enumerate()
            .map(|(i, f)| Attachment {
                id: AttachmentId::new(format!("upload-{i}")),
                url: format!("https://cdn.example.com/{}", f.file_name),
            })
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.record("list_categories".to_string())?;
        Ok(vec![product("p-0", ProductStatus::Available).category])
    }

    async fn get_profile(&self) -> Result<Seller, ApiError> {
        self.record("get_profile".to_string())?;
        Ok(seller())
    }

    async fn sign_up(&self, body: &SignUp) -> Result<Seller, ApiError> {
        self.record(format!("sign_up {}", body.email))?;
        Ok(Seller {
            name: body.name.clone(),
            email: body.email.clone(),
            ..seller()
        })
    }

    async fn metric(&self, kind: MetricKind) -> Result<u64, ApiError> {
        self.record(format!("metric {kind:?}"))?;
        Ok(self.metrics.lock().unwrap().get(&kind).copied().unwrap_or(0))
    }

    async fn views_per_day(&self) -> Result<Vec<DailyViews>, ApiError> {
        self.record("views_per_day".to_string())?;
        Ok(vec![])
    }
}

pub fn new_cache() -> SharedCache {
    Arc::new(InMemoryQueryCache::<QueryKey, QueryData>::new())
}

pub fn dashboard(service: FakeService) -> (Arc<FakeService>, Dashboard<FakeService>) {
    sellerdesk_observability::init();

    let service = Arc::new(service);
    let dashboard = Dashboard::with_cache(Arc::clone(&service), new_cache(), CacheConfig::default());
    (service, dashboard)
}

/// Seed a product entry plus every status-dependent and unrelated key.
pub fn seed_cache(cache: &SharedCache, cached: &Product) {
    cache.set(QueryKey::Product(cached.id.clone()), QueryData::Product(cached.clone()));
    cache.set(
        QueryKey::Products(ProductFilter::default()),
        QueryData::Products(vec![cached.clone()]),
    );
    cache.set(
        QueryKey::Products(ProductFilter::with_status(ProductStatus::Available)),
        QueryData::Products(vec![]),
    );
    cache.set(QueryKey::Metric(MetricKind::AvailableProducts), QueryData::Amount(3));
    cache.set(QueryKey::Metric(MetricKind::SoldProducts), QueryData::Amount(1));
    cache.set(QueryKey::Metric(MetricKind::Views), QueryData::Amount(90));
    cache.set(QueryKey::Categories, QueryData::Categories(vec![cached.category.clone()]));
    cache.set(QueryKey::Profile, QueryData::Profile(seller()));
}

pub fn is_stale(cache: &SharedCache, key: &QueryKey) -> bool {
    cache.get(key).map(|entry| entry.stale).unwrap_or(false)
}

pub fn cached_product(cache: &SharedCache, product_id: &ProductId) -> Option<Product> {
    match cache.get(&QueryKey::Product(product_id.clone()))?.value {
        QueryData::Product(p) => Some(p),
        _ => None,
    }
}

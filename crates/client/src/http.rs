//! `reqwest`-backed implementation of [`ProductService`].

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use sellerdesk_core::ProductId;
use sellerdesk_products::{
    Attachment, Category, CreateProduct, DailyViews, EditProduct, MetricKind, Product,
    ProductFilter, ProductStatus, Seller, SignUp,
};

use crate::config::ClientConfig;
use crate::dto::{
    self, AmountEnvelope, AttachmentsEnvelope, CategoriesEnvelope, ProductEnvelope,
    ProductsEnvelope, SellerEnvelope, ViewsPerDayEnvelope,
};
use crate::error::ApiError;
use crate::service::{AttachmentUpload, ProductService};

/// HTTP client for the remote marketplace API.
#[derive(Debug, Clone)]
pub struct HttpProductService {
    config: ClientConfig,
    http: reqwest::Client,
}

impl HttpProductService {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request<'a>(
        &self,
        method: Method,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Result<RequestBuilder, ApiError> {
        let mut req = self.http.request(method, self.config.endpoint(segments)?);

        if let Some(token) = &self.config.token {
            req = req.bearer_auth(token);
        }

        Ok(req)
    }

    /// Send a request and decode the 2xx body; everything else is an error.
    async fn send<T>(&self, req: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let resp = req
            .send()
            .await
            .inspect_err(|e| tracing::warn!("request to marketplace API failed: {e}"))?;

        let resp = ensure_success(resp).await?;

        Ok(resp.json::<T>().await?)
    }
}

async fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if status == StatusCode::UNAUTHORIZED {
        tracing::warn!("marketplace API rejected credentials (401)");
        return Err(ApiError::Unauthorized);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = dto::error_message(&body);
    tracing::warn!(status = status.as_u16(), %message, "marketplace API returned an error");

    Err(ApiError::Api(status.as_u16(), message))
}

#[async_trait]
impl ProductService for HttpProductService {
    async fn change_status(
        &self,
        product_id: &ProductId,
        status: ProductStatus,
    ) -> Result<Product, ApiError> {
        let req = self.request(
            Method::PATCH,
            ["products", product_id.as_str(), status.as_str()],
        )?;
        let envelope: ProductEnvelope = self.send(req).await?;
        Ok(envelope.product)
    }

    async fn get_product(&self, product_id: &ProductId) -> Result<Product, ApiError> {
        let req = self.request(Method::GET, ["products", product_id.as_str()])?;
        let envelope: ProductEnvelope = self.send(req).await?;
        Ok(envelope.product)
    }

    async fn list_seller_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        let req = self
            .request(Method::GET, ["products", "me"])?
            .query(&filter.query_pairs());
        let envelope: ProductsEnvelope = self.send(req).await?;
        Ok(envelope.products)
    }

    async fn create_product(&self, body: &CreateProduct) -> Result<Product, ApiError> {
        let req = self.request(Method::POST, ["products"])?.json(body);
        let envelope: ProductEnvelope = self.send(req).await?;
        Ok(envelope.product)
    }

    async fn edit_product(
        &self,
        product_id: &ProductId,
        body: &EditProduct,
    ) -> Result<Product, ApiError> {
        let req = self
            .request(Method::PUT, ["products", product_id.as_str()])?
            .json(body);
        let envelope: ProductEnvelope = self.send(req).await?;
        Ok(envelope.product)
    }

    async fn upload_attachments(
        &self,
        files: Vec<AttachmentUpload>,
    ) -> Result<Vec<Attachment>, ApiError> {
        if files.is_empty() {
            return Err(ApiError::InvalidRequest("no files to upload".to_string()));
        }

        let mut form = reqwest::multipart::Form::new();
        for file in files {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)?;
            form = form.part("files", part);
        }

        let req = self.request(Method::POST, ["attachments"])?.multipart(form);
        let envelope: AttachmentsEnvelope = self.send(req).await?;
        Ok(envelope.attachments)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let envelope: CategoriesEnvelope =
            self.send(self.request(Method::GET, ["categories"])?).await?;
        Ok(envelope.categories)
    }

    async fn get_profile(&self) -> Result<Seller, ApiError> {
        let envelope: SellerEnvelope = self.send(self.request(Method::GET, ["sellers", "me"])?).await?;
        Ok(envelope.seller)
    }

    async fn sign_up(&self, body: &SignUp) -> Result<Seller, ApiError> {
        let req = self.request(Method::POST, ["sellers"])?.json(body);
        let envelope: SellerEnvelope = self.send(req).await?;
        Ok(envelope.seller)
    }

    async fn metric(&self, kind: MetricKind) -> Result<u64, ApiError> {
        let segments = kind.path().split('/').filter(|s| !s.is_empty());
        let envelope: AmountEnvelope = self.send(self.request(Method::GET, segments)?).await?;
        Ok(envelope.amount)
    }

    async fn views_per_day(&self) -> Result<Vec<DailyViews>, ApiError> {
        let envelope: ViewsPerDayEnvelope = self
            .send(self.request(Method::GET, ["sellers", "metrics", "views", "days"])?)
            .await?;
        Ok(envelope.views_per_day)
    }
}

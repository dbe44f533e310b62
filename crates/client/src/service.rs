//! The remote service seam.

use std::sync::Arc;

use async_trait::async_trait;

use sellerdesk_core::ProductId;
use sellerdesk_products::{
    Attachment, Category, CreateProduct, DailyViews, EditProduct, MetricKind, Product,
    ProductFilter, ProductStatus, Seller, SignUp,
};

use crate::error::ApiError;

/// A file to upload as a product attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Operations offered by the remote marketplace API.
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// `PATCH /products/{id}/{status}`; returns the full updated product.
    async fn change_status(
        &self,
        product_id: &ProductId,
        status: ProductStatus,
    ) -> Result<Product, ApiError>;

    async fn get_product(&self, product_id: &ProductId) -> Result<Product, ApiError>;

    async fn list_seller_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError>;

    async fn create_product(&self, body: &CreateProduct) -> Result<Product, ApiError>;

    async fn edit_product(
        &self,
        product_id: &ProductId,
        body: &EditProduct,
    ) -> Result<Product, ApiError>;

    async fn upload_attachments(
        &self,
        files: Vec<AttachmentUpload>,
    ) -> Result<Vec<Attachment>, ApiError>;

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    async fn get_profile(&self) -> Result<Seller, ApiError>;

    async fn sign_up(&self, body: &SignUp) -> Result<Seller, ApiError>;

    /// Counter for the last 30 days.
    async fn metric(&self, kind: MetricKind) -> Result<u64, ApiError>;

    async fn views_per_day(&self) -> Result<Vec<DailyViews>, ApiError>;
}

#[async_trait]
impl<S> ProductService for Arc<S>
where
    S: ProductService + ?Sized,
{
    async fn change_status(
        &self,
        product_id: &ProductId,
        status: ProductStatus,
    ) -> Result<Product, ApiError> {
        (**self).change_status(product_id, status).await
    }

    async fn get_product(&self, product_id: &ProductId) -> Result<Product, ApiError> {
        (**self).get_product(product_id).await
    }

    async fn list_seller_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        (**self).list_seller_products(filter).await
    }

    async fn create_product(&self, body: &CreateProduct) -> Result<Product, ApiError> {
        (**self).create_product(body).await
    }

    async fn edit_product(
        &self,
        product_id: &ProductId,
        body: &EditProduct,
    ) -> Result<Product, ApiError> {
        (**self).edit_product(product_id, body).await
    }

    async fn upload_attachments(
        &self,
        files: Vec<AttachmentUpload>,
    ) -> Result<Vec<Attachment>, ApiError> {
        (**self).upload_attachments(files).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        (**self).list_categories().await
    }

    async fn get_profile(&self) -> Result<Seller, ApiError> {
        (**self).get_profile().await
    }

    async fn sign_up(&self, body: &SignUp) -> Result<Seller, ApiError> {
        (**self).sign_up(body).await
    }

    async fn metric(&self, kind: MetricKind) -> Result<u64, ApiError> {
        (**self).metric(kind).await
    }

    async fn views_per_day(&self) -> Result<Vec<DailyViews>, ApiError> {
        (**self).views_per_day().await
    }
}

//! Product create/edit mutations and their cache policies.

use thiserror::Error;

use sellerdesk_client::{ApiError, AttachmentUpload, ProductService};
use sellerdesk_core::{DomainError, ProductId};
use sellerdesk_products::{Attachment, CreateProduct, EditProduct, MetricKind, Product, Seller, SignUp};

use crate::keys::{invalidate_scopes, KeyScope, QueryData, QueryKey, SharedCache};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MutationError {
    /// The request body failed local validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] DomainError),
    #[error(transparent)]
    Remote(#[from] ApiError),
}

pub struct ProductMutations<S> {
    service: S,
    cache: SharedCache,
}

impl<S> ProductMutations<S>
where
    S: ProductService,
{
    pub fn new(service: S, cache: SharedCache) -> Self {
        Self { service, cache }
    }

    /// Create a listing. New products start `available`, so every listing and
    /// the available counter go stale.
    pub async fn create_product(&self, body: &CreateProduct) -> Result<Product, MutationError> {
        body.validate()?;

        let product = self.service.create_product(body).await?;

        let marked = invalidate_scopes(
            self.cache.as_ref(),
            &[
                KeyScope::AllListings,
                KeyScope::Exact(QueryKey::Metric(MetricKind::AvailableProducts)),
            ],
        );
        tracing::info!(product_id = %product.id, marked, "product created");

        Ok(product)
    }

    /// Edit non-status fields. The response replaces the cached product and
    /// listings go stale; counters are unaffected.
    pub async fn edit_product(
        &self,
        product_id: &ProductId,
        body: &EditProduct,
    ) -> Result<Product, MutationError> {
        body.validate()?;

        let product = self.service.edit_product(product_id, body).await?;

        self.cache.set(
            QueryKey::Product(product_id.clone()),
            QueryData::Product(product.clone()),
        );
        let marked = invalidate_scopes(self.cache.as_ref(), &[KeyScope::AllListings]);
        tracing::info!(%product_id, marked, "product edited");

        Ok(product)
    }

    /// Upload product images; the returned ids go into create/edit bodies.
    pub async fn upload_attachments(
        &self,
        files: Vec<AttachmentUpload>,
    ) -> Result<Vec<Attachment>, MutationError> {
        if files.is_empty() {
            return Err(DomainError::validation("select at least one file").into());
        }
        Ok(self.service.upload_attachments(files).await?)
    }

    pub async fn sign_up(&self, body: &SignUp) -> Result<Seller, MutationError> {
        body.validate()?;
        Ok(self.service.sign_up(body).await?)
    }
}

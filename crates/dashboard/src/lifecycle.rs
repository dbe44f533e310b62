//! Product status lifecycle controller.
//!
//! Validates a requested status change against the lifecycle table, sends it
//! to the remote service, and on success reconciles the shared cache:
//! - the cached product entry gets the confirmed status (all other fields kept)
//! - listings and the sold/available counters are marked stale
//!
//! On failure nothing in the cache changes. Requests are never retried,
//! queued or serialized; overlapping requests for one product resolve
//! last-write-wins in the cache.

use thiserror::Error;
use tokio::sync::watch;

use sellerdesk_client::{ApiError, ProductService};
use sellerdesk_core::ProductId;
use sellerdesk_products::{InvalidTransition, Product, ProductStatus};

use crate::keys::{invalidate_scopes, status_dependents, QueryData, QueryKey, SharedCache};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// Rejected locally from the last-known status; no request was sent.
    #[error("invalid transition: {0}")]
    InvalidTransition(#[from] InvalidTransition),
    /// The remote service refused or failed to apply the change.
    #[error("remote service rejected the status change: {0}")]
    RemoteRejected(#[source] ApiError),
}

impl LifecycleError {
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, LifecycleError::InvalidTransition(_))
    }

    pub fn is_remote_rejected(&self) -> bool {
        matches!(self, LifecycleError::RemoteRejected(_))
    }
}

/// Per-request lifecycle: `Idle -> Pending -> {Succeeded, Failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationPhase {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl MutationPhase {
    pub fn is_pending(&self) -> bool {
        *self == MutationPhase::Pending
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MutationPhase::Succeeded | MutationPhase::Failed)
    }
}

pub struct ProductLifecycleController<S> {
    service: S,
    cache: SharedCache,
}

impl<S> ProductLifecycleController<S>
where
    S: ProductService,
{
    pub fn new(service: S, cache: SharedCache) -> Self {
        Self { service, cache }
    }

    /// Status of the cached product entry, stale or not.
    pub fn last_known_status(&self, product_id: &ProductId) -> Option<ProductStatus> {
        let entry = self.cache.get(&QueryKey::Product(product_id.clone()))?;
        match entry.value {
            QueryData::Product(product) => Some(product.status),
            _ => None,
        }
    }

    /// Local precondition only. An unknown product passes; the remote decides.
    pub fn check_transition(
        &self,
        product_id: &ProductId,
        target: ProductStatus,
    ) -> Result<(), LifecycleError> {
        match self.last_known_status(product_id) {
            Some(current) => Ok(current.ensure_transition(target)?),
            None => Ok(()),
        }
    }

    /// Request a status change and reconcile the cache with the confirmed result.
    pub async fn request_status_change(
        &self,
        product_id: &ProductId,
        target: ProductStatus,
    ) -> Result<Product, LifecycleError> {
        if let Err(err) = self.check_transition(product_id, target) {
            tracing::debug!(%product_id, %target, "status change rejected locally: {err}");
            return Err(err);
        }

        let confirmed = match self.service.change_status(product_id, target).await {
            Ok(product) => product,
            Err(err) => {
                tracing::warn!(%product_id, %target, "status change rejected by remote: {err}");
                return Err(LifecycleError::RemoteRejected(err));
            }
        };

        self.reconcile(product_id, confirmed.status);

        tracing::info!(%product_id, status = %confirmed.status, "product status changed");
        Ok(confirmed)
    }

    /// Start a new tracked invocation.
    pub fn mutation(&self) -> StatusMutation<'_, S> {
        StatusMutation::new(self)
    }

    /// Merge the confirmed status into the cached product, then stale the
    /// status dependents.
    ///
    /// The merged entry is written fresh even if it was stale before: its
    /// status is now confirmed, but the other fields are whatever was cached
    /// and are not re-fetched until something invalidates the entry again.
    fn reconcile(&self, product_id: &ProductId, confirmed: ProductStatus) {
        let key = QueryKey::Product(product_id.clone());
        let merged = self.cache.update(&key, &|data| match data {
            QueryData::Product(cached) => QueryData::Product(cached.with_status(confirmed)),
            other => other.clone(),
        });

        let marked = invalidate_scopes(self.cache.as_ref(), &status_dependents());
        tracing::debug!(%product_id, merged, marked, "cache reconciled after status change");
    }
}

/// One tracked call to [`ProductLifecycleController::request_status_change`].
///
/// The phase can be watched while the request is in flight (e.g. to disable the
/// button that triggered it). A handle runs at most once; start a new one per
/// request.
pub struct StatusMutation<'a, S> {
    controller: &'a ProductLifecycleController<S>,
    phase: watch::Sender<MutationPhase>,
}

impl<'a, S> StatusMutation<'a, S>
where
    S: ProductService,
{
    fn new(controller: &'a ProductLifecycleController<S>) -> Self {
        let (phase, _) = watch::channel(MutationPhase::Idle);
        Self { controller, phase }
    }

    pub fn phase(&self) -> MutationPhase {
        *self.phase.borrow()
    }

    /// Receiver that observes phase changes, including the terminal one.
    pub fn subscribe(&self) -> watch::Receiver<MutationPhase> {
        self.phase.subscribe()
    }

    pub async fn run(
        self,
        product_id: &ProductId,
        target: ProductStatus,
    ) -> Result<Product, LifecycleError> {
        self.phase.send_replace(MutationPhase::Pending);

        let result = self.controller.request_status_change(product_id, target).await;

        let terminal = if result.is_ok() {
            MutationPhase::Succeeded
        } else {
            MutationPhase::Failed
        };
        self.phase.send_replace(terminal);

        result
    }
}

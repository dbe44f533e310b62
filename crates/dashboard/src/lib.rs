//! `sellerdesk-dashboard`
//!
//! **Responsibility:** Seller dashboard client state over the marketplace API.
//!
//! This crate provides:
//! - Stale-aware, cached reads of dashboard read models (`QueryClient`)
//! - The product status lifecycle controller (`ProductLifecycleController`)
//! - Create/edit product mutations with their cache policies
//!
//! The dashboard is a **thin shell** around the remote API: the API remains the
//! authority and the cache only holds disposable copies.

pub mod dashboard;
pub mod keys;
pub mod lifecycle;
pub mod mutations;
pub mod queries;

pub use dashboard::Dashboard;
pub use keys::{status_dependents, KeyScope, QueryData, QueryKey, SharedCache};
pub use lifecycle::{LifecycleError, MutationPhase, ProductLifecycleController, StatusMutation};
pub use mutations::{MutationError, ProductMutations};
pub use queries::{QueryClient, QueryError};

//! `sellerdesk-cache`: process-wide query cache with staleness flags.
//!
//! Entries are disposable copies of remote read models. The remote service is
//! the authority; the cache only decides whether a stored copy may be served
//! or must be re-fetched.

pub mod entry;
pub mod store;

pub use entry::{CacheConfig, CacheEntry};
pub use store::{InMemoryQueryCache, QueryCache};

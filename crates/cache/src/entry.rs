use chrono::{DateTime, Duration, Utc};

/// Staleness policy shared by readers of the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheConfig {
    /// Age after which an entry counts as stale even if nobody invalidated it.
    ///
    /// `None` keeps entries fresh until they are explicitly invalidated.
    pub stale_after: Option<Duration>,
}

impl CacheConfig {
    pub fn stale_after(age: Duration) -> Self {
        Self {
            stale_after: Some(age),
        }
    }
}

/// A cached value plus the metadata used to decide whether to re-fetch it.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    pub value: V,
    pub updated_at: DateTime<Utc>,
    /// Set by invalidation; cleared by the next write.
    pub stale: bool,
}

impl<V> CacheEntry<V> {
    pub fn new(value: V, updated_at: DateTime<Utc>) -> Self {
        Self {
            value,
            updated_at,
            stale: false,
        }
    }

    /// Whether the entry may be served without a re-fetch.
    pub fn is_fresh(&self, config: &CacheConfig, now: DateTime<Utc>) -> bool {
        if self.stale {
            return false;
        }
        match config.stale_after {
            Some(max) => now.signed_duration_since(self.updated_at) <= max,
            None => true,
        }
    }
}

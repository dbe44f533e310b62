use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::entry::CacheEntry;

/// Key/value store for disposable read models, with per-entry staleness.
///
/// Writes are last-write-wins per key. Readers decide freshness through
/// [`CacheEntry::is_fresh`].
pub trait QueryCache<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<CacheEntry<V>>;

    /// Store a fresh value, replacing any previous entry.
    fn set(&self, key: K, value: V);

    /// Rewrite an existing entry in place from its current value.
    ///
    /// Returns `false` (and writes nothing) when the key is absent.
    fn update(&self, key: &K, f: &dyn Fn(&V) -> V) -> bool;

    /// Mark every entry whose key matches `predicate` as stale.
    ///
    /// Returns the number of entries marked.
    fn invalidate(&self, predicate: &dyn Fn(&K) -> bool) -> usize;

    fn remove(&self, key: &K) -> Option<V>;

    fn keys(&self) -> Vec<K>;

    /// Drop every entry (e.g. on sign-out).
    fn clear(&self);
}

impl<K, V, S> QueryCache<K, V> for Arc<S>
where
    S: QueryCache<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<CacheEntry<V>> {
        (**self).get(key)
    }

    fn set(&self, key: K, value: V) {
        (**self).set(key, value)
    }

    fn update(&self, key: &K, f: &dyn Fn(&V) -> V) -> bool {
        (**self).update(key, f)
    }

    fn invalidate(&self, predicate: &dyn Fn(&K) -> bool) -> usize {
        (**self).invalidate(predicate)
    }

    fn remove(&self, key: &K) -> Option<V> {
        (**self).remove(key)
    }

    fn keys(&self) -> Vec<K> {
        (**self).keys()
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// In-memory query cache shared across the process.
#[derive(Debug)]
pub struct InMemoryQueryCache<K, V> {
    inner: RwLock<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> InMemoryQueryCache<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryQueryCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> QueryCache<K, V> for InMemoryQueryCache<K, V>
where
    K: Clone + Eq + Hash + core::fmt::Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<CacheEntry<V>> {
        let map = self.inner.read().ok()?;
        map.get(key).cloned()
    }

    fn set(&self, key: K, value: V) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(key, CacheEntry::new(value, Utc::now()));
        }
    }

    fn update(&self, key: &K, f: &dyn Fn(&V) -> V) -> bool {
        let mut map = match self.inner.write() {
            Ok(m) => m,
            Err(_) => return false,
        };

        match map.get_mut(key) {
            Some(entry) => {
                let next = f(&entry.value);
                *entry = CacheEntry::new(next, Utc::now());
                true
            }
            None => false,
        }
    }

    fn invalidate(&self, predicate: &dyn Fn(&K) -> bool) -> usize {
        let mut map = match self.inner.write() {
            Ok(m) => m,
            Err(_) => return 0,
        };

        let mut marked = 0;
        for (key, entry) in map.iter_mut() {
            if predicate(key) {
                entry.stale = true;
                marked += 1;
                tracing::debug!(?key, "cache entry marked stale");
            }
        }
        marked
    }

    fn remove(&self, key: &K) -> Option<V> {
        let mut map = self.inner.write().ok()?;
        map.remove(key).map(|entry| entry.value)
    }

    fn keys(&self) -> Vec<K> {
        match self.inner.read() {
            Ok(map) => map.keys().cloned().collect(),
            Err(_) => vec![],
        }
    }

    fn clear(&self) {
        if let Ok(mut map) = self.inner.write() {
            map.clear();
        }
    }
}

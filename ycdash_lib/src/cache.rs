//! In-memory TTL cache backed by `DashMap` for concurrent access.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

/// A single cached document with its expiration time.
struct CacheEntry<V> {
    value: Arc<V>,
    expires_at: Instant,
}

/// Thread-safe cache of decoded documents with time-to-live expiration.
///
/// Values are shared as `Arc<V>`, so views reading the same document do not
/// copy it. Expired entries are lazily evicted on the next `get` for that key.
pub struct MemoryCache<V> {
    store: DashMap<String, CacheEntry<V>>,
    ttl: Duration,
}

impl<V> MemoryCache<V> {
    /// Creates a new cache with the given time-to-live for entries.
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: DashMap::new(),
            ttl,
        }
    }

    /// Returns the cached value for `key`, or `None` if missing or expired.
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        let entry = self.store.get(key)?;
        if Instant::now() > entry.expires_at {
            drop(entry);
            self.store.remove(key);
            return None;
        }
        Some(Arc::clone(&entry.value))
    }

    /// Inserts or overwrites an entry and returns the shared handle to it.
    pub fn set(&self, key: String, value: V) -> Arc<V> {
        let value = Arc::new(value);
        self.store.insert(
            key,
            CacheEntry {
                value: Arc::clone(&value),
                expires_at: Instant::now() + self.ttl,
            },
        );
        value
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Removes all entries from the cache.
    pub fn clear(&self) {
        self.store.clear();
    }
}

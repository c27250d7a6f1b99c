//! Response Cache Module
//!
//! TTL cache fronting the upstream game-data API. Misses are filled by the
//! caller-supplied fetch closure; entries expire lazily and are physically
//! removed by the background sweep task.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::CacheEntry;
use crate::error::Result;

// == Response Cache ==
/// In-memory key/value store of upstream responses with TTL expiry.
#[derive(Debug)]
pub struct ResponseCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// TTL in seconds applied when `set` is called without an explicit TTL
    default_ttl: u64,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a new ResponseCache with the given default TTL in seconds.
    pub fn new(default_ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` for absent or expired entries. Expired entries are
    /// ignored, not removed; a miss has no side effect on the cache.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => Some(entry.value.clone()),
            _ => None,
        }
    }

    // == Set ==
    /// Stores a value with an expiry of now + TTL.
    ///
    /// Overwrites any existing entry for the key and resets its expiry.
    pub fn set(&mut self, key: String, value: Value, ttl: Option<u64>) {
        let effective_ttl = ttl.unwrap_or(self.default_ttl);
        self.entries.insert(key, CacheEntry::new(value, effective_ttl));
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Shared Cache ==
/// Clone-able handle to a process-wide [`ResponseCache`].
///
/// Constructed once at startup and injected wherever caching is needed, so
/// tests can instantiate isolated caches instead of sharing a global.
#[derive(Debug, Clone)]
pub struct SharedCache {
    inner: Arc<RwLock<ResponseCache>>,
}

impl SharedCache {
    /// Creates a new shared cache with the given default TTL in seconds.
    pub fn new(default_ttl: u64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ResponseCache::new(default_ttl))),
        }
    }

    /// Returns the cached value for `key`, if present and fresh.
    pub async fn get(&self, key: &str) -> Option<Value> {
        self.inner.read().await.get(key)
    }

    /// Stores `value` under `key` with the default TTL.
    pub async fn set(&self, key: String, value: Value) {
        self.inner.write().await.set(key, value, None);
    }

    // == Get Or Fetch ==
    /// Returns the cached value for `key`, fetching it on a miss.
    ///
    /// On a miss the fetch closure runs and its result is cached before being
    /// returned. Fetch failures propagate to the caller and do not populate
    /// the cache, so the next call retries the fetch.
    ///
    /// The lock is not held across the fetch await; two callers racing on the
    /// same missing key may both fetch, and the last write wins. That is
    /// acceptable because entries are idempotent re-fetches of upstream data.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Result<Value>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value>>,
    {
        if let Some(value) = self.inner.read().await.get(key) {
            debug!("cache hit for {}", key);
            return Ok(value);
        }

        debug!("cache miss for {}", key);
        let value = fetch().await?;

        self.inner
            .write()
            .await
            .set(key.to_string(), value.clone(), None);

        Ok(value)
    }

    /// Removes expired entries, returning how many were dropped.
    pub async fn cleanup_expired(&self) -> usize {
        self.inner.write().await.cleanup_expired()
    }

    /// Returns the current number of entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

//! Cache-aside gateway
//!
//! Wraps a [`CacheStore`] so that store failures never reach the engine:
//! a failed read is a miss and a failed write is dropped. Both are logged.

use crate::ports::cache_store::{CacheStore, CacheStoreError};
use resolver_domain::CacheKey;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Fail-open view over a cache store
pub struct CacheGateway<S: CacheStore + ?Sized> {
    store: Arc<S>,
}

impl<S: CacheStore + ?Sized> Clone for CacheGateway<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: CacheStore + ?Sized> CacheGateway<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Read a cached answer. Store errors are treated as a miss.
    pub async fn lookup(&self, key: &CacheKey) -> Option<String> {
        match self.store.get(key.as_str()).await {
            Ok(Some(value)) => {
                debug!("Cache hit for {}", key);
                Some(value)
            }
            Ok(None) => {
                debug!("Cache miss for {}", key);
                None
            }
            Err(e) => {
                warn!("Cache read failed, treating as miss: {}", e);
                None
            }
        }
    }

    /// Persist an answer with a TTL. Best effort.
    pub async fn store(&self, key: &CacheKey, value: &str, ttl: Duration) {
        match self.store.set_ex(key.as_str(), value, ttl).await {
            Ok(()) => debug!("Cached {} for {}s", key, ttl.as_secs()),
            Err(e) => warn!("Cache write failed, answer not cached: {}", e),
        }
    }

    /// Whether the store answers a PING
    pub async fn ping(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!("Cache store not reachable: {}", e);
                false
            }
        }
    }

    /// Drop every entry in the store. Unlike reads and writes, this reports failure.
    pub async fn flush(&self) -> Result<(), CacheStoreError> {
        self.store.flush().await
    }
}

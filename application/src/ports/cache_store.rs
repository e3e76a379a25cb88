//! Cache store port
//!
//! Defines the key-value store with expiry that backs the cache-aside layer.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during cache store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheStoreError {
    #[error("Cache store unreachable: {0}")]
    Unavailable(String),

    #[error("Cache command failed: {0}")]
    Command(String),
}

/// Network key-value store with per-entry TTL
///
/// Implementations report failures honestly; swallowing them is the job of
/// [`CacheGateway`](crate::cache_gateway::CacheGateway).
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// `GET key`
    async fn get(&self, key: &str) -> Result<Option<String>, CacheStoreError>;

    /// `SET key value EX ttl`
    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheStoreError>;

    /// `PING`
    async fn ping(&self) -> Result<(), CacheStoreError>;

    /// `FLUSHDB`
    async fn flush(&self) -> Result<(), CacheStoreError>;
}

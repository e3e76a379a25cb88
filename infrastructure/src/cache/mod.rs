//! Cache store adapters
//!
//! Implements the `CacheStore` port on Redis.

pub mod redis_store;

pub use redis_store::{DEFAULT_CACHE_TIMEOUT, RECONNECT_BACKOFF, RedisCacheStore, RedisSettings};

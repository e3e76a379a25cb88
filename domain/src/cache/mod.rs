//! Cache-aside domain concepts
//!
//! The cache is purely an optimization: a key is derived from the prompt,
//! looked up before any backend work, and written after a cacheable
//! resolution. Expiry is owned by the store.

mod key;

pub use key::{CacheKey, DEFAULT_CACHE_TTL};

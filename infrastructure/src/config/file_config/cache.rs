//! Cache store configuration from TOML (`[cache]` section)

use crate::cache::{DEFAULT_CACHE_TIMEOUT, RedisSettings};
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw cache configuration from TOML
///
/// # Example
///
/// ```toml
/// [cache]
/// host = "redis-12345.cloud.example.com"
/// port = 12345
/// password = "..."   # prefer CACHE_PASSWORD in the environment
/// tls = true
/// ttl_secs = 3600
/// timeout_ms = 2000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    pub host: Option<String>,
    pub port: u16,
    pub username: String,
    pub password: Option<String>,
    /// Use `rediss://`
    pub tls: bool,
    /// Lifetime of cached answers
    pub ttl_secs: u64,
    /// Deadline for connecting and for each cache command
    pub timeout_ms: u64,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: 6379,
            username: "default".to_string(),
            password: None,
            tls: false,
            ttl_secs: 3600,
            timeout_ms: DEFAULT_CACHE_TIMEOUT.as_millis() as u64,
        }
    }
}

impl FileCacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Connection settings; host and password are required
    pub fn to_redis_settings(&self) -> Result<RedisSettings, ConfigError> {
        let host = required(self.host.as_deref()).ok_or(ConfigError::Missing {
            field: "cache.host",
            env: "CACHE_HOST",
        })?;
        let password = required(self.password.as_deref()).ok_or(ConfigError::Missing {
            field: "cache.password",
            env: "CACHE_PASSWORD",
        })?;
        if self.ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "cache.ttl_secs must be greater than zero".to_string(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "cache.timeout_ms must be greater than zero".to_string(),
            ));
        }

        Ok(RedisSettings {
            host: host.to_string(),
            port: self.port,
            username: self.username.clone(),
            password: password.to_string(),
            tls: self.tls,
            timeout: Duration::from_millis(self.timeout_ms),
        })
    }
}

fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

//! Redis cache store
//!
//! The connection is opened on first use and re-used through a
//! [`ConnectionManager`], which reconnects by itself after a drop. A Redis
//! that is down at startup therefore costs a warning, not the process.
//!
//! Every command is bounded by [`RedisSettings::timeout`]. After a failed
//! connect, commands fail immediately for [`RECONNECT_BACKOFF`] instead of
//! dialing again on every lookup.

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, RedisResult};
use resolver_application::{CacheStore, CacheStoreError};
use std::future::Future;
use std::time::Duration;
use tokio::sync::{Mutex, OnceCell};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Default bound for connecting and for each command
pub const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_secs(2);

/// Quiet period after a failed connect
pub const RECONNECT_BACKOFF: Duration = Duration::from_secs(30);

/// Where and how to reach Redis
#[derive(Clone, PartialEq, Eq)]
pub struct RedisSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Connect with `rediss://`
    pub tls: bool,
    /// Deadline for the connect handshake and for every command
    pub timeout: Duration,
}

impl RedisSettings {
    /// `redis[s]://<username>:<password>@<host>:<port>`
    pub fn dsn(&self) -> String {
        self.format_dsn(&urlencoding::encode(&self.password))
    }

    /// DSN with the password masked, for logs and `--show-config`
    pub fn redacted_dsn(&self) -> String {
        self.format_dsn("****")
    }

    fn format_dsn(&self, password: &str) -> String {
        let scheme = if self.tls { "rediss" } else { "redis" };
        format!(
            "{}://{}:{}@{}:{}",
            scheme,
            urlencoding::encode(&self.username),
            password,
            self.host,
            self.port
        )
    }
}

impl std::fmt::Debug for RedisSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSettings")
            .field("dsn", &self.redacted_dsn())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// [`CacheStore`] backed by a Redis server
pub struct RedisCacheStore {
    client: redis::Client,
    settings: RedisSettings,
    connection: OnceCell<ConnectionManager>,
    last_failure: Mutex<Option<Instant>>,
}

impl RedisCacheStore {
    /// Prepare a store; no connection is made until the first command.
    pub fn new(settings: RedisSettings) -> Result<Self, CacheStoreError> {
        let client = redis::Client::open(settings.dsn())
            .map_err(|e| CacheStoreError::Unavailable(format!("invalid Redis URL: {}", e)))?;
        Ok(Self {
            client,
            settings,
            connection: OnceCell::new(),
            last_failure: Mutex::new(None),
        })
    }

    pub fn settings(&self) -> &RedisSettings {
        &self.settings
    }

    async fn connection(&self) -> Result<ConnectionManager, CacheStoreError> {
        if let Some(manager) = self.connection.get() {
            return Ok(manager.clone());
        }

        let mut last_failure = self.last_failure.lock().await;
        if let Some(failed_at) = *last_failure {
            let since = failed_at.elapsed();
            if since < RECONNECT_BACKOFF {
                return Err(CacheStoreError::Unavailable(format!(
                    "cache unreachable, next connect attempt in {}s",
                    (RECONNECT_BACKOFF - since).as_secs().max(1)
                )));
            }
        }

        match self.connection.get_or_try_init(|| self.connect()).await {
            Ok(manager) => {
                *last_failure = None;
                Ok(manager.clone())
            }
            Err(e) => {
                warn!(
                    "Cache connect failed, retrying in {}s: {}",
                    RECONNECT_BACKOFF.as_secs(),
                    e
                );
                *last_failure = Some(Instant::now());
                Err(e)
            }
        }
    }

    async fn connect(&self) -> Result<ConnectionManager, CacheStoreError> {
        debug!("Connecting to {}", self.settings.redacted_dsn());
        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(0)
            .set_connection_timeout(self.settings.timeout)
            .set_response_timeout(self.settings.timeout);

        let manager = tokio::time::timeout(
            self.settings.timeout,
            ConnectionManager::new_with_config(self.client.clone(), config),
        )
        .await
        .map_err(|_| {
            CacheStoreError::Unavailable(format!(
                "connection to {}:{} timed out",
                self.settings.host, self.settings.port
            ))
        })?
        .map_err(|e| CacheStoreError::Unavailable(e.to_string()))?;

        info!(
            "Connected to cache at {}:{}",
            self.settings.host, self.settings.port
        );
        Ok(manager)
    }

    /// Await a command, giving up after the configured timeout
    async fn bounded<T>(
        &self,
        command: &'static str,
        reply: impl Future<Output = RedisResult<T>>,
    ) -> Result<T, CacheStoreError> {
        tokio::time::timeout(self.settings.timeout, reply)
            .await
            .map_err(|_| {
                CacheStoreError::Unavailable(format!(
                    "{} got no reply within {}ms",
                    command,
                    self.settings.timeout.as_millis()
                ))
            })?
            .map_err(command_error)
    }
}

fn command_error(e: redis::RedisError) -> CacheStoreError {
    if e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout() {
        CacheStoreError::Unavailable(e.to_string())
    } else {
        CacheStoreError::Command(e.to_string())
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheStoreError> {
        let mut conn = self.connection().await?;
        self.bounded("GET", conn.get(key)).await
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheStoreError> {
        let mut conn = self.connection().await?;
        self.bounded("SET", conn.set_ex(key, value, ttl.as_secs().max(1)))
            .await
    }

    async fn ping(&self) -> Result<(), CacheStoreError> {
        let mut conn = self.connection().await?;
        let _pong: String = self
            .bounded("PING", redis::cmd("PING").query_async(&mut conn))
            .await?;
        Ok(())
    }

    async fn flush(&self) -> Result<(), CacheStoreError> {
        let mut conn = self.connection().await?;
        let () = self
            .bounded("FLUSHDB", redis::cmd("FLUSHDB").query_async(&mut conn))
            .await?;
        info!("Cache flushed");
        Ok(())
    }
}

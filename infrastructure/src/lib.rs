//! Infrastructure layer for prompt-resolver
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, the host resource watchdog, and
//! configuration loading.

pub mod backend;
pub mod cache;
pub mod config;
pub mod monitor;

// Re-export commonly used types
pub use backend::OllamaBackendClient;
pub use cache::{RedisCacheStore, RedisSettings};
pub use config::{
    ConfigError, ConfigLoader, ENV_BINDINGS, FileBackendConfig, FileCacheConfig, FileConfig,
    FileEngineConfig, FileMonitorConfig, FileOutputConfig, FileReplConfig, FileTimeoutsConfig,
};
pub use monitor::{MonitorConfig, ResourceMonitor};

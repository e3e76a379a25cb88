//! Configuration loading for prompt-resolver
//!
//! This module handles file I/O, environment bindings and merging of
//! configuration from multiple sources. The priority order (highest to lowest):
//!
//! 1. Environment variables (`BACKEND_HOST`, `CACHE_PASSWORD`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./resolver.toml` or `./.resolver.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/prompt-resolver/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    FileBackendConfig, FileCacheConfig, FileConfig, FileEngineConfig, FileMonitorConfig,
    FileOutputConfig, FileReplConfig, FileTimeoutsConfig,
};
pub use loader::{ConfigLoader, ENV_BINDINGS};

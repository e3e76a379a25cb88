//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into runtime settings
//! (engine, cache, backend, monitor) in one place, at startup.

mod backend;
mod cache;
mod engine;
mod monitor;
mod output;
mod repl;
mod timeouts;

pub use backend::FileBackendConfig;
pub use cache::FileCacheConfig;
pub use engine::FileEngineConfig;
pub use monitor::FileMonitorConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use timeouts::FileTimeoutsConfig;

use super::ConfigError;
use resolver_application::EngineConfig;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Inference backend location
    pub backend: FileBackendConfig,
    /// Shared answer cache
    pub cache: FileCacheConfig,
    /// Strategy and model roles
    pub engine: FileEngineConfig,
    /// Per-call time budgets
    pub timeouts: FileTimeoutsConfig,
    /// Host RAM watchdog
    pub monitor: FileMonitorConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Build the engine configuration
    pub fn to_engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let base = EngineConfig::default()
            .with_timeouts(self.timeouts.to_policy()?)
            .with_cache_ttl(self.cache.ttl());
        self.engine.apply(base)
    }

    /// Check every required and derived setting at once
    ///
    /// Run before any prompt is processed so a bad deployment fails fast.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.backend.base_url()?;
        self.cache.to_redis_settings()?;
        self.to_engine_config()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolver_domain::{Model, OutputFormat, ResolutionStrategy};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[backend]
host = "192.168.1.20"

[cache]
host = "redis.local"
port = 16379
password = "secret"
tls = true

[engine]
strategy = "routed"
committee = ["tinyllama", "mistral:7b"]

[timeouts]
heavy_secs = 120

[output]
format = "full"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/prompt-resolver/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.base_url().unwrap(), "http://192.168.1.20:11434");
        assert_eq!(config.cache.port, 16379);
        assert!(config.cache.tls);
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);

        let engine = config.to_engine_config().unwrap();
        assert_eq!(engine.strategy, ResolutionStrategy::Routed);
        assert_eq!(engine.committee.len(), 2);
        assert_eq!(engine.timeouts.heavy, Duration::from_secs(120));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.backend.host.is_none());
        assert_eq!(config.cache.ttl_secs, 3600);
        assert!(config.monitor.enabled);
        assert!(config.output.color);
        assert!(config.repl.show_progress);

        let engine = config.to_engine_config().unwrap();
        assert_eq!(engine.expert, Model::new("llama3:8b"));
        assert_eq!(engine.cache_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn test_defaults_fail_validation_on_required_fields() {
        let err = FileConfig::default().validate().unwrap_err();
        assert!(matches!(err, ConfigError::Missing { field: "backend.host", .. }));
    }
}

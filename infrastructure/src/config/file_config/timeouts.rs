//! Backend timeout configuration from TOML (`[timeouts]` section)

use crate::config::ConfigError;
use resolver_application::TimeoutPolicy;
use resolver_domain::Model;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Raw timeout configuration from TOML
///
/// # Example
///
/// ```toml
/// [timeouts]
/// light_secs = 30
/// heavy_secs = 300
///
/// [timeouts.models]
/// "mistral:7b" = 60
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTimeoutsConfig {
    /// Committee members, the simple-path model and the scout
    pub light_secs: u64,
    /// The cascade expert
    pub heavy_secs: u64,
    /// Per-model overrides in seconds
    pub models: BTreeMap<String, u64>,
}

impl Default for FileTimeoutsConfig {
    fn default() -> Self {
        Self {
            light_secs: 30,
            heavy_secs: 300,
            models: BTreeMap::new(),
        }
    }
}

impl FileTimeoutsConfig {
    pub fn to_policy(&self) -> Result<TimeoutPolicy, ConfigError> {
        if self.light_secs == 0 || self.heavy_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeouts must be greater than zero".to_string(),
            ));
        }

        let mut policy = TimeoutPolicy::default()
            .with_light(Duration::from_secs(self.light_secs))
            .with_heavy(Duration::from_secs(self.heavy_secs));
        for (name, secs) in &self.models {
            let model: Model = name.parse()?;
            policy = policy.with_override(model, Duration::from_secs(*secs));
        }
        Ok(policy)
    }
}

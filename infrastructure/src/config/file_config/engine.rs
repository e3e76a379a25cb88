//! Resolution engine configuration from TOML (`[engine]` section)

use crate::config::ConfigError;
use resolver_application::EngineConfig;
use resolver_domain::{ComplexityClassifier, Model, QuorumRule, ResolutionStrategy, ScoutAcceptance};
use serde::{Deserialize, Serialize};

/// Raw engine configuration from TOML
///
/// Every field is optional; unset fields keep the built-in defaults.
///
/// # Example
///
/// ```toml
/// [engine]
/// strategy = "majority"                           # majority | routed | cascade
/// rule = "majority"                               # majority | unanimous | atleast:2 | 66%
/// committee = ["tinyllama", "llama3:8b", "mistral:7b"]
/// primary = "tinyllama"
/// simple_model = "tinyllama"
/// scout = "tinyllama"
/// expert = "llama3:8b"
/// cascade_threshold = 150
/// complex_keywords = ["analyze", "compare"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEngineConfig {
    pub strategy: Option<String>,
    pub rule: Option<String>,
    pub committee: Option<Vec<String>>,
    /// Defaults to the first committee member when a committee is given
    pub primary: Option<String>,
    pub simple_model: Option<String>,
    pub scout: Option<String>,
    pub expert: Option<String>,
    /// Scout answers shorter than this many characters are accepted
    pub cascade_threshold: Option<usize>,
    pub complex_keywords: Option<Vec<String>>,
}

impl FileEngineConfig {
    /// Apply the configured values on top of `base`
    pub fn apply(&self, base: EngineConfig) -> Result<EngineConfig, ConfigError> {
        let mut config = base;

        if let Some(strategy) = &self.strategy {
            config.strategy = strategy.parse::<ResolutionStrategy>()?;
        }
        if let Some(rule) = &self.rule {
            config.rule = rule
                .parse::<QuorumRule>()
                .map_err(|e| ConfigError::Invalid(format!("engine.rule: {}", e)))?;
        }
        if let Some(committee) = &self.committee {
            let committee = committee
                .iter()
                .map(|name| name.parse::<Model>())
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(first) = committee.first() {
                config.primary = first.clone();
            }
            config.committee = committee;
        }
        if let Some(primary) = &self.primary {
            config.primary = primary.parse()?;
        }
        if let Some(model) = &self.simple_model {
            config.simple_model = model.parse()?;
        }
        if let Some(model) = &self.scout {
            config.scout = model.parse()?;
        }
        if let Some(model) = &self.expert {
            config.expert = model.parse()?;
        }
        if let Some(threshold) = self.cascade_threshold {
            config.acceptance = ScoutAcceptance::new(threshold);
        }
        if let Some(keywords) = &self.complex_keywords {
            config.classifier = ComplexityClassifier::new(keywords);
        }

        config.validate()?;
        Ok(config)
    }
}

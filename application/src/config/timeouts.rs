//! Backend call time budgets.
//!
//! Light models answer in seconds, heavy models can take minutes, so a
//! single global timeout would either cut heavy models off or let a dead
//! light model stall a whole committee.

use resolver_domain::Model;
use std::collections::HashMap;
use std::time::Duration;

/// Expected latency class of a model in a given role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    /// Committee members, the simple-path model and the scout
    Light,
    /// The cascade expert
    Heavy,
}

/// Per-call timeout selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutPolicy {
    pub light: Duration,
    pub heavy: Duration,
    /// Per-model overrides, taking precedence over the tier budget
    pub overrides: HashMap<Model, Duration>,
}

impl Default for TimeoutPolicy {
    fn default() -> Self {
        Self {
            light: Duration::from_secs(30),
            heavy: Duration::from_secs(300),
            overrides: HashMap::new(),
        }
    }
}

impl TimeoutPolicy {
    pub fn with_light(mut self, timeout: Duration) -> Self {
        self.light = timeout;
        self
    }

    pub fn with_heavy(mut self, timeout: Duration) -> Self {
        self.heavy = timeout;
        self
    }

    pub fn with_override(mut self, model: Model, timeout: Duration) -> Self {
        self.overrides.insert(model, timeout);
        self
    }

    /// Budget for calling `model` in a role of the given tier
    pub fn for_model(&self, model: &Model, tier: ModelTier) -> Duration {
        if let Some(timeout) = self.overrides.get(model) {
            return *timeout;
        }
        match tier {
            ModelTier::Light => self.light,
            ModelTier::Heavy => self.heavy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_light_and_heavy_budgets() {
        let policy = TimeoutPolicy::default();
        let model = Model::new("tinyllama");
        assert_eq!(policy.for_model(&model, ModelTier::Light), Duration::from_secs(30));
        assert_eq!(policy.for_model(&model, ModelTier::Heavy), Duration::from_secs(300));
    }

    #[test]
    fn test_override_wins_over_tier() {
        let heavy_member = Model::new("llama3:8b");
        let policy = TimeoutPolicy::default()
            .with_override(heavy_member.clone(), Duration::from_secs(120));
        assert_eq!(
            policy.for_model(&heavy_member, ModelTier::Light),
            Duration::from_secs(120)
        );
        assert_eq!(
            policy.for_model(&Model::new("tinyllama"), ModelTier::Light),
            Duration::from_secs(30)
        );
    }
}

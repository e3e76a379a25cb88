//! Resolution engine configuration.
//!
//! [`EngineConfig`] is built once at startup (by the infrastructure config
//! loader or by hand in tests) and handed to
//! [`ResolvePromptUseCase`](crate::use_cases::resolve_prompt::ResolvePromptUseCase).
//! The engine never reads the environment or globals.

use super::timeouts::TimeoutPolicy;
use resolver_domain::{
    ComplexityClassifier, DEFAULT_CACHE_TTL, DomainError, Model, QuorumRule, ResolutionStrategy,
    ScoutAcceptance,
};
use std::time::Duration;

/// Role assignment and reconciliation settings.
///
/// # Role Usage
///
/// | Field        | Majority | Routed | Cascade |
/// |--------------|----------|--------|---------|
/// | committee    | Yes      | Yes    | No      |
/// | primary      | Yes      | Yes    | No      |
/// | simple_model | No       | Yes    | No      |
/// | scout/expert | No       | No     | Yes     |
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub strategy: ResolutionStrategy,
    /// Agreement rule for committee votes
    pub rule: QuorumRule,
    /// Models asked in a majority vote, in committee order
    pub committee: Vec<Model>,
    /// Committee member whose answer is used when there is no agreement
    pub primary: Model,
    /// Cheap model for prompts classified as simple
    pub simple_model: Model,
    pub scout: Model,
    pub expert: Model,
    pub acceptance: ScoutAcceptance,
    pub classifier: ComplexityClassifier,
    pub timeouts: TimeoutPolicy,
    pub cache_ttl: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: ResolutionStrategy::default(),
            rule: QuorumRule::default(),
            committee: Model::default_committee(),
            primary: Model::default_light(),
            simple_model: Model::default_light(),
            scout: Model::default_light(),
            expert: Model::default_heavy(),
            acceptance: ScoutAcceptance::default(),
            classifier: ComplexityClassifier::default(),
            timeouts: TimeoutPolicy::default(),
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl EngineConfig {
    // ==================== Builder Methods ====================

    pub fn with_strategy(mut self, strategy: ResolutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_rule(mut self, rule: QuorumRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_committee(mut self, committee: Vec<Model>, primary: Model) -> Self {
        self.committee = committee;
        self.primary = primary;
        self
    }

    pub fn with_simple_model(mut self, model: Model) -> Self {
        self.simple_model = model;
        self
    }

    pub fn with_cascade(mut self, scout: Model, expert: Model) -> Self {
        self.scout = scout;
        self.expert = expert;
        self
    }

    pub fn with_acceptance(mut self, acceptance: ScoutAcceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_classifier(mut self, classifier: ComplexityClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_timeouts(mut self, timeouts: TimeoutPolicy) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    // ==================== Validation ====================

    /// Check the committee invariants: at least two members, primary among
    /// them, and a rule the committee can actually satisfy.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.committee.len() < 2 {
            return Err(DomainError::CommitteeTooSmall(self.committee.len()));
        }
        if !self.committee.contains(&self.primary) {
            return Err(DomainError::PrimaryNotInCommittee(self.primary.to_string()));
        }
        self.rule.check_reachable(self.committee.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_roles() {
        let config = EngineConfig::default();
        assert_eq!(config.strategy, ResolutionStrategy::Cascade);
        assert_eq!(config.scout, Model::new("tinyllama"));
        assert_eq!(config.expert, Model::new("llama3:8b"));
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn test_committee_of_one_is_rejected() {
        let config = EngineConfig::default()
            .with_committee(vec![Model::new("tinyllama")], Model::new("tinyllama"));
        assert_eq!(config.validate(), Err(DomainError::CommitteeTooSmall(1)));
    }

    #[test]
    fn test_primary_outside_committee_is_rejected() {
        let config = EngineConfig::default().with_committee(
            vec![Model::new("a"), Model::new("b")],
            Model::new("c"),
        );
        assert_eq!(
            config.validate(),
            Err(DomainError::PrimaryNotInCommittee("c".to_string()))
        );
    }

    #[test]
    fn test_rule_beyond_committee_size_is_rejected() {
        let config = EngineConfig::default().with_rule(QuorumRule::AtLeast(4));
        assert!(matches!(
            config.validate(),
            Err(DomainError::UnreachableRule { committee_size: 3, .. })
        ));
    }
}

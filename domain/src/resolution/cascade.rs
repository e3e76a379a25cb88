//! Tiered cascade (scout → expert)

use serde::{Deserialize, Serialize};

use super::answer::BackendAnswer;
use super::result::{ResolutionPath, ResolutionResult};

/// Scout answers shorter than this many characters are accepted as-is
pub const DEFAULT_CASCADE_THRESHOLD: usize = 150;

/// What to do after the scout has answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeDecision {
    /// Use the scout's answer
    Accept,
    /// Ask the expert
    Escalate,
}

/// Acceptance heuristic for scout answers
///
/// A successful answer strictly shorter than `threshold` characters is
/// taken as a terse, simple answer. Length is a proxy only; it says
/// nothing about correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutAcceptance {
    pub threshold: usize,
}

impl Default for ScoutAcceptance {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_CASCADE_THRESHOLD,
        }
    }
}

impl ScoutAcceptance {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    pub fn decide(&self, scout: &BackendAnswer) -> CascadeDecision {
        if scout.is_ok() && scout.char_len() < self.threshold {
            CascadeDecision::Accept
        } else {
            CascadeDecision::Escalate
        }
    }

    /// Result when the scout was accepted without escalation.
    pub fn accepted(scout: BackendAnswer) -> ResolutionResult {
        ResolutionResult {
            final_text: scout.text.clone(),
            verified: false,
            cacheable: scout.is_ok(),
            path: ResolutionPath::Scout,
            answers: vec![scout],
        }
    }

    /// Result after escalation.
    ///
    /// A reachable expert always overrides the scout. If the expert failed
    /// the scout's answer is used, cacheable only if the scout succeeded.
    pub fn escalated(scout: BackendAnswer, expert: BackendAnswer) -> ResolutionResult {
        let (final_text, cacheable, path) = if expert.is_ok() {
            (expert.text.clone(), true, ResolutionPath::Expert)
        } else {
            (scout.text.clone(), scout.is_ok(), ResolutionPath::ScoutFallback)
        };

        ResolutionResult {
            final_text,
            verified: false,
            cacheable,
            path,
            answers: vec![scout, expert],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Model;

    fn scout(text: &str) -> BackendAnswer {
        BackendAnswer::ok(Model::new("tinyllama"), text)
    }

    fn expert(text: &str) -> BackendAnswer {
        BackendAnswer::ok(Model::new("llama3:8b"), text)
    }

    #[test]
    fn test_accepts_just_below_threshold() {
        let rule = ScoutAcceptance::default();
        assert_eq!(rule.decide(&scout(&"a".repeat(149))), CascadeDecision::Accept);
    }

    #[test]
    fn test_escalates_at_threshold() {
        let rule = ScoutAcceptance::default();
        assert_eq!(rule.decide(&scout(&"a".repeat(150))), CascadeDecision::Escalate);
        assert_eq!(rule.decide(&scout(&"a".repeat(400))), CascadeDecision::Escalate);
    }

    #[test]
    fn test_threshold_counts_characters_not_bytes() {
        // 149 two-byte characters: 298 bytes, still below the threshold
        let rule = ScoutAcceptance::default();
        assert_eq!(rule.decide(&scout(&"é".repeat(149))), CascadeDecision::Accept);
    }

    #[test]
    fn test_failed_scout_escalates_even_if_short() {
        let rule = ScoutAcceptance::default();
        let failed = BackendAnswer::failed(Model::new("tinyllama"), "timeout");
        assert_eq!(rule.decide(&failed), CascadeDecision::Escalate);
    }

    #[test]
    fn test_accepted_scout_is_cacheable_and_unverified() {
        let result = ScoutAcceptance::accepted(scout("4"));
        assert_eq!(result.final_text, "4");
        assert!(result.cacheable);
        assert!(!result.verified);
        assert_eq!(result.path, ResolutionPath::Scout);
    }

    #[test]
    fn test_expert_overrides_scout_unconditionally() {
        let result = ScoutAcceptance::escalated(scout(&"long ".repeat(40)), expert("short"));
        assert_eq!(result.final_text, "short");
        assert!(result.cacheable);
        assert_eq!(result.path, ResolutionPath::Expert);
        assert_eq!(result.answers.len(), 2);
    }

    #[test]
    fn test_failed_expert_falls_back_to_scout() {
        let long = "long ".repeat(40);
        let failed = BackendAnswer::failed(Model::new("llama3:8b"), "timeout");
        let result = ScoutAcceptance::escalated(scout(&long), failed);
        assert_eq!(result.final_text, long);
        assert!(result.cacheable);
        assert_eq!(result.path, ResolutionPath::ScoutFallback);
    }

    #[test]
    fn test_both_failed_is_not_cacheable() {
        let result = ScoutAcceptance::escalated(
            BackendAnswer::failed(Model::new("tinyllama"), "down"),
            BackendAnswer::failed(Model::new("llama3:8b"), "down"),
        );
        assert!(!result.cacheable);
        assert_eq!(result.final_text, "Error: backend 'tinyllama' is unavailable.");
    }
}

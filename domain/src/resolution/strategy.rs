//! Resolution strategy selection

use serde::{Deserialize, Serialize};

use crate::core::error::DomainError;

/// How the engine consults backends on a cache miss
///
/// The three strategies are alternative configurations of the same engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionStrategy {
    /// Ask the whole committee, majority vote
    Majority,
    /// Single model for simple prompts, committee for complex ones
    Routed,
    /// Scout first, expert when the scout is not enough
    #[default]
    Cascade,
}

impl ResolutionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStrategy::Majority => "majority",
            ResolutionStrategy::Routed => "routed",
            ResolutionStrategy::Cascade => "cascade",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResolutionStrategy::Majority => "flat majority vote over the committee",
            ResolutionStrategy::Routed => "keyword-routed: single model or committee",
            ResolutionStrategy::Cascade => "tiered cascade: scout, then expert",
        }
    }

    pub fn all() -> [ResolutionStrategy; 3] {
        [
            ResolutionStrategy::Majority,
            ResolutionStrategy::Routed,
            ResolutionStrategy::Cascade,
        ]
    }
}

impl std::fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResolutionStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "majority" | "vote" => Ok(ResolutionStrategy::Majority),
            "routed" | "router" => Ok(ResolutionStrategy::Routed),
            "cascade" | "tiered" => Ok(ResolutionStrategy::Cascade),
            _ => Err(DomainError::UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for strategy in ResolutionStrategy::all() {
            let parsed: ResolutionStrategy = strategy.to_string().parse().unwrap();
            assert_eq!(strategy, parsed);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(
            "Vote".parse::<ResolutionStrategy>().unwrap(),
            ResolutionStrategy::Majority
        );
        assert_eq!(
            "tiered".parse::<ResolutionStrategy>().unwrap(),
            ResolutionStrategy::Cascade
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "fastest".parse::<ResolutionStrategy>().unwrap_err();
        assert_eq!(err, DomainError::UnknownStrategy("fastest".to_string()));
    }

    #[test]
    fn test_default_is_cascade() {
        assert_eq!(ResolutionStrategy::default(), ResolutionStrategy::Cascade);
    }
}

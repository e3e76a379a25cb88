//! Resolution result value object

use serde::{Deserialize, Serialize};

use super::answer::BackendAnswer;

/// Which branch of the engine produced the final answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPath {
    /// Served from the cache, no backend contacted
    Cache,
    /// Committee reached agreement
    Consensus,
    /// Committee disagreed, primary's own answer used
    PrimaryFallback,
    /// Single cheap model (simple prompt)
    Single,
    /// Scout answer accepted without escalation
    Scout,
    /// Expert answer after escalation
    Expert,
    /// Escalated, expert failed, scout answer used
    ScoutFallback,
}

impl ResolutionPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionPath::Cache => "cache",
            ResolutionPath::Consensus => "consensus",
            ResolutionPath::PrimaryFallback => "primary_fallback",
            ResolutionPath::Single => "single",
            ResolutionPath::Scout => "scout",
            ResolutionPath::Expert => "expert",
            ResolutionPath::ScoutFallback => "scout_fallback",
        }
    }
}

impl std::fmt::Display for ResolutionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Final outcome of resolving one prompt
///
/// Built once per invocation and never retained; the cache entry is the
/// only thing that outlives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// The answer handed back to the caller
    pub final_text: String,
    /// Committee agreement was reached (or the answer came from the cache)
    pub verified: bool,
    /// The answer may be written to the cache
    pub cacheable: bool,
    /// Branch that produced `final_text`
    pub path: ResolutionPath,
    /// Every backend answer collected for this invocation
    #[serde(default)]
    pub answers: Vec<BackendAnswer>,
}

impl ResolutionResult {
    /// Cache hit. Re-storing a cached value is pointless, so it is never cacheable.
    pub fn from_cache(text: impl Into<String>) -> Self {
        Self {
            final_text: text.into(),
            verified: true,
            cacheable: false,
            path: ResolutionPath::Cache,
            answers: Vec::new(),
        }
    }

    /// Single model, no corroboration.
    pub fn single(answer: BackendAnswer) -> Self {
        Self {
            final_text: answer.text.clone(),
            verified: false,
            cacheable: answer.is_ok(),
            path: ResolutionPath::Single,
            answers: vec![answer],
        }
    }

    /// Returns `true` if the answer was served from the cache.
    pub fn is_cache_hit(&self) -> bool {
        self.path == ResolutionPath::Cache
    }

    /// Number of backend calls that failed during this invocation
    pub fn failed_calls(&self) -> usize {
        self.answers.iter().filter(|a| !a.is_ok()).count()
    }
}

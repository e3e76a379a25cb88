//! Cache key derivation

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::prompt::Prompt;

/// Namespace prefix shared by every prompt entry in the store
const PROMPT_NAMESPACE: &str = "prompt:";

/// Time-to-live for stored answers
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Key under which the answer to a prompt is stored
///
/// Deterministic and unnormalized: `"prompt:" + prompt`.
///
/// # Example
///
/// ```
/// use resolver_domain::{CacheKey, Prompt};
///
/// let key = CacheKey::for_prompt(&Prompt::new("What is 2+2?"));
/// assert_eq!(key.as_str(), "prompt:What is 2+2?");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a prompt
    pub fn for_prompt(prompt: &Prompt) -> Self {
        Self(format!("{}{}", PROMPT_NAMESPACE, prompt.content()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

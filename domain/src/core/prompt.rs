//! Prompt value object

use serde::{Deserialize, Serialize};

/// A prompt to be resolved (Value Object)
///
/// The text is opaque: no trimming, case folding or whitespace collapsing.
/// Two prompts are the same prompt only if their bytes are identical, which
/// is also what makes them share a cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prompt {
    content: String,
}

impl Prompt {
    /// Create a new prompt
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Prompt cannot be empty");
        Self { content }
    }

    /// Try to create a new prompt, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Prompt {
    fn from(s: &str) -> Self {
        Prompt::new(s)
    }
}

impl From<String> for Prompt {
    fn from(s: String) -> Self {
        Prompt::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_creation() {
        let p = Prompt::new("What is the color of the sky?");
        assert_eq!(p.content(), "What is the color of the sky?");
    }

    #[test]
    fn test_prompt_keeps_whitespace_and_case() {
        let p = Prompt::new("  What IS 2+2?\n");
        assert_eq!(p.content(), "  What IS 2+2?\n");
        assert_ne!(Prompt::new("what is 2+2?"), Prompt::new("What is 2+2?"));
    }

    #[test]
    #[should_panic]
    fn test_empty_prompt_panics() {
        Prompt::new("");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Prompt::try_new("").is_none());
        assert!(Prompt::try_new(" \t ").is_none());
    }

    #[test]
    fn test_try_new_valid() {
        assert!(Prompt::try_new("What is Rust?").is_some());
    }
}

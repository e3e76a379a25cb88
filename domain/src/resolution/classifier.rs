//! Prompt complexity classification for routed resolution

use serde::{Deserialize, Serialize};

use crate::core::prompt::Prompt;

/// Keywords marking a prompt as complex, in priority order
pub const DEFAULT_COMPLEX_KEYWORDS: &[&str] = &[
    "analyze",
    "compare",
    "summarize",
    "explain",
    "contrast",
    "report",
    "review",
    "optim",
    "debug",
    "code",
    "write me a",
];

/// Result of classifying a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    /// `keyword` is the first vocabulary entry found, kept for logging
    Complex { keyword: String },
}

impl Complexity {
    pub fn is_complex(&self) -> bool {
        matches!(self, Complexity::Complex { .. })
    }
}

/// Case-insensitive substring classifier over a fixed vocabulary
///
/// # Example
///
/// ```
/// use resolver_domain::{ComplexityClassifier, Prompt};
///
/// let classifier = ComplexityClassifier::default();
/// assert!(classifier.classify(&Prompt::new("please analyze the pros and cons")).is_complex());
/// assert!(!classifier.classify(&Prompt::new("what is 2+2?")).is_complex());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexityClassifier {
    keywords: Vec<String>,
}

impl ComplexityClassifier {
    /// Build a classifier; keywords are matched case-insensitively in the given order.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn classify(&self, prompt: &Prompt) -> Complexity {
        let haystack = prompt.content().to_lowercase();
        self.keywords
            .iter()
            .find(|keyword| haystack.contains(keyword.as_str()))
            .map(|keyword| Complexity::Complex {
                keyword: keyword.clone(),
            })
            .unwrap_or(Complexity::Simple)
    }
}

impl Default for ComplexityClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_COMPLEX_KEYWORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_is_complex() {
        let classifier = ComplexityClassifier::default();
        let result = classifier.classify(&Prompt::new("please analyze the pros and cons"));
        assert_eq!(
            result,
            Complexity::Complex {
                keyword: "analyze".to_string()
            }
        );
    }

    #[test]
    fn test_arithmetic_is_simple() {
        let classifier = ComplexityClassifier::default();
        assert_eq!(
            classifier.classify(&Prompt::new("what is 2+2?")),
            Complexity::Simple
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let classifier = ComplexityClassifier::default();
        assert!(classifier.classify(&Prompt::new("EXPLAIN monads")).is_complex());
        assert!(classifier.classify(&Prompt::new("Write Me A poem")).is_complex());
    }

    #[test]
    fn test_substring_match() {
        let classifier = ComplexityClassifier::default();
        assert!(classifier.classify(&Prompt::new("optimize this loop")).is_complex());
    }

    #[test]
    fn test_first_keyword_in_vocabulary_order_is_reported() {
        let classifier = ComplexityClassifier::default();
        // "debug" appears first in the text, "compare" first in the vocabulary
        let result = classifier.classify(&Prompt::new("debug and compare"));
        assert_eq!(
            result,
            Complexity::Complex {
                keyword: "compare".to_string()
            }
        );
    }

    #[test]
    fn test_custom_vocabulary_is_lowercased() {
        let classifier = ComplexityClassifier::new(["Prove", ""]);
        assert_eq!(classifier.keywords(), &["prove".to_string()]);
        assert!(classifier.classify(&Prompt::new("prove it")).is_complex());
        assert!(!classifier.classify(&Prompt::new("analyze it")).is_complex());
    }
}

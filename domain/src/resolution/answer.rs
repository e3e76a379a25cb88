//! Backend answer value object

use serde::{Deserialize, Serialize};

use crate::core::model::Model;

/// Transport-level outcome of a backend call
///
/// Derived only from whether the call succeeded, never from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Ok,
    Failed,
}

/// Answer from a single backend for one prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendAnswer {
    /// The model that was asked
    pub model: Model,
    /// Answer text; for failed calls, a last-resort error message
    pub text: String,
    /// Whether the call succeeded
    pub outcome: Outcome,
    /// Failure reason, for display and logs only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BackendAnswer {
    /// Creates a successful answer.
    pub fn ok(model: Model, text: impl Into<String>) -> Self {
        Self {
            model,
            text: text.into(),
            outcome: Outcome::Ok,
            error: None,
        }
    }

    /// Creates a failed answer.
    ///
    /// The text is set to a readable error so that a resolution which can
    /// only fall back to this answer still has something to show.
    pub fn failed(model: Model, error: impl Into<String>) -> Self {
        let text = Self::unavailable_text(&model);
        Self {
            model,
            text,
            outcome: Outcome::Failed,
            error: Some(error.into()),
        }
    }

    /// Returns `true` if the backend call succeeded.
    pub fn is_ok(&self) -> bool {
        self.outcome == Outcome::Ok
    }

    /// Answer length in characters (not bytes, not tokens)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn unavailable_text(model: &Model) -> String {
        format!("Error: backend '{}' is unavailable.", model)
    }
}

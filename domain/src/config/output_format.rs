//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for resolution results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Only the final answer with its verification marker (default)
    #[default]
    Answer,
    /// Final answer plus every backend answer and the decision path
    Full,
    /// JSON output
    Json,
}

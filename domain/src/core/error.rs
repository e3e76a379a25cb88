//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Committee needs at least 2 models, got {0}")]
    CommitteeTooSmall(usize),

    #[error("Primary model {0} is not a committee member")]
    PrimaryNotInCommittee(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Unknown resolution strategy: {0}. Valid: majority, routed, cascade")]
    UnknownStrategy(String),

    #[error("Unknown quorum rule: {0}. Valid: majority, unanimous, atleast:N, N%")]
    UnknownRule(String),

    #[error("Quorum rule {rule} needs more votes than a committee of {committee_size} can give")]
    UnreachableRule { rule: String, committee_size: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_committee_error_display() {
        let error = DomainError::CommitteeTooSmall(1);
        assert_eq!(error.to_string(), "Committee needs at least 2 models, got 1");
    }

    #[test]
    fn test_unknown_strategy_lists_valid_values() {
        let error = DomainError::UnknownStrategy("fastest".to_string());
        assert!(error.to_string().contains("majority, routed, cascade"));
    }
}

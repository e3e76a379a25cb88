//! Configuration errors

use resolver_domain::DomainError;
use thiserror::Error;

/// Errors raised while loading or validating configuration
///
/// Any of these is fatal: the binary exits before resolving a prompt.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required setting `{field}` (set it in resolver.toml or export {env})")]
    Missing {
        field: &'static str,
        env: &'static str,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),
}

impl From<DomainError> for ConfigError {
    fn from(error: DomainError) -> Self {
        ConfigError::Invalid(error.to_string())
    }
}

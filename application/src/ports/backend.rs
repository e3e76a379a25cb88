//! Backend client port
//!
//! Defines the interface for asking an inference backend to complete a prompt.

use async_trait::async_trait;
use resolver_domain::Model;
use std::time::Duration;
use thiserror::Error;

/// A failed backend call
///
/// Connection errors, timeouts, non-success statuses and unreadable bodies
/// all collapse into this one error. The reason is kept for logs only; the
/// engine only acts on *whether* a call failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Backend call to {model} failed: {reason}")]
pub struct BackendError {
    pub model: Model,
    pub reason: String,
}

impl BackendError {
    pub fn new(model: &Model, reason: impl Into<String>) -> Self {
        Self {
            model: model.clone(),
            reason: reason.into(),
        }
    }

    pub fn timeout(model: &Model, after: Duration) -> Self {
        Self::new(model, format!("timed out after {}s", after.as_secs_f64()))
    }
}

/// Client for a prompt-completion backend
///
/// This port defines how the resolution engine talks to models.
/// Implementations (adapters) live in the infrastructure layer; test doubles
/// implement it directly.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Complete `prompt` with `model`, giving up after `timeout`.
    async fn complete(
        &self,
        model: &Model,
        prompt: &str,
        timeout: Duration,
    ) -> Result<String, BackendError>;
}

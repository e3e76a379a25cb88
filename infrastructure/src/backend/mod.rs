//! Inference backend adapters
//!
//! Implements the `BackendClient` port over HTTP.

pub mod ollama;

pub use ollama::OllamaBackendClient;

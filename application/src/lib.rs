//! Application layer for prompt-resolver
//!
//! This crate contains the resolution engine, the port definitions it
//! consumes, and the engine configuration value.
//! It depends only on the domain layer.

pub mod cache_gateway;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use cache_gateway::CacheGateway;
pub use config::{EngineConfig, ModelTier, TimeoutPolicy};
pub use ports::{
    backend::{BackendClient, BackendError},
    cache_store::{CacheStore, CacheStoreError},
    progress::{NoProgress, ResolutionProgress},
};
pub use use_cases::resolve_prompt::ResolvePromptUseCase;

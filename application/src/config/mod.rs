//! Application-level configuration.
//!
//! - [`EngineConfig`] - which models play which role and how results are reconciled
//! - [`TimeoutPolicy`] - per-call time budgets scaled by model tier

pub mod engine_config;
pub mod timeouts;

pub use engine_config::EngineConfig;
pub use timeouts::{ModelTier, TimeoutPolicy};

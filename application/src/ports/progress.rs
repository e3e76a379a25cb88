//! Progress notification port
//!
//! Defines the interface for reporting what the resolution engine is doing.

use resolver_domain::{Complexity, Model, ResolutionResult};

/// Callback for progress updates during a resolution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinners, plain lines, nothing).
pub trait ResolutionProgress: Send + Sync {
    /// Called when the cache served the answer
    fn on_cache_hit(&self);

    /// Called when the cache had no answer and backends will be consulted
    fn on_cache_miss(&self);

    /// Called before a batch of backend calls (one model or a committee)
    fn on_backend_start(&self, models: &[Model]);

    /// Called when a single backend call completes
    fn on_backend_complete(&self, model: &Model, success: bool);

    /// Called after routed classification
    fn on_route(&self, _complexity: &Complexity) {}

    /// Called when the cascade escalates from scout to expert
    fn on_escalate(&self, _scout: &Model, _expert: &Model) {}

    /// Called once the final answer is known
    fn on_resolved(&self, _result: &ResolutionResult) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ResolutionProgress for NoProgress {
    fn on_cache_hit(&self) {}
    fn on_cache_miss(&self) {}
    fn on_backend_start(&self, _models: &[Model]) {}
    fn on_backend_complete(&self, _model: &Model, _success: bool) {}
}

//! Domain layer for prompt-resolver
//!
//! This crate contains the decision rules and value objects of the
//! resolution engine. It has no dependencies on infrastructure or
//! presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Resolution
//!
//! A prompt is answered by one or more backends and the answers are
//! reconciled into a single [`ResolutionResult`]:
//!
//! - **Majority**: a committee votes, exact-text agreement wins
//! - **Routed**: simple prompts go to one cheap model, complex ones to the committee
//! - **Cascade**: a scout answers first, an expert takes over when the scout is not enough
//!
//! ## Cache-aside
//!
//! Every prompt maps to a [`CacheKey`]. A result is only persisted when the
//! branch that produced it succeeded ([`ResolutionResult::cacheable`]).

pub mod cache;
pub mod config;
pub mod core;
pub mod quorum;
pub mod resolution;

// Re-export commonly used types
pub use cache::{CacheKey, DEFAULT_CACHE_TTL};
pub use config::OutputFormat;
pub use core::{error::DomainError, model::Model, prompt::Prompt, string::truncate_chars};
pub use quorum::{CommitteeTally, QuorumRule, VoteGroup};
pub use resolution::{
    answer::{BackendAnswer, Outcome},
    cascade::{CascadeDecision, DEFAULT_CASCADE_THRESHOLD, ScoutAcceptance},
    classifier::{Complexity, ComplexityClassifier, DEFAULT_COMPLEX_KEYWORDS},
    committee::reconcile,
    result::{ResolutionPath, ResolutionResult},
    strategy::ResolutionStrategy,
};

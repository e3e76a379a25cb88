//! Resolution domain - turning backend answers into one final answer.
//!
//! - [`answer`] - a single backend's answer and its transport outcome
//! - [`result`] - the final [`ResolutionResult`](result::ResolutionResult)
//! - [`committee`] - majority reconciliation (majority over a committee)
//! - [`classifier`] - routing (simple vs complex prompts)
//! - [`cascade`] - cascade acceptance rule (scout then expert)
//! - [`strategy`] - the configurable choice between the three

pub mod answer;
pub mod cascade;
pub mod classifier;
pub mod committee;
pub mod result;
pub mod strategy;

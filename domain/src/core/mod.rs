//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - a backend model identifier (e.g. `tinyllama`)
//! - [`prompt::Prompt`] - a validated prompt to resolve
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
pub mod prompt;
pub mod string;

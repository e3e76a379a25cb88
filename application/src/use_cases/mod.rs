//! Use cases (application services)

pub mod resolve_prompt;

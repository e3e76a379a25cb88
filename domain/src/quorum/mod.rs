//! Committee consensus domain
//!
//! A committee of models answers the same prompt. Answers are grouped by
//! exact text and the largest group wins if it satisfies the [`QuorumRule`].
//!
//! ```text
//! answers ──► CommitteeTally ──► leader ──► rule satisfied? ──► verified answer
//!                                               │
//!                                               └── no ──► primary's own answer (unverified)
//! ```
//!
//! Failed answers never join a group, so a committee that fails with
//! identical error text cannot fake a majority.

pub mod rule;
pub mod tally;

// Re-export main types
pub use rule::QuorumRule;
pub use tally::{CommitteeTally, VoteGroup};

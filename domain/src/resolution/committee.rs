//! Committee reconciliation (majority vote)

use super::answer::BackendAnswer;
use super::result::{ResolutionPath, ResolutionResult};
use crate::core::model::Model;
use crate::quorum::{CommitteeTally, QuorumRule};

/// Reconcile a complete set of committee answers into one result.
///
/// - The leading answer group wins when it satisfies `rule` (verified).
/// - Otherwise the primary's own answer is used (unverified), even if
///   another answer had a plurality.
/// - Cacheability follows the primary's outcome only: other members may
///   fail without blocking the cache.
pub fn reconcile(answers: Vec<BackendAnswer>, primary: &Model, rule: &QuorumRule) -> ResolutionResult {
    let tally = CommitteeTally::from_answers(&answers);

    let primary_answer = answers
        .iter()
        .find(|a| &a.model == primary)
        .cloned()
        .unwrap_or_else(|| BackendAnswer::failed(primary.clone(), "primary did not answer"));
    let cacheable = primary_answer.is_ok();

    let (final_text, verified, path) = match tally.winner(rule, primary) {
        Some(group) => (group.text.clone(), true, ResolutionPath::Consensus),
        None => (primary_answer.text, false, ResolutionPath::PrimaryFallback),
    };

    ResolutionResult {
        final_text,
        verified,
        cacheable,
        path,
        answers,
    }
}

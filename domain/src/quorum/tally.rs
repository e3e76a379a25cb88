//! Vote tallying for committee answers
//!
//! Each successful answer is a vote for its exact text. Grouping is
//! byte-for-byte: no trimming, no case folding.

use serde::{Deserialize, Serialize};

use super::rule::QuorumRule;
use crate::core::model::Model;
use crate::resolution::answer::BackendAnswer;

/// All committee members that returned the same text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteGroup {
    /// The shared answer text
    pub text: String,
    /// Members that returned this text, in committee order
    pub voters: Vec<Model>,
}

impl VoteGroup {
    /// Number of members in this group
    pub fn count(&self) -> usize {
        self.voters.len()
    }

    /// Whether `model` voted for this text
    pub fn contains(&self, model: &Model) -> bool {
        self.voters.contains(model)
    }
}

/// Aggregated votes of one committee round
///
/// # Example
///
/// ```
/// use resolver_domain::{BackendAnswer, CommitteeTally, Model, QuorumRule};
///
/// let primary = Model::new("tinyllama");
/// let answers = vec![
///     BackendAnswer::ok(primary.clone(), "blue"),
///     BackendAnswer::ok(Model::new("llama3:8b"), "blue"),
///     BackendAnswer::ok(Model::new("mistral:7b"), "green"),
/// ];
/// let tally = CommitteeTally::from_answers(&answers);
/// let winner = tally.winner(&QuorumRule::Majority, &primary).unwrap();
/// assert_eq!(winner.text, "blue");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeTally {
    /// Answer groups in order of first appearance
    pub groups: Vec<VoteGroup>,
    /// Members whose call failed; they count toward the committee size only
    pub failed: Vec<Model>,
    /// Total committee size (the denominator of every rule)
    pub committee_size: usize,
}

impl CommitteeTally {
    /// Group answers by exact text, skipping failed ones
    pub fn from_answers(answers: &[BackendAnswer]) -> Self {
        let mut groups: Vec<VoteGroup> = Vec::new();
        let mut failed = Vec::new();

        for answer in answers {
            if !answer.is_ok() {
                failed.push(answer.model.clone());
                continue;
            }
            match groups.iter_mut().find(|g| g.text == answer.text) {
                Some(group) => group.voters.push(answer.model.clone()),
                None => groups.push(VoteGroup {
                    text: answer.text.clone(),
                    voters: vec![answer.model.clone()],
                }),
            }
        }

        Self {
            groups,
            failed,
            committee_size: answers.len(),
        }
    }

    /// The largest group
    ///
    /// Equal-sized groups are ordered by whether they contain the primary,
    /// then by first appearance.
    pub fn leader(&self, primary: &Model) -> Option<&VoteGroup> {
        let mut leader: Option<&VoteGroup> = None;
        for group in &self.groups {
            leader = match leader {
                None => Some(group),
                Some(current) if group.count() > current.count() => Some(group),
                Some(current)
                    if group.count() == current.count()
                        && group.contains(primary)
                        && !current.contains(primary) =>
                {
                    Some(group)
                }
                keep => keep,
            };
        }
        leader
    }

    /// The leading group, if it satisfies `rule`
    pub fn winner(&self, rule: &QuorumRule, primary: &Model) -> Option<&VoteGroup> {
        self.leader(primary)
            .filter(|group| rule.is_satisfied(group.count(), self.committee_size))
    }

    /// Size of the largest group against the committee, e.g. `2/3`
    ///
    /// Tie-breaks only pick between equal counts, so no primary is needed.
    pub fn vote_summary(&self) -> String {
        let top = self.groups.iter().map(VoteGroup::count).max().unwrap_or(0);
        format!("{}/{}", top, self.committee_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(name: &str) -> Model {
        Model::new(name)
    }

    fn answers(texts: &[&str]) -> Vec<BackendAnswer> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| BackendAnswer::ok(m(&format!("model-{}", i)), *t))
            .collect()
    }

    #[test]
    fn test_groups_by_exact_text() {
        let tally = CommitteeTally::from_answers(&answers(&["blue", "blue", "green"]));
        assert_eq!(tally.groups.len(), 2);
        assert_eq!(tally.groups[0].text, "blue");
        assert_eq!(tally.groups[0].count(), 2);
        assert_eq!(tally.committee_size, 3);
    }

    #[test]
    fn test_trailing_whitespace_is_a_different_answer() {
        let tally = CommitteeTally::from_answers(&answers(&["blue", "blue ", "Blue"]));
        assert_eq!(tally.groups.len(), 3);
    }

    #[test]
    fn test_majority_winner() {
        let tally = CommitteeTally::from_answers(&answers(&["blue", "blue", "green"]));
        let winner = tally.winner(&QuorumRule::Majority, &m("model-0")).unwrap();
        assert_eq!(winner.text, "blue");
        assert_eq!(tally.vote_summary(), "2/3");
    }

    #[test]
    fn test_no_winner_without_repeats() {
        let tally = CommitteeTally::from_answers(&answers(&["a", "b", "c"]));
        assert!(tally.winner(&QuorumRule::Majority, &m("model-0")).is_none());
    }

    #[test]
    fn test_failed_answers_never_group() {
        let list = vec![
            BackendAnswer::failed(m("a"), "connection refused"),
            BackendAnswer::failed(m("b"), "connection refused"),
            BackendAnswer::failed(m("c"), "timeout"),
        ];
        let tally = CommitteeTally::from_answers(&list);
        assert!(tally.groups.is_empty());
        assert_eq!(tally.failed.len(), 3);
        assert!(tally.winner(&QuorumRule::Majority, &m("a")).is_none());
        assert_eq!(tally.vote_summary(), "0/3");
    }

    #[test]
    fn test_failures_still_count_toward_committee_size() {
        let list = vec![
            BackendAnswer::ok(m("a"), "4"),
            BackendAnswer::failed(m("b"), "timeout"),
            BackendAnswer::failed(m("c"), "timeout"),
        ];
        let tally = CommitteeTally::from_answers(&list);
        // 1 of 3 is not a majority even though it is the only answer
        assert!(tally.winner(&QuorumRule::Majority, &m("a")).is_none());
    }

    #[test]
    fn test_tie_prefers_primary_group() {
        let list = vec![
            BackendAnswer::ok(m("a"), "x"),
            BackendAnswer::ok(m("b"), "y"),
            BackendAnswer::ok(m("c"), "x"),
            BackendAnswer::ok(m("d"), "y"),
        ];
        let tally = CommitteeTally::from_answers(&list);
        assert_eq!(tally.leader(&m("b")).unwrap().text, "y");
        assert_eq!(tally.leader(&m("a")).unwrap().text, "x");
        // Neither tied group holds the primary: first appearance wins
        assert_eq!(tally.leader(&m("zzz")).unwrap().text, "x");
    }
}

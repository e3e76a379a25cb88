//! Agreement rules for committee votes

use crate::core::error::DomainError;

/// How many committee members must return the same text for it to count
/// as agreement.
///
/// Thresholds are taken against the whole committee, so a member whose call
/// failed still counts toward N and makes agreement harder to reach. A
/// threshold is never below one vote.
///
/// The string form is `majority`, `unanimous`, `atleast:N` or `N%`.
///
/// # Example
///
/// ```
/// use resolver_domain::QuorumRule;
///
/// let rule: QuorumRule = "majority".parse().unwrap();
/// assert_eq!(rule.votes_needed(3), 2);
/// assert_eq!(rule.votes_needed(4), 3);
/// assert!(!rule.is_satisfied(1, 3)); // plurality is not enough
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuorumRule {
    /// Strictly more than half of the committee
    #[default]
    Majority,
    /// Every member, failed ones included
    Unanimous,
    /// A fixed number of members
    AtLeast(usize),
    /// This share of the committee, rounded up (1-100)
    Percentage(u8),
}

impl QuorumRule {
    /// Votes a single answer group needs in a committee of `committee_size`
    pub fn votes_needed(&self, committee_size: usize) -> usize {
        let needed = match *self {
            QuorumRule::Majority => committee_size / 2 + 1,
            QuorumRule::Unanimous => committee_size,
            QuorumRule::AtLeast(n) => n,
            QuorumRule::Percentage(p) => (committee_size * usize::from(p)).div_ceil(100),
        };
        needed.max(1)
    }

    pub fn is_satisfied(&self, votes: usize, committee_size: usize) -> bool {
        committee_size > 0 && votes >= self.votes_needed(committee_size)
    }

    /// Check that a committee of this size can satisfy the rule at all
    pub fn check_reachable(&self, committee_size: usize) -> Result<(), DomainError> {
        if self.votes_needed(committee_size) > committee_size {
            return Err(DomainError::UnreachableRule {
                rule: self.to_string(),
                committee_size,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for QuorumRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuorumRule::Majority => write!(f, "majority"),
            QuorumRule::Unanimous => write!(f, "unanimous"),
            QuorumRule::AtLeast(n) => write!(f, "atleast:{}", n),
            QuorumRule::Percentage(p) => write!(f, "{}%", p),
        }
    }
}

impl std::str::FromStr for QuorumRule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || DomainError::UnknownRule(s.to_string());
        let rule = s.trim().to_ascii_lowercase();

        if let Some(p) = rule.strip_suffix('%') {
            return match p.trim().parse::<u8>() {
                Ok(p @ 1..=100) => Ok(QuorumRule::Percentage(p)),
                _ => Err(unknown()),
            };
        }
        if let Some(n) = rule.strip_prefix("atleast:") {
            return match n.trim().parse::<usize>() {
                Ok(n) if n > 0 => Ok(QuorumRule::AtLeast(n)),
                _ => Err(unknown()),
            };
        }

        match rule.as_str() {
            "majority" => Ok(QuorumRule::Majority),
            "unanimous" => Ok(QuorumRule::Unanimous),
            _ => Err(unknown()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_is_strictly_more_than_half() {
        let rule = QuorumRule::Majority;
        assert_eq!(rule.votes_needed(2), 2);
        assert_eq!(rule.votes_needed(3), 2);
        assert_eq!(rule.votes_needed(4), 3);
        assert!(!rule.is_satisfied(2, 4));
        assert!(rule.is_satisfied(3, 4));
    }

    #[test]
    fn test_unanimous_counts_failed_members() {
        // Two agreeing answers and one failure is not unanimity
        assert!(!QuorumRule::Unanimous.is_satisfied(2, 3));
        assert!(QuorumRule::Unanimous.is_satisfied(3, 3));
    }

    #[test]
    fn test_percentage_rounds_up() {
        let rule = QuorumRule::Percentage(66);
        assert_eq!(rule.votes_needed(3), 2);
        assert_eq!(rule.votes_needed(4), 3);
        assert_eq!(QuorumRule::Percentage(1).votes_needed(3), 1);
    }

    #[test]
    fn test_zero_votes_never_agree() {
        assert!(!QuorumRule::AtLeast(1).is_satisfied(0, 3));
        assert!(!QuorumRule::Majority.is_satisfied(0, 0));
    }

    #[test]
    fn test_rule_larger_than_committee_is_unreachable() {
        assert!(QuorumRule::AtLeast(3).check_reachable(3).is_ok());
        assert_eq!(
            QuorumRule::AtLeast(4).check_reachable(3),
            Err(DomainError::UnreachableRule {
                rule: "atleast:4".to_string(),
                committee_size: 3
            })
        );
    }

    #[test]
    fn test_string_form_parses_back() {
        for rule in [
            QuorumRule::Majority,
            QuorumRule::Unanimous,
            QuorumRule::AtLeast(2),
            QuorumRule::Percentage(75),
        ] {
            assert_eq!(rule.to_string().parse::<QuorumRule>(), Ok(rule));
        }
        assert_eq!(" Majority ".parse::<QuorumRule>(), Ok(QuorumRule::Majority));
    }

    #[test]
    fn test_rejects_unknown_and_out_of_range() {
        for input in ["plurality", "0%", "120%", "atleast:0", "atleast:two"] {
            assert_eq!(
                input.parse::<QuorumRule>(),
                Err(DomainError::UnknownRule(input.to_string())),
                "{input}"
            );
        }
    }
}

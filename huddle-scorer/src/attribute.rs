//! Similarity from shared profile attributes.

use huddle_core::{MatchReason, MatchScore, MemberProfile, MemberScorer, Role};

use crate::MatchWeights;

/// Scores members on shared major, minor, class year, roles and home state.
///
/// Criteria are evaluated in that order, roles in [`Role::ALL`] order, so
/// reasons always appear in the same sequence. A criterion only matches when
/// both members have a non-empty value and the values are equal; comparison
/// is case-sensitive.
///
/// # Examples
/// ```
/// use huddle_core::{MemberProfile, MemberScorer, Role};
/// use huddle_scorer::AttributeScorer;
///
/// let target = MemberProfile::new("1", "Ada")
///     .with_major("CS")
///     .with_role(Role::Developer);
/// let candidate = MemberProfile::new("2", "Grace")
///     .with_major("CS")
///     .with_role(Role::Developer);
/// let score = AttributeScorer::default().score(&target, &candidate);
/// assert_eq!(score.score(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeScorer {
    weights: MatchWeights,
}

impl AttributeScorer {
    /// Scorer with custom weights.
    #[must_use]
    pub const fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    #[must_use]
    pub const fn weights(&self) -> MatchWeights {
        self.weights
    }
}

impl MemberScorer for AttributeScorer {
    fn score(&self, target: &MemberProfile, candidate: &MemberProfile) -> MatchScore {
        let mut score = MatchScore::new();
        let mut award = |matched: bool, reason: MatchReason, weight: u32| {
            if matched && weight > 0 {
                score.award(reason, weight);
            }
        };

        award(
            same(target.major(), candidate.major()),
            MatchReason::SameMajor,
            self.weights.major,
        );
        award(
            same(target.minor(), candidate.minor()),
            MatchReason::SameMinor,
            self.weights.minor,
        );
        award(
            same(target.year(), candidate.year()),
            MatchReason::SameYear,
            self.weights.year,
        );
        for role in Role::ALL {
            award(
                target.roles.has(role) && candidate.roles.has(role),
                MatchReason::BothRole(role),
                self.weights.role,
            );
        }
        award(
            same(target.home_state(), candidate.home_state()),
            MatchReason::SameState,
            self.weights.state,
        );
        score
    }
}

fn same<T: PartialEq>(left: Option<T>, right: Option<T>) -> bool {
    matches!((left, right), (Some(a), Some(b)) if a == b)
}

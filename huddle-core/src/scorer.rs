//! Score how closely a candidate member matches a target member.
//!
//! The `MemberScorer` trait produces an additive [`MatchScore`] with the
//! reasons that contributed to it, in the order they were evaluated.

use serde::{Serialize, Serializer};

use crate::{MemberProfile, Role};

/// A single criterion on which two members matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchReason {
    /// Both members declared the same major.
    SameMajor,
    /// Both members declared the same minor.
    SameMinor,
    /// Both members are in the same class year.
    SameYear,
    /// Both members hold the role.
    BothRole(Role),
    /// Both members' homes resolved to the same state.
    SameState,
}

impl std::fmt::Display for MatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SameMajor => f.write_str("same major"),
            Self::SameMinor => f.write_str("same minor"),
            Self::SameYear => f.write_str("same year"),
            Self::BothRole(role) => write!(f, "both {role}"),
            Self::SameState => f.write_str("same state"),
        }
    }
}

impl Serialize for MatchReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An additive score together with the reasons that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchScore {
    score: u32,
    reasons: Vec<MatchReason>,
}

impl MatchScore {
    /// An empty score.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` points for `reason`.
    ///
    /// Reasons are kept in insertion order.
    pub fn award(&mut self, reason: MatchReason, weight: u32) {
        self.score = self.score.saturating_add(weight);
        self.reasons.push(reason);
    }

    /// Total score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Reasons in evaluation order.
    #[must_use]
    pub fn reasons(&self) -> &[MatchReason] {
        &self.reasons
    }

    /// Split into the total and the reasons.
    #[must_use]
    pub fn into_parts(self) -> (u32, Vec<MatchReason>) {
        (self.score, self.reasons)
    }
}

/// Compare a candidate member against a target member.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a single scorer
/// can serve concurrent requests. Scoring is infallible: missing fields simply
/// fail the criteria that depend on them.
///
/// # Examples
///
/// ```rust
/// use huddle_core::{MatchReason, MatchScore, MemberProfile, MemberScorer};
///
/// struct SameNameScorer;
///
/// impl MemberScorer for SameNameScorer {
///     fn score(&self, target: &MemberProfile, candidate: &MemberProfile) -> MatchScore {
///         let mut score = MatchScore::new();
///         if target.name == candidate.name {
///             score.award(MatchReason::SameMajor, 1);
///         }
///         score
///     }
/// }
///
/// let a = MemberProfile::new("1", "Sam");
/// let b = MemberProfile::new("2", "Sam");
/// assert_eq!(SameNameScorer.score(&a, &b).score(), 1);
/// ```
pub trait MemberScorer: Send + Sync {
    /// Return the match score of `candidate` against `target`.
    fn score(&self, target: &MemberProfile, candidate: &MemberProfile) -> MatchScore;
}

impl<T: MemberScorer + ?Sized> MemberScorer for &T {
    fn score(&self, target: &MemberProfile, candidate: &MemberProfile) -> MatchScore {
        (**self).score(target, candidate)
    }
}

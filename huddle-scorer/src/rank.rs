//! Rank candidates against a target member.

use std::cmp::Reverse;

use huddle_core::{MatchReason, MemberProfile, MemberScorer, SIMILAR_MEMBERS_LIMIT};
use serde::Serialize;

/// A candidate that scored above zero, with the reasons it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarMember {
    /// Candidate identifier.
    pub member_id: String,
    /// Candidate display name.
    pub name: String,
    /// Candidate picture reference.
    pub picture: Option<String>,
    /// Candidate class year.
    pub year: Option<String>,
    /// Candidate major.
    pub major: Option<String>,
    /// Total score; always positive.
    pub score: u32,
    /// Matched criteria in evaluation order.
    pub reasons: Vec<MatchReason>,
}

impl SimilarMember {
    fn new(candidate: &MemberProfile, score: u32, reasons: Vec<MatchReason>) -> Self {
        Self {
            member_id: candidate.id.clone(),
            name: candidate.name.clone(),
            picture: candidate.picture.clone(),
            year: candidate.year.clone(),
            major: candidate.major.clone(),
            score,
            reasons,
        }
    }
}

/// Score every candidate and return the best `limit`.
///
/// `limit` is clamped by [`SIMILAR_MEMBERS_LIMIT`]: zero means the default
/// of 5 and anything above 20 yields 20. Candidates scoring zero are
/// dropped. The rest are ordered by score, highest first; equal scores keep
/// their input order. The target is not removed from `candidates`.
#[must_use]
pub fn rank<S>(
    scorer: &S,
    target: &MemberProfile,
    candidates: &[MemberProfile],
    limit: usize,
) -> Vec<SimilarMember>
where
    S: MemberScorer + ?Sized,
{
    let mut scored: Vec<SimilarMember> = candidates
        .iter()
        .filter_map(|candidate| {
            let (score, reasons) = scorer.score(target, candidate).into_parts();
            (score > 0).then(|| SimilarMember::new(candidate, score, reasons))
        })
        .collect();
    scored.sort_by_key(|member| Reverse(member.score));
    scored.truncate(SIMILAR_MEMBERS_LIMIT.clamp(limit));
    scored
}

/// [`rank`] with a signed, possibly absent limit as it arrives from a
/// request. Negative and missing limits use the default.
#[must_use]
pub fn similar_members<S>(
    scorer: &S,
    target: &MemberProfile,
    candidates: &[MemberProfile],
    requested: Option<i64>,
) -> Vec<SimilarMember>
where
    S: MemberScorer + ?Sized,
{
    rank(
        scorer,
        target,
        candidates,
        SIMILAR_MEMBERS_LIMIT.resolve(requested),
    )
}

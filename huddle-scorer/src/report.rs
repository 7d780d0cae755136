//! Response envelope for a similarity query.

use huddle_core::MemberProfile;
use serde::Serialize;

use crate::SimilarMember;

/// Name of the member the ranking was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseMember {
    /// Display name.
    pub name: String,
}

/// A ranking together with the member it was computed for.
///
/// Serialises as `{memberId, baseMember: {name}, count, similar}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityReport {
    /// Target member identifier.
    pub member_id: String,
    /// Target member summary.
    pub base_member: BaseMember,
    /// Number of entries in `similar`.
    pub count: usize,
    /// Ranked candidates.
    pub similar: Vec<SimilarMember>,
}

impl SimilarityReport {
    /// Wrap a ranking computed for `target`.
    #[must_use]
    pub fn new(target: &MemberProfile, similar: Vec<SimilarMember>) -> Self {
        Self {
            member_id: target.id.clone(),
            base_member: BaseMember {
                name: target.name.clone(),
            },
            count: similar.len(),
            similar,
        }
    }
}

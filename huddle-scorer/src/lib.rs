//! Member similarity scoring.
//!
//! [`AttributeScorer`] implements [`MemberScorer`](huddle_core::MemberScorer)
//! as an additive heuristic over shared profile attributes, weighted by
//! [`MatchWeights`]. [`rank`] applies any scorer to a candidate list and
//! returns the top matches, and [`SimilarityReport`] wraps a ranking for
//! display.
//!
//! # Examples
//!
//! ```
//! use huddle_core::{MemberProfile, Role};
//! use huddle_scorer::{AttributeScorer, SimilarityReport, rank};
//!
//! let target = MemberProfile::new("1", "Ada")
//!     .with_major("CS")
//!     .with_year("2026")
//!     .with_role(Role::Developer);
//! let candidates = vec![
//!     MemberProfile::new("2", "Grace").with_year("2026"),
//!     MemberProfile::new("3", "Alan").with_major("CS").with_role(Role::Developer),
//!     MemberProfile::new("4", "Edsger"),
//! ];
//!
//! let similar = rank(&AttributeScorer::default(), &target, &candidates, 5);
//! let ids: Vec<&str> = similar.iter().map(|m| m.member_id.as_str()).collect();
//! assert_eq!(ids, ["3", "2"]);
//!
//! let report = SimilarityReport::new(&target, similar);
//! assert_eq!(report.count, 2);
//! ```

#![forbid(unsafe_code)]

mod attribute;
mod rank;
mod report;
mod weights;

pub use attribute::AttributeScorer;
pub use rank::{SimilarMember, rank, similar_members};
pub use report::{BaseMember, SimilarityReport};
pub use weights::MatchWeights;

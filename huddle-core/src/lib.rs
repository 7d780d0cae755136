//! Core domain types for the Huddle member directory.
//!
//! The crate defines member profiles, the closed role and state tables,
//! resolved home locations, and the two seams the engine plugs into:
//! [`MemberScorer`] for similarity scoring and [`CityIndex`] for city
//! coordinate lookups. It also hosts the directory read paths (search, map
//! points, per-state and per-role counts) that operate on in-memory member
//! lists.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod directory;
pub mod limit;
pub mod location;
pub mod member;
pub mod role;
pub mod scorer;
pub mod state;
pub mod stats;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use directory::{
    HometownPoint, HometownQuery, MemberQuery, StateCount, home_state_counts, hometown_points,
};
pub use limit::{HOMETOWN_POINTS_LIMIT, LimitPolicy, SIMILAR_MEMBERS_LIMIT};
pub use location::{
    CityIndex, HomeLocation, HomeLocationError, HomeLocationRecord, Located, LocationSource,
};
pub use member::MemberProfile;
pub use role::{Role, Roles, UnknownRole};
pub use scorer::{MatchReason, MatchScore, MemberScorer};
pub use state::{STATES, StateCode};
pub use stats::{
    ClassYearCount, MajorCount, RoleCounts, class_year_counts, major_counts, role_counts,
};

//! Facade crate for the Huddle member directory.
//!
//! This crate re-exports the core domain types, the home-location resolver
//! and the similarity scorer. Roster import and enrichment sit behind the
//! `roster` feature (enabled by default).
//!
//! # Examples
//! ```
//! use huddle::{
//!     AttributeScorer, CityTable, HomeLocationResolver, LocationSource, MemberProfile, Role,
//!     similar_members,
//! };
//!
//! let resolver = HomeLocationResolver::new(CityTable::new());
//! let home = resolver.resolve(Some("Hanover, NH"));
//! assert_eq!(home.source(), LocationSource::StateCentroidFallback);
//!
//! let ada = MemberProfile::new("1", "Ada")
//!     .with_major("Computer Science")
//!     .with_role(Role::Developer)
//!     .with_home_location(home);
//! let ben = MemberProfile::new("2", "Ben")
//!     .with_major("Computer Science")
//!     .with_home_location(resolver.resolve(Some("Lyme, NH")));
//!
//! let ranked = similar_members(&AttributeScorer::default(), &ada, &[ben], None);
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked.first().map(|m| m.score), Some(5));
//! ```

#![forbid(unsafe_code)]

pub use huddle_core::{
    CityIndex, ClassYearCount, HOMETOWN_POINTS_LIMIT, HomeLocation, HomeLocationError,
    HometownPoint, HometownQuery, LimitPolicy, LocationSource, MajorCount, MatchReason,
    MatchScore, MemberProfile, MemberQuery, MemberScorer, Role, RoleCounts, Roles,
    SIMILAR_MEMBERS_LIMIT, StateCode, StateCount, UnknownRole, class_year_counts,
    home_state_counts, hometown_points, major_counts, role_counts,
};

#[cfg(feature = "test-support")]
pub use huddle_core::test_support;

pub use huddle_geo::{
    CityTable, CityTableError, DEFAULT_CITIES_PATH, HomeLocationResolver, LazyCityTable,
    ParsedHome, parse_home, state_centroid,
};

pub use huddle_scorer::{
    AttributeScorer, MatchWeights, SimilarMember, SimilarityReport, rank, similar_members,
};

#[cfg(feature = "roster")]
pub use huddle_data::{
    EnrichSummary, RosterError, enrich_members, load_roster, parse_roster, write_roster,
};

//! Directory queries over an in-memory member list.
//!
//! These are the read paths behind the member directory and the hometown
//! map: name search, role and class-year filters, map points and per-state
//! counts. All of them are linear scans that preserve input order.

use serde::Serialize;

use crate::{HOMETOWN_POINTS_LIMIT, LocationSource, MemberProfile, Role, Roles, StateCode};

/// Filters applied to the member list.
///
/// Empty filters match every member.
///
/// # Examples
/// ```
/// use huddle_core::{MemberProfile, MemberQuery, Role};
///
/// let members = vec![
///     MemberProfile::new("1", "Andy Li").with_role(Role::Developer),
///     MemberProfile::new("2", "Bea Andrews"),
/// ];
/// let query = MemberQuery::new().with_name("andy").with_role(Role::Developer);
/// let found: Vec<_> = query.filter(&members).map(|m| m.id.as_str()).collect();
/// assert_eq!(found, ["1"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberQuery {
    name: Option<String>,
    role: Option<Role>,
    year: Option<String>,
}

impl MemberQuery {
    /// A query matching every member.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the name to contain `fragment`, ignoring case.
    ///
    /// Blank fragments are ignored.
    #[must_use]
    pub fn with_name(mut self, fragment: impl AsRef<str>) -> Self {
        let trimmed = fragment.as_ref().trim();
        self.name = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        self
    }

    /// Require the member to hold `role`.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Require the member's class year to equal `year`.
    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Report whether `member` passes every filter.
    #[must_use]
    pub fn matches(&self, member: &MemberProfile) -> bool {
        let name_ok = self
            .name
            .as_deref()
            .is_none_or(|fragment| member.name.to_lowercase().contains(fragment));
        let role_ok = self.role.is_none_or(|role| member.roles.has(role));
        let year_ok = self
            .year
            .as_deref()
            .is_none_or(|year| member.year() == Some(year));
        name_ok && role_ok && year_ok
    }

    /// Iterate over matching members in input order.
    pub fn filter<'a>(
        &'a self,
        members: &'a [MemberProfile],
    ) -> impl Iterator<Item = &'a MemberProfile> + 'a {
        members.iter().filter(move |member| self.matches(member))
    }
}

/// A member projected for the hometown map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HometownPoint {
    /// Member identifier.
    pub member_id: String,
    /// Display name.
    pub name: String,
    /// Class year.
    pub year: Option<String>,
    /// Role flags.
    pub roles: Roles,
    /// Raw home string.
    pub home: Option<String>,
    /// Parsed city.
    pub city: Option<String>,
    /// Parsed state.
    pub state: Option<StateCode>,
    /// Latitude.
    pub lat: Option<f64>,
    /// Longitude.
    pub lng: Option<f64>,
    /// Picture reference.
    pub picture: Option<String>,
    /// Coordinate provenance.
    pub source: LocationSource,
}

impl From<&MemberProfile> for HometownPoint {
    fn from(member: &MemberProfile) -> Self {
        let location = &member.home_location;
        Self {
            member_id: member.id.clone(),
            name: member.name.clone(),
            year: member.year.clone(),
            roles: member.roles,
            home: member.home.clone(),
            city: location.city().map(str::to_owned),
            state: location.state(),
            lat: location.lat(),
            lng: location.lng(),
            picture: member.picture.clone(),
            source: location.source(),
        }
    }
}

/// Parameters for [`hometown_points`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HometownQuery {
    /// Role and class-year filters.
    pub filter: MemberQuery,
    /// Only return members whose home has coordinates.
    pub require_coordinates: bool,
    /// Maximum number of points; already clamped by the caller or via
    /// [`HometownQuery::with_limit`].
    pub limit: usize,
}

impl Default for HometownQuery {
    fn default() -> Self {
        Self {
            filter: MemberQuery::default(),
            require_coordinates: true,
            limit: HOMETOWN_POINTS_LIMIT.default_limit(),
        }
    }
}

impl HometownQuery {
    /// Apply a caller-supplied limit through [`HOMETOWN_POINTS_LIMIT`].
    #[must_use]
    pub fn with_limit(mut self, requested: Option<i64>) -> Self {
        self.limit = HOMETOWN_POINTS_LIMIT.resolve(requested);
        self
    }
}

/// Project matching members into map points.
#[must_use]
pub fn hometown_points(members: &[MemberProfile], query: &HometownQuery) -> Vec<HometownPoint> {
    query
        .filter
        .filter(members)
        .filter(|member| !query.require_coordinates || member.home_location.has_coordinates())
        .take(query.limit)
        .map(HometownPoint::from)
        .collect()
}

/// Number of members whose home resolved to a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateCount {
    /// State code.
    pub state: StateCode,
    /// Number of matching members.
    pub count: usize,
}

/// Count matching members per resolved home state.
///
/// Members without a state are skipped. Results are ordered by count,
/// highest first, with ties broken by state code.
#[must_use]
pub fn home_state_counts(members: &[MemberProfile], filter: &MemberQuery) -> Vec<StateCount> {
    let mut counts: std::collections::BTreeMap<StateCode, usize> =
        std::collections::BTreeMap::new();
    for state in filter.filter(members).filter_map(MemberProfile::home_state) {
        *counts.entry(state).or_default() += 1;
    }
    let mut ordered: Vec<StateCount> = counts
        .into_iter()
        .map(|(state, count)| StateCount { state, count })
        .collect();
    ordered.sort_by(|a, b| b.count.cmp(&a.count));
    ordered
}

//! Member profiles as stored in the directory.

use serde::{Deserialize, Serialize};

use crate::{HomeLocation, Role, Roles, StateCode};

/// A member of the program.
///
/// Profiles are read-only inputs to scoring and reporting; nothing in this
/// workspace mutates them except roster enrichment, which fills in
/// [`MemberProfile::home_location`].
///
/// # Examples
/// ```
/// use huddle_core::{MemberProfile, Role};
///
/// let member = MemberProfile::new("42", "Ada")
///     .with_major("Computer Science")
///     .with_role(Role::Developer);
/// assert_eq!(member.major(), Some("Computer Science"));
/// assert!(member.roles.has(Role::Developer));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Class year, for example `"2026"`.
    #[serde(default)]
    pub year: Option<String>,
    /// Declared major.
    #[serde(default)]
    pub major: Option<String>,
    /// Declared minor.
    #[serde(default)]
    pub minor: Option<String>,
    /// Role flags.
    #[serde(default)]
    pub roles: Roles,
    /// Free-text home address as entered by the member.
    #[serde(default)]
    pub home: Option<String>,
    /// Picture reference (usually a URL).
    #[serde(default)]
    pub picture: Option<String>,
    /// Parsed and geocoded home address.
    #[serde(default)]
    pub home_location: HomeLocation,
}

impl MemberProfile {
    /// Create a profile with only an identifier and a name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the class year.
    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Set the major.
    #[must_use]
    pub fn with_major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }

    /// Set the minor.
    #[must_use]
    pub fn with_minor(mut self, minor: impl Into<String>) -> Self {
        self.minor = Some(minor.into());
        self
    }

    /// Grant a role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles = self.roles.with(role);
        self
    }

    /// Set the raw home address.
    #[must_use]
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Set the resolved home location.
    #[must_use]
    pub fn with_home_location(mut self, location: HomeLocation) -> Self {
        self.home_location = location;
        self
    }

    /// Set the picture reference.
    #[must_use]
    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }

    /// Class year, treating an empty string as absent.
    #[must_use]
    pub fn year(&self) -> Option<&str> {
        non_empty(self.year.as_deref())
    }

    /// Major, treating an empty string as absent.
    #[must_use]
    pub fn major(&self) -> Option<&str> {
        non_empty(self.major.as_deref())
    }

    /// Minor, treating an empty string as absent.
    #[must_use]
    pub fn minor(&self) -> Option<&str> {
        non_empty(self.minor.as_deref())
    }

    /// Resolved home state, if any.
    #[must_use]
    pub const fn home_state(&self) -> Option<StateCode> {
        self.home_location.state()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

//! Member roles within the program.
//!
//! The set of roles is closed: every member carries exactly five flags, so
//! role lookups are checked at compile time instead of going through string
//! keys.
//!
//! # Examples
//! ```
//! use huddle_core::{Role, Roles};
//!
//! assert_eq!(Role::Developer.as_str(), "dev");
//! let roles = Roles::default().with(Role::Mentor);
//! assert!(roles.has(Role::Mentor));
//! assert!(!roles.has(Role::Designer));
//! ```

use serde::{Deserialize, Serialize};

/// One of the five roles a member can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Software developer.
    Developer,
    /// Product or visual designer.
    Designer,
    /// Product manager.
    ProductManager,
    /// Core team member.
    CoreTeam,
    /// Mentor.
    Mentor,
}

impl Role {
    /// Every role, in the order used when scoring and reporting.
    pub const ALL: [Self; 5] = [
        Self::Developer,
        Self::Designer,
        Self::ProductManager,
        Self::CoreTeam,
        Self::Mentor,
    ];

    /// Return the short key used in stored records and query strings.
    ///
    /// # Examples
    /// ```
    /// use huddle_core::Role;
    ///
    /// assert_eq!(Role::ProductManager.as_str(), "pm");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Developer => "dev",
            Self::Designer => "des",
            Self::ProductManager => "pm",
            Self::CoreTeam => "core",
            Self::Mentor => "mentor",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role key is not one of the five known keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid role '{given}'; must be one of: dev, des, pm, core, mentor")]
pub struct UnknownRole {
    /// The rejected input.
    pub given: String,
}

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole {
                given: s.to_owned(),
            })
    }
}

/// The role flags carried by a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Roles {
    /// Developer flag.
    #[serde(default)]
    pub dev: bool,
    /// Designer flag.
    #[serde(default)]
    pub des: bool,
    /// Product manager flag.
    #[serde(default)]
    pub pm: bool,
    /// Core team flag.
    #[serde(default)]
    pub core: bool,
    /// Mentor flag.
    #[serde(default)]
    pub mentor: bool,
}

impl Roles {
    /// Report whether the member holds `role`.
    #[must_use]
    pub const fn has(&self, role: Role) -> bool {
        match role {
            Role::Developer => self.dev,
            Role::Designer => self.des,
            Role::ProductManager => self.pm,
            Role::CoreTeam => self.core,
            Role::Mentor => self.mentor,
        }
    }

    /// Set or clear a role flag.
    pub const fn set(&mut self, role: Role, held: bool) {
        match role {
            Role::Developer => self.dev = held,
            Role::Designer => self.des = held,
            Role::ProductManager => self.pm = held,
            Role::CoreTeam => self.core = held,
            Role::Mentor => self.mentor = held,
        }
    }

    /// Grant a role while returning `self` for chaining.
    #[must_use]
    pub const fn with(mut self, role: Role) -> Self {
        self.set(role, true);
        self
    }

    /// Iterate over the roles that are held, in [`Role::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        Role::ALL.into_iter().filter(|role| self.has(*role))
    }
}

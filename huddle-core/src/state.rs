//! US state codes and the closed name/abbreviation table.
//!
//! [`StateCode`] can only hold one of the 51 entries in [`STATES`], so a
//! parsed state is always a real postal abbreviation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Lowercase state names paired with their postal abbreviation.
///
/// Covers the 50 states and the District of Columbia.
pub const STATES: [(&str, &str); 51] = [
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
    ("district of columbia", "DC"),
];

/// A validated two-letter state code.
///
/// # Examples
/// ```
/// use huddle_core::StateCode;
///
/// let nh = StateCode::parse("New Hampshire").expect("known state");
/// assert_eq!(nh.as_str(), "NH");
/// assert_eq!(StateCode::parse("n.h."), Some(nh));
/// assert!(StateCode::parse("ZZ").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateCode(&'static str);

impl StateCode {
    /// Normalise free text into a state code.
    ///
    /// Case, surrounding whitespace and periods are ignored. Two-letter input
    /// must match a known abbreviation; anything else is looked up by full
    /// name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned: String = raw.trim().chars().filter(|c| *c != '.').collect();
        let lowered = cleaned.to_lowercase();
        if lowered.is_empty() {
            return None;
        }
        Self::from_abbreviation(&lowered).or_else(|| Self::from_name(&lowered))
    }

    /// Look up a postal abbreviation, ignoring ASCII case.
    #[must_use]
    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        STATES
            .iter()
            .find(|(_, code)| code.eq_ignore_ascii_case(abbreviation))
            .map(|(_, code)| Self(*code))
    }

    /// Look up a full state name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.to_lowercase();
        STATES
            .iter()
            .find(|(state_name, _)| *state_name == lowered)
            .map(|(_, code)| Self(*code))
    }

    /// Return the uppercase abbreviation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Return the lowercase full name of the state.
    #[must_use]
    pub fn name(self) -> &'static str {
        STATES
            .iter()
            .find(|(_, code)| *code == self.0)
            .map_or("", |(state_name, _)| *state_name)
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for StateCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for StateCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown state code '{raw}'")))
    }
}

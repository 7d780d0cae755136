//! Resolved home locations and the city lookup seam.
//!
//! A [`HomeLocation`] records what was parsed out of a member's free-text
//! home address and where its coordinates came from. Coordinates are WGS84
//! and stored as a [`geo::Coord`] with `x = longitude` and `y = latitude`;
//! the serialised form flattens them into `lat` and `lng`.

use geo::Coord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::StateCode;

/// Where a location's coordinates came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    /// The city/state pair was found in the reference table.
    ExactCityMatch,
    /// The city was unknown; the state's centroid was used instead.
    StateCentroidFallback,
    /// No coordinates are available.
    #[default]
    None,
}

impl LocationSource {
    /// Return the wire tag for this source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExactCityMatch => "exact_city_match",
            Self::StateCentroidFallback => "state_centroid_fallback",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for LocationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coordinates paired with the provenance that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Located {
    /// Longitude in `x`, latitude in `y`.
    pub coord: Coord<f64>,
    /// How the coordinates were obtained. Never [`LocationSource::None`].
    pub source: LocationSource,
}

/// A member's home address after parsing and geocoding.
///
/// Coordinates are either both present or both absent, and the source is
/// [`LocationSource::None`] exactly when they are absent. Constructors and
/// deserialisation both enforce this.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use huddle_core::{HomeLocation, LocationSource, StateCode};
///
/// let nh = StateCode::parse("NH").expect("known state");
/// let location = HomeLocation::exact_match(
///     "Hanover, NH",
///     "Hanover",
///     nh,
///     Coord { x: -72.3, y: 43.7 },
/// );
/// assert_eq!(location.source(), LocationSource::ExactCityMatch);
/// assert_eq!(location.lat(), Some(43.7));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "HomeLocationRecord", into = "HomeLocationRecord")]
pub struct HomeLocation {
    raw: Option<String>,
    city: Option<String>,
    state: Option<StateCode>,
    coord: Option<Coord<f64>>,
    source: LocationSource,
}

impl HomeLocation {
    /// The all-null record produced for absent input.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A record whose raw text could not be parsed into a city and state.
    #[must_use]
    pub fn unparsed(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Self::default()
        }
    }

    /// A record with a parsed city and state but no coordinates.
    #[must_use]
    pub fn parsed(raw: impl Into<String>, city: impl Into<String>, state: StateCode) -> Self {
        Self {
            raw: Some(raw.into()),
            city: Some(city.into()),
            state: Some(state),
            coord: None,
            source: LocationSource::None,
        }
    }

    /// A record located through the city reference table.
    #[must_use]
    pub fn exact_match(
        raw: impl Into<String>,
        city: impl Into<String>,
        state: StateCode,
        coord: Coord<f64>,
    ) -> Self {
        Self::parsed(raw, city, state).with_location(Located {
            coord,
            source: LocationSource::ExactCityMatch,
        })
    }

    /// A record located at its state's centroid.
    #[must_use]
    pub fn centroid_fallback(
        raw: impl Into<String>,
        city: impl Into<String>,
        state: StateCode,
        coord: Coord<f64>,
    ) -> Self {
        Self::parsed(raw, city, state).with_location(Located {
            coord,
            source: LocationSource::StateCentroidFallback,
        })
    }

    /// Attach coordinates. A `None` source clears them instead.
    #[must_use]
    pub fn with_location(mut self, located: Located) -> Self {
        if located.source == LocationSource::None {
            self.coord = None;
        } else {
            self.coord = Some(located.coord);
        }
        self.source = located.source;
        self
    }

    /// The raw home string as supplied.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// The normalised city name.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// The parsed state code.
    #[must_use]
    pub const fn state(&self) -> Option<StateCode> {
        self.state
    }

    /// Coordinates, when known.
    #[must_use]
    pub const fn coord(&self) -> Option<Coord<f64>> {
        self.coord
    }

    /// Latitude, when known.
    #[must_use]
    pub fn lat(&self) -> Option<f64> {
        self.coord.map(|c| c.y)
    }

    /// Longitude, when known.
    #[must_use]
    pub fn lng(&self) -> Option<f64> {
        self.coord.map(|c| c.x)
    }

    /// Provenance of the coordinates.
    #[must_use]
    pub const fn source(&self) -> LocationSource {
        self.source
    }

    /// Report whether coordinates are available.
    #[must_use]
    pub const fn has_coordinates(&self) -> bool {
        self.coord.is_some()
    }
}

/// Errors raised when a serialised location breaks the record invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HomeLocationError {
    /// Only one of `lat` and `lng` was present.
    #[error("lat and lng must both be present or both be null")]
    PartialCoordinates,
    /// Coordinates were present with source `none`, or absent with another
    /// source.
    #[error("source '{declared}' is inconsistent with the presence of coordinates")]
    InconsistentSource {
        /// The declared source.
        declared: LocationSource,
    },
}

/// Wire representation of [`HomeLocation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeLocationRecord {
    /// Raw home string.
    #[serde(default)]
    pub raw: Option<String>,
    /// Parsed city.
    #[serde(default)]
    pub city: Option<String>,
    /// Parsed two-letter state code.
    #[serde(default)]
    pub state: Option<StateCode>,
    /// Latitude.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude.
    #[serde(default)]
    pub lng: Option<f64>,
    /// Provenance tag.
    #[serde(default)]
    pub source: LocationSource,
}

impl TryFrom<HomeLocationRecord> for HomeLocation {
    type Error = HomeLocationError;

    fn try_from(record: HomeLocationRecord) -> Result<Self, Self::Error> {
        let coord = match (record.lat, record.lng) {
            (Some(lat), Some(lng)) => Some(Coord { x: lng, y: lat }),
            (None, None) => None,
            _ => return Err(HomeLocationError::PartialCoordinates),
        };
        if coord.is_some() == (record.source == LocationSource::None) {
            return Err(HomeLocationError::InconsistentSource {
                declared: record.source,
            });
        }
        Ok(Self {
            raw: record.raw,
            city: record.city,
            state: record.state,
            coord,
            source: record.source,
        })
    }
}

impl From<HomeLocation> for HomeLocationRecord {
    fn from(location: HomeLocation) -> Self {
        Self {
            lat: location.lat(),
            lng: location.lng(),
            raw: location.raw,
            city: location.city,
            state: location.state,
            source: location.source,
        }
    }
}

/// Look up coordinates for a normalised city within a state.
///
/// Implementations must be thread-safe (`Send` + `Sync`) because a single
/// index is shared by every resolution in the process. Lookups are
/// infallible; an index that could not be loaded behaves as empty.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use huddle_core::{CityIndex, StateCode};
///
/// struct Nowhere;
///
/// impl CityIndex for Nowhere {
///     fn coordinates(&self, _city: &str, _state: StateCode) -> Option<Coord<f64>> {
///         None
///     }
/// }
///
/// let nh = StateCode::parse("NH").expect("known state");
/// assert!(Nowhere.coordinates("Hanover", nh).is_none());
/// ```
pub trait CityIndex: Send + Sync {
    /// Return coordinates for `city` in `state`, if known.
    fn coordinates(&self, city: &str, state: StateCode) -> Option<Coord<f64>>;
}

impl<T: CityIndex + ?Sized> CityIndex for &T {
    fn coordinates(&self, city: &str, state: StateCode) -> Option<Coord<f64>> {
        (**self).coordinates(city, state)
    }
}

impl<T: CityIndex + ?Sized> CityIndex for std::sync::Arc<T> {
    fn coordinates(&self, city: &str, state: StateCode) -> Option<Coord<f64>> {
        (**self).coordinates(city, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn nh() -> StateCode {
        StateCode::parse("NH").unwrap()
    }

    #[test]
    fn empty_record_serialises_all_null() {
        let json = serde_json::to_value(HomeLocation::empty()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "raw": null,
                "city": null,
                "state": null,
                "lat": null,
                "lng": null,
                "source": "none",
            })
        );
    }

    #[test]
    fn located_record_flattens_coordinates() {
        let location =
            HomeLocation::centroid_fallback("Lyme, NH", "Lyme", nh(), Coord { x: -71.5, y: 43.2 });
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["lat"], 43.2);
        assert_eq!(json["lng"], -71.5);
        assert_eq!(json["state"], "NH");
        assert_eq!(json["source"], "state_centroid_fallback");
        let back: HomeLocation = serde_json::from_value(json).unwrap();
        assert_eq!(back, location);
    }

    #[rstest]
    #[case(r#"{"lat": 1.0, "source": "exact_city_match"}"#)]
    #[case(r#"{"lat": 1.0, "lng": 2.0, "source": "none"}"#)]
    #[case(r#"{"source": "state_centroid_fallback"}"#)]
    fn rejects_inconsistent_records(#[case] json: &str) {
        assert!(serde_json::from_str::<HomeLocation>(json).is_err());
    }

    #[test]
    fn none_source_clears_coordinates() {
        let location = HomeLocation::parsed("Lyme, NH", "Lyme", nh()).with_location(Located {
            coord: Coord { x: 1.0, y: 2.0 },
            source: LocationSource::None,
        });
        assert!(!location.has_coordinates());
        assert_eq!(location.source(), LocationSource::None);
    }
}

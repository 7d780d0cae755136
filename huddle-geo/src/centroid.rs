//! Fallback coordinates for states whose cities are missing from the table.
//!
//! Only thirteen states carry a centroid; members elsewhere keep their
//! parsed city and state but no coordinates.

use geo::Coord;
use huddle_core::StateCode;

/// `(abbreviation, latitude, longitude)` for every state with a centroid.
pub const STATE_CENTROIDS: [(&str, f64, f64); 13] = [
    ("NH", 43.1939, -71.5724),
    ("MA", 42.4072, -71.3824),
    ("CA", 36.7783, -119.4179),
    ("NY", 43.0, -75.0),
    ("VT", 44.0, -72.7),
    ("CT", 41.6, -72.7),
    ("NJ", 40.1, -74.7),
    ("PA", 41.0, -77.5),
    ("TX", 31.0, -100.0),
    ("FL", 28.0, -82.0),
    ("IL", 40.0, -89.0),
    ("WA", 47.4, -120.7),
    ("OR", 44.0, -120.6),
];

/// Centroid for `state`, if one is defined.
///
/// # Examples
/// ```
/// use huddle_core::StateCode;
/// use huddle_geo::state_centroid;
///
/// let nh = StateCode::parse("NH").expect("known state");
/// let centroid = state_centroid(nh).expect("NH has a centroid");
/// assert_eq!((centroid.y, centroid.x), (43.1939, -71.5724));
///
/// let ohio = StateCode::parse("OH").expect("known state");
/// assert!(state_centroid(ohio).is_none());
/// ```
#[must_use]
pub fn state_centroid(state: StateCode) -> Option<Coord<f64>> {
    STATE_CENTROIDS
        .iter()
        .find(|(code, _, _)| *code == state.as_str())
        .map(|&(_, lat, lng)| Coord { x: lng, y: lat })
}

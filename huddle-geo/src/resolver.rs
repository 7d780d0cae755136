//! Resolve free-text home addresses into located records.

use camino::Utf8PathBuf;
use huddle_core::{CityIndex, HomeLocation, Located, LocationSource};

use crate::{LazyCityTable, ParsedHome, parse_home, state_centroid};

/// Default location of the city reference CSV, relative to the working
/// directory.
pub const DEFAULT_CITIES_PATH: &str = "data/uscities.csv";

/// Turns raw home strings into [`HomeLocation`] records.
///
/// The resolver holds a read-only [`CityIndex`] and no other state, so one
/// instance can serve every thread in the process.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use huddle_core::{LocationSource, StateCode};
/// use huddle_geo::{CityTable, HomeLocationResolver};
///
/// let mut table = CityTable::new();
/// let nh = StateCode::parse("NH").expect("known state");
/// table.insert("Hanover", nh, Coord { x: -72.3, y: 43.7 });
///
/// let resolver = HomeLocationResolver::new(table);
/// let hanover = resolver.resolve(Some("Hanover, NH"));
/// assert_eq!(hanover.source(), LocationSource::ExactCityMatch);
///
/// let lyme = resolver.resolve(Some("Lyme, NH"));
/// assert_eq!(lyme.source(), LocationSource::StateCentroidFallback);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HomeLocationResolver<I> {
    index: I,
}

impl HomeLocationResolver<LazyCityTable> {
    /// Resolver backed by a CSV that is read on first use.
    #[must_use]
    pub fn lazy(path: impl Into<Utf8PathBuf>) -> Self {
        Self::new(LazyCityTable::new(path))
    }
}

impl<I: CityIndex> HomeLocationResolver<I> {
    /// Wrap a city index.
    pub const fn new(index: I) -> Self {
        Self { index }
    }

    /// The underlying city index.
    pub const fn index(&self) -> &I {
        &self.index
    }

    /// Resolve `raw` into a location record.
    ///
    /// Never fails. Absent or empty input yields [`HomeLocation::empty`]
    /// without consulting the index; any other input that does not parse,
    /// whitespace included, keeps only the raw text verbatim.
    #[must_use]
    pub fn resolve(&self, raw: Option<&str>) -> HomeLocation {
        let Some(text) = raw.filter(|text| !text.is_empty()) else {
            return HomeLocation::empty();
        };
        let Some(parsed) = parse_home(text) else {
            return HomeLocation::unparsed(text);
        };
        let located = self.locate(&parsed);
        let mut location = HomeLocation::parsed(text, parsed.city, parsed.state);
        if let Some(found) = located {
            location = location.with_location(found);
        }
        location
    }

    /// Find coordinates for a parsed address: the exact city first, then the
    /// state centroid.
    #[must_use]
    pub fn locate(&self, parsed: &ParsedHome) -> Option<Located> {
        self.index
            .coordinates(&parsed.city, parsed.state)
            .map(|coord| Located {
                coord,
                source: LocationSource::ExactCityMatch,
            })
            .or_else(|| {
                state_centroid(parsed.state).map(|coord| Located {
                    coord,
                    source: LocationSource::StateCentroidFallback,
                })
            })
    }
}

//! City coordinate reference table.
//!
//! The table is built from a CSV with a header row (for example the
//! `uscities.csv` export) and is immutable afterwards. Lookups are keyed by
//! the lowercase `"city,state"` pair produced by [`city_state_key`].

use std::collections::HashMap;
use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};
use csv::StringRecord;
use geo::Coord;
use huddle_core::{CityIndex, StateCode};
use log::{debug, warn};
use once_cell::sync::OnceCell;

use crate::{CityTableError, normalize_city};

const CITY_COLUMNS: &[&str] = &["city"];
const STATE_COLUMNS: &[&str] = &["state_id", "state"];
const LAT_COLUMNS: &[&str] = &["lat", "latitude"];
const LNG_COLUMNS: &[&str] = &["lng", "longitude"];

/// Build the lookup key for a city within a state.
///
/// # Examples
/// ```
/// use huddle_core::StateCode;
/// use huddle_geo::city_state_key;
///
/// let nh = StateCode::parse("NH").expect("known state");
/// assert_eq!(city_state_key("Hanover", nh), "hanover,nh");
/// ```
#[must_use]
pub fn city_state_key(city: &str, state: StateCode) -> String {
    format!(
        "{},{}",
        city.to_lowercase(),
        state.as_str().to_ascii_lowercase()
    )
}

/// In-memory city coordinate table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityTable {
    cities: HashMap<String, Coord<f64>>,
}

impl CityTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the coordinates for `city` in `state`.
    pub fn insert(&mut self, city: &str, state: StateCode, coord: Coord<f64>) {
        self.cities.insert(city_state_key(city, state), coord);
    }

    /// Number of distinct cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Report whether the table has no cities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Load the table from a CSV file.
    ///
    /// # Errors
    /// Returns [`CityTableError`] when the file cannot be opened, the CSV is
    /// malformed, or the header lacks a city, state, latitude or longitude
    /// column.
    pub fn load(path: &Utf8Path) -> Result<Self, CityTableError> {
        let file = huddle_fs::open_file(path).map_err(|source| CityTableError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path)
    }

    /// Load the table from a CSV file, falling back to an empty table.
    ///
    /// Failures are logged at `warn`.
    #[must_use]
    pub fn load_or_empty(path: &Utf8Path) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            warn!("city table unavailable, continuing without exact matches: {err}");
            Self::default()
        })
    }

    /// Read CSV rows from `reader`.
    ///
    /// `origin` names the source in errors and logs. Header names are
    /// matched case-insensitively: `city`; `state_id` or `state`; `lat` or
    /// `latitude`; `lng` or `longitude`. Rows whose city, state or
    /// coordinates cannot be used are skipped, as are rows that are not
    /// valid UTF-8. Later rows replace earlier rows with the same key.
    ///
    /// # Errors
    /// Returns [`CityTableError::ReadCsv`] for an unreadable header or an
    /// IO failure mid-stream, and [`CityTableError::MissingColumn`] when a
    /// required column is absent.
    pub fn from_reader<R: Read>(reader: R, origin: &Utf8Path) -> Result<Self, CityTableError> {
        let read_error = |source: csv::Error| CityTableError::ReadCsv {
            path: origin.to_path_buf(),
            source,
        };
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let columns = Columns::from_headers(csv_reader.headers().map_err(read_error)?, origin)?;

        let mut table = Self::new();
        let mut skipped = 0_usize;
        for row in csv_reader.records() {
            let record = match row {
                Ok(record) => record,
                Err(err) if matches!(err.kind(), csv::ErrorKind::Io(_)) => {
                    return Err(read_error(err));
                }
                Err(err) => {
                    debug!("skipping undecodable row in {origin}: {err}");
                    skipped += 1;
                    continue;
                }
            };
            match columns.extract(&record) {
                Some((city, state, coord)) => table.insert(&city, state, coord),
                None => skipped += 1,
            }
        }
        debug!(
            "loaded {} cities from {origin}; skipped {skipped} unusable rows",
            table.len()
        );
        Ok(table)
    }
}

impl CityIndex for CityTable {
    fn coordinates(&self, city: &str, state: StateCode) -> Option<Coord<f64>> {
        self.cities.get(&city_state_key(city, state)).copied()
    }
}

/// Header positions of the four columns the table needs.
struct Columns {
    city: usize,
    state: usize,
    lat: usize,
    lng: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord, origin: &Utf8Path) -> Result<Self, CityTableError> {
        let require = |names: &[&str], column: &'static str| {
            find_first(headers, names).ok_or_else(|| CityTableError::MissingColumn {
                path: origin.to_path_buf(),
                column,
            })
        };
        Ok(Self {
            city: require(CITY_COLUMNS, "city")?,
            state: require(STATE_COLUMNS, "state")?,
            lat: require(LAT_COLUMNS, "lat")?,
            lng: require(LNG_COLUMNS, "lng")?,
        })
    }

    fn extract(&self, record: &StringRecord) -> Option<(String, StateCode, Coord<f64>)> {
        let city = record.get(self.city).and_then(normalize_city)?;
        let state = record.get(self.state).and_then(StateCode::parse)?;
        let lat = parse_degrees(record.get(self.lat)?)?;
        let lng = parse_degrees(record.get(self.lng)?)?;
        Some((city, state, Coord { x: lng, y: lat }))
    }
}

/// Locate the first of `names` present in `headers`, honouring the order of
/// `names` rather than the order of the headers.
fn find_first(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    names.iter().find_map(|name| {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    })
}

fn parse_degrees(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// City table loaded from a CSV path on first use.
///
/// Concurrent first lookups block on a single load; every caller then sees
/// the same table for the life of the value. A missing or unreadable file
/// yields an empty table and a `warn` log.
#[derive(Debug)]
pub struct LazyCityTable {
    path: Utf8PathBuf,
    table: OnceCell<CityTable>,
}

impl LazyCityTable {
    /// Defer loading `path` until the first lookup.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: OnceCell::new(),
        }
    }

    /// CSV path backing the table.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Report whether the table has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// Return the table, loading it on first call.
    #[must_use]
    pub fn get(&self) -> &CityTable {
        self.table
            .get_or_init(|| CityTable::load_or_empty(&self.path))
    }
}

impl CityIndex for LazyCityTable {
    fn coordinates(&self, city: &str, state: StateCode) -> Option<Coord<f64>> {
        self.get().coordinates(city, state)
    }
}

//! Home-address parsing and geocoding for member profiles.
//!
//! A member's free-text home (`"Hanover, NH"`, `"Austin TX"`, ...) is parsed
//! into a city and a [`StateCode`](huddle_core::StateCode), then located
//! through a [`CityIndex`](huddle_core::CityIndex): an exact city match from
//! a reference CSV when one exists, otherwise a fixed per-state centroid.
//! The result is a [`HomeLocation`](huddle_core::HomeLocation) recording
//! where the coordinates came from.
//!
//! Resolution never fails. Unparseable input keeps its raw text, and a
//! missing reference CSV behaves as an empty table.

#![forbid(unsafe_code)]

mod centroid;
mod error;
mod parse;
mod resolver;
mod table;

pub use centroid::{STATE_CENTROIDS, state_centroid};
pub use error::CityTableError;
pub use parse::{ParsedHome, clean_home, normalize_city, parse_home};
pub use resolver::{DEFAULT_CITIES_PATH, HomeLocationResolver};
pub use table::{CityTable, LazyCityTable, city_state_key};

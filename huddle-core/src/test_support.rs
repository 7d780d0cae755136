//! In-memory helpers used by unit and behaviour tests across the workspace.

use std::collections::HashMap;

use geo::Coord;

use crate::{CityIndex, StateCode};

/// `CityIndex` backed by a small hash map.
///
/// Keys are compared case-insensitively, mirroring the production table.
#[derive(Default, Debug, Clone)]
pub struct MemoryCityIndex {
    cities: HashMap<(String, StateCode), Coord<f64>>,
}

impl MemoryCityIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city at `lat`/`lng`, returning `self` for chaining.
    ///
    /// # Panics
    /// Panics when `state` is not a known state code.
    pub fn with_city(mut self, city: &str, state: &str, lat: f64, lng: f64) -> Self {
        let code = StateCode::parse(state).unwrap_or_else(|| panic!("unknown state {state}"));
        self.cities
            .insert((city.to_lowercase(), code), Coord { x: lng, y: lat });
        self
    }
}

impl CityIndex for MemoryCityIndex {
    fn coordinates(&self, city: &str, state: StateCode) -> Option<Coord<f64>> {
        self.cities.get(&(city.to_lowercase(), state)).copied()
    }
}

/// `CityIndex` that knows no cities.
#[derive(Default, Debug, Clone, Copy)]
pub struct EmptyCityIndex;

impl CityIndex for EmptyCityIndex {
    fn coordinates(&self, _city: &str, _state: StateCode) -> Option<Coord<f64>> {
        None
    }
}

//! Attach resolved home locations to a roster.

use huddle_core::{CityIndex, HomeLocation, LocationSource, MemberProfile};
use huddle_geo::HomeLocationResolver;
use log::info;
use serde::Serialize;

/// How many unmatched home strings an [`EnrichSummary`] keeps.
pub const UNMATCHED_SAMPLE: usize = 10;

/// Outcome counts for one enrichment pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnrichSummary {
    /// Homes located through the city table.
    pub matched: usize,
    /// Homes located at a state centroid.
    pub fallback: usize,
    /// Homes left without coordinates, including members with no home.
    pub missing: usize,
    /// Members processed.
    pub total: usize,
    /// First few raw home strings that could not be located.
    pub unmatched: Vec<String>,
}

impl EnrichSummary {
    /// Count one resolved location.
    pub fn record(&mut self, location: &HomeLocation) {
        self.total += 1;
        match location.source() {
            LocationSource::ExactCityMatch => self.matched += 1,
            LocationSource::StateCentroidFallback => self.fallback += 1,
            LocationSource::None => {
                self.missing += 1;
                if let Some(raw) = location.raw()
                    && self.unmatched.len() < UNMATCHED_SAMPLE
                {
                    self.unmatched.push(raw.to_owned());
                }
            }
        }
    }
}

/// Resolve every member's `home` into its `home_location`.
///
/// Existing locations are overwritten. The summary is logged at `info`.
pub fn enrich_members<I: CityIndex>(
    resolver: &HomeLocationResolver<I>,
    members: &mut [MemberProfile],
) -> EnrichSummary {
    let mut summary = EnrichSummary::default();
    for member in members.iter_mut() {
        member.home_location = resolver.resolve(member.home.as_deref());
        summary.record(&member.home_location);
    }
    info!(
        "home geocoding results: matched={}, fallback={}, missing={}, total={}",
        summary.matched, summary.fallback, summary.missing, summary.total
    );
    if !summary.unmatched.is_empty() {
        info!("first unmatched home values: {:?}", summary.unmatched);
    }
    summary
}

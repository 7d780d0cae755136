//! Roster import, export and enrichment for the Huddle directory.
//!
//! Responsibilities:
//! - Read member rosters in the stored or seed JSON shape.
//! - Resolve every member's free-text home into a located record.
//! - Write enriched rosters back out.
//!
//! Boundaries:
//! - Domain rules live in `huddle-core`; address parsing and geocoding in
//!   `huddle-geo`.
//! - Filesystem access goes through `huddle-fs`.

#![forbid(unsafe_code)]

mod enrich;
mod error;
mod roster;

pub use enrich::{EnrichSummary, UNMATCHED_SAMPLE, enrich_members};
pub use error::RosterError;
pub use roster::{load_roster, parse_roster, write_roster};

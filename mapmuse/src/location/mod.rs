//! Location sources and fallback selection.
//!
//! The actual platform location plumbing lives outside this crate; the
//! pipeline only needs a [`LocationSource`] that can report the last known
//! coordinate, if any. Invalid or missing readings are replaced with a
//! member of a fixed pool of plausible locations so a tick always has
//! something to render.

mod fallback;

pub use fallback::{fallback_location, FALLBACK_LOCATIONS};

use crate::coord::Coordinate;
use rand::Rng;
use tracing::debug;

/// Source of last-known device coordinates.
///
/// Implementations wrap whatever location facility the host offers. A source
/// returning `None`, or a coordinate failing the validity check, triggers
/// fallback substitution; neither is an error.
pub trait LocationSource {
    /// Returns the last known coordinate, or `None` if no reading exists yet.
    fn last_known(&self) -> Option<Coordinate>;
}

/// A location source pinned to a fixed coordinate.
///
/// Used for CLI overrides and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinate);

impl LocationSource for FixedLocation {
    fn last_known(&self) -> Option<Coordinate> {
        Some(self.0)
    }
}

/// Resolves a publishable coordinate from a location source.
///
/// Returns the source's reading when it passes the validity check, otherwise
/// substitutes a uniformly chosen member of the fallback pool. Never fails
/// and never performs I/O.
pub fn resolve_location<L: LocationSource, R: Rng>(source: &L, rng: &mut R) -> Coordinate {
    match source.last_known() {
        Some(coord) if coord.is_valid() => coord,
        Some(coord) => {
            debug!(lat = coord.lat, lon = coord.lon, "invalid location reading, using fallback");
            fallback_location(rng)
        }
        None => {
            debug!("no location reading available, using fallback");
            fallback_location(rng)
        }
    }
}

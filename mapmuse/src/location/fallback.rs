//! Fixed pool of fallback locations.

use crate::coord::Coordinate;
use rand::Rng;

/// Plausible city-center coordinates used when no valid reading exists.
///
/// Publishing a map of a recognizable place beats publishing nothing, so an
/// invalid reading degrades to one of these rather than failing the tick.
pub const FALLBACK_LOCATIONS: &[Coordinate] = &[
    Coordinate { lat: 45.4642, lon: 9.19 },     // Milan
    Coordinate { lat: 51.5074, lon: -0.1278 },  // London
    Coordinate { lat: 48.8566, lon: 2.3522 },   // Paris
    Coordinate { lat: 40.7128, lon: -74.0060 }, // New York
    Coordinate { lat: 37.7749, lon: -122.4194 }, // San Francisco
    Coordinate { lat: 35.6762, lon: 139.6503 }, // Tokyo
    Coordinate { lat: -33.8688, lon: 151.2093 }, // Sydney
    Coordinate { lat: 52.5200, lon: 13.4050 },  // Berlin
    Coordinate { lat: 41.9028, lon: 12.4964 },  // Rome
    Coordinate { lat: 59.9139, lon: 10.7522 },  // Oslo
];

/// Picks a uniformly random member of the fallback pool.
///
/// Pure function of the random source; always terminates with a pool member,
/// no retries and no I/O.
pub fn fallback_location<R: Rng>(rng: &mut R) -> Coordinate {
    FALLBACK_LOCATIONS[rng.gen_range(0..FALLBACK_LOCATIONS.len())]
}

//! Geographic coordinate handling.
//!
//! Provides the [`Coordinate`] value type used throughout the pipeline,
//! together with the validity bounds that decide whether a location reading
//! can be published or must be replaced with a fallback.

mod types;

pub use types::{Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

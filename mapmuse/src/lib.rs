//! MapMuse - themed map wallpapers from your last known location
//!
//! This library derives a static map image URL from a last-known location,
//! themes it according to user preferences and an XML theme catalog, and
//! publishes an artwork record to a pluggable sink on a configurable
//! schedule.
//!
//! # High-Level API
//!
//! The [`source`] module ties everything together:
//!
//! ```no_run
//! use mapmuse::geocode::NullGeocoder;
//! use mapmuse::location::FixedLocation;
//! use mapmuse::coord::Coordinate;
//! use mapmuse::source::{JsonFilePublisher, MapArtSource};
//!
//! let mut source = MapArtSource::new(
//!     FixedLocation(Coordinate::new(45.4642, 9.19)),
//!     NullGeocoder,
//!     JsonFilePublisher::at_default_path(),
//! );
//! let outcome = source.tick().expect("tick failed");
//! println!("published {}", outcome.artwork.image_url);
//! ```

pub mod config;
pub mod coord;
pub mod geocode;
pub mod location;
pub mod logging;
pub mod provider;
pub mod source;
pub mod theme;

/// Version of the MapMuse library and CLI.
///
/// Synchronized across the workspace; injected from `Cargo.toml` at compile
/// time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
